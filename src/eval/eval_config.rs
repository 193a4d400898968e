use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};
use crate::loss::cost_kind::CostKind;
use crate::math::from_rows;
use crate::params::{ParamRole, Parameters};

/// One named parameter as written in an evaluation file.
///
/// `role` may be omitted; it is then inferred from the name (`W...` is a
/// weight, anything else a bias).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ParamRole>,
    pub value: Vec<Vec<f64>>,
}

/// Everything needed to evaluate one batch: the pairing, the labels and
/// pre-activations (row vectors, one column per sample), the network
/// parameters and the L2 strength.
///
/// ```json
/// {
///   "cost": "sigmoid_cross_entropy",
///   "lambd": 0.7,
///   "labels":         [[1, 0, 1]],
///   "pre_activation": [[0.3, -1.2, 2.0]],
///   "params": {
///     "W1": { "value": [[0.1, -0.4], [0.2, 0.0]] },
///     "b1": { "value": [[0.0], [0.0]] }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub cost: CostKind,
    /// L2 regularization strength; 0 disables the penalty.
    #[serde(default)]
    pub lambd: f64,
    pub labels: Vec<Vec<f64>>,
    pub pre_activation: Vec<Vec<f64>>,
    #[serde(default)]
    pub params: BTreeMap<String, ParamEntry>,
}

impl EvalConfig {
    /// Creates a config without parameters and with regularization disabled.
    pub fn new(cost: CostKind, labels: Vec<Vec<f64>>, pre_activation: Vec<Vec<f64>>) -> Self {
        EvalConfig {
            cost,
            lambd: 0.0,
            labels,
            pre_activation,
            params: BTreeMap::new(),
        }
    }

    pub fn with_lambd(mut self, lambd: f64) -> Self {
        self.lambd = lambd;
        self
    }

    pub fn with_param(
        mut self,
        name: impl Into<String>,
        role: Option<ParamRole>,
        value: Vec<Vec<f64>>,
    ) -> Self {
        self.params.insert(name.into(), ParamEntry { role, value });
        self
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<EvalConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Checks values serde cannot: `lambd` must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.lambd.is_finite() && self.lambd >= 0.0) {
            return Err(CostError::InvalidInput(format!(
                "lambd must be finite and >= 0, got {}",
                self.lambd
            )));
        }
        Ok(())
    }

    /// Converts the `params` table into `Parameters`, inferring missing roles
    /// from the parameter names.
    pub fn parameters(&self) -> Result<Parameters> {
        let mut params = Parameters::new();
        for (name, entry) in &self.params {
            let value = from_rows(&entry.value)
                .map_err(|e| CostError::InvalidInput(format!("parameter {name}: {e}")))?;
            let role = entry.role.unwrap_or_else(|| ParamRole::from_name(name));
            params.insert(name.as_str(), role, value);
        }
        Ok(params)
    }
}
