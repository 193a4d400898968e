use std::collections::BTreeMap;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Names starting with this prefix are weights (`W1`, `W2`, ...) when no
/// role is given explicitly.
pub const WEIGHT_PREFIX: &str = "W";

/// What a named parameter is to the network. Only weights are penalized by
/// L2 regularization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamRole {
    Weight,
    Bias,
}

impl ParamRole {
    /// `Weight` for names starting with `WEIGHT_PREFIX`, otherwise `Bias`.
    pub fn from_name(name: &str) -> ParamRole {
        if name.starts_with(WEIGHT_PREFIX) {
            ParamRole::Weight
        } else {
            ParamRole::Bias
        }
    }
}

/// A parameter matrix and the role it plays.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub role: ParamRole,
    pub value: Array2<f64>,
}

/// Named network parameters, each tagged with its role.
///
/// Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: BTreeMap<String, Parameter>,
}

impl Parameters {
    pub fn new() -> Parameters {
        Parameters::default()
    }

    /// Inserts or replaces `name`, returning the previous entry.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        role: ParamRole,
        value: Array2<f64>,
    ) -> Option<Parameter> {
        self.entries.insert(name.into(), Parameter { role, value })
    }

    pub fn insert_weight(
        &mut self,
        name: impl Into<String>,
        value: Array2<f64>,
    ) -> Option<Parameter> {
        self.insert(name, ParamRole::Weight, value)
    }

    pub fn insert_bias(
        &mut self,
        name: impl Into<String>,
        value: Array2<f64>,
    ) -> Option<Parameter> {
        self.insert(name, ParamRole::Bias, value)
    }

    /// Inserts with the role inferred from the name (see `ParamRole::from_name`).
    pub fn insert_by_name(
        &mut self,
        name: impl Into<String>,
        value: Array2<f64>,
    ) -> Option<Parameter> {
        let name = name.into();
        let role = ParamRole::from_name(&name);
        self.insert(name, role, value)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Values of every entry with role `Weight`.
    pub fn weights(&self) -> impl Iterator<Item = &Array2<f64>> {
        self.entries
            .values()
            .filter(|p| p.role == ParamRole::Weight)
            .map(|p| &p.value)
    }
}

impl<S: Into<String>> FromIterator<(S, Array2<f64>)> for Parameters {
    /// Collects `(name, value)` pairs, inferring each role from its name.
    fn from_iter<I: IntoIterator<Item = (S, Array2<f64>)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (name, value) in iter {
            params.insert_by_name(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn role_inferred_from_leading_w() {
        assert_eq!(ParamRole::from_name("W1"), ParamRole::Weight);
        assert_eq!(ParamRole::from_name("W"), ParamRole::Weight);
        assert_eq!(ParamRole::from_name("b1"), ParamRole::Bias);
        assert_eq!(ParamRole::from_name("w1"), ParamRole::Bias);
        assert_eq!(ParamRole::from_name("gamma"), ParamRole::Bias);
    }

    #[test]
    fn explicit_role_overrides_name() {
        let mut params = Parameters::new();
        params.insert("kernel", ParamRole::Weight, array![[2.0]]);
        params.insert("Wb", ParamRole::Bias, array![[3.0]]);

        let weights: Vec<_> = params.weights().collect();
        assert_eq!(weights, vec![&array![[2.0]]]);
    }

    #[test]
    fn collect_uses_name_convention() {
        let params: Parameters = vec![
            ("W1", array![[1.0, 2.0]]),
            ("b1", array![[0.5]]),
            ("W2", array![[3.0]]),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("b1").map(|p| p.role), Some(ParamRole::Bias));
        assert_eq!(params.weights().count(), 2);

        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["W1", "W2", "b1"]);
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut params = Parameters::new();
        assert!(params.insert_weight("W1", array![[1.0]]).is_none());
        let previous = params.insert_weight("W1", array![[2.0]]).unwrap();
        assert_eq!(previous.value, array![[1.0]]);
        assert_eq!(params.len(), 1);
    }
}
