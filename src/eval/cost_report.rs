use serde::{Deserialize, Serialize};

use crate::activation::FinalActivation;
use crate::loss::cost_kind::CostKind;

/// Result of one `evaluate` run.
///
/// Matrices are written as row vectors, the same layout as the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub cost_kind: CostKind,
    pub activation: FinalActivation,
    /// Number of samples `m` (columns of the label matrix).
    pub samples: usize,
    /// Cost of the pairing alone.
    pub cost: f64,
    /// `(λ / 2m) · Σ W²`; zero when regularization is disabled.
    pub l2_penalty: f64,
    /// Cost plus L2 penalty.
    pub regularized_cost: f64,
    /// `AL`.
    pub activation_output: Vec<Vec<f64>>,
    /// `dZL`.
    pub gradient: Vec<Vec<f64>>,
}
