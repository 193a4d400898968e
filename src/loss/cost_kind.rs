use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::activation::FinalActivation;
use crate::error::Result;
use crate::loss::final_activation_and_cost::{CostAndGradient, FinalActivationAndCost};
use crate::loss::linear_mse::LinearMinimumSquareError;
use crate::loss::sigmoid_cross_entropy::SigmoidCrossEntropy;
use crate::loss::sigmoid_perceptron::SigmoidPerceptron;
use crate::loss::softmax_cross_entropy::SoftmaxCrossEntropy;

/// Selects which activation/cost pairing a training loop uses.
///
/// - `SigmoidCrossEntropy`      — binary classification.
/// - `SigmoidPerceptron`        — binary classification, margin cost.
/// - `SoftmaxCrossEntropy`      — multi-class; one-hot label columns.
/// - `LinearMinimumSquareError` — regression.
///
/// `CostKind` implements `FinalActivationAndCost` itself by forwarding to the
/// matching pairing, so it can be stored in configuration and used directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum CostKind {
    SigmoidCrossEntropy,
    SigmoidPerceptron,
    SoftmaxCrossEntropy,
    LinearMinimumSquareError,
}

impl CostKind {
    pub const ALL: [CostKind; 4] = [
        CostKind::SigmoidCrossEntropy,
        CostKind::SigmoidPerceptron,
        CostKind::SoftmaxCrossEntropy,
        CostKind::LinearMinimumSquareError,
    ];

    /// The output activation this pairing applies to `ZL`.
    pub fn activation(&self) -> FinalActivation {
        match self {
            CostKind::SigmoidCrossEntropy | CostKind::SigmoidPerceptron => FinalActivation::Sigmoid,
            CostKind::SoftmaxCrossEntropy => FinalActivation::Softmax,
            CostKind::LinearMinimumSquareError => FinalActivation::Identity,
        }
    }

    fn pairing(&self) -> &'static dyn FinalActivationAndCost {
        match self {
            CostKind::SigmoidCrossEntropy => &SigmoidCrossEntropy,
            CostKind::SigmoidPerceptron => &SigmoidPerceptron,
            CostKind::SoftmaxCrossEntropy => &SoftmaxCrossEntropy,
            CostKind::LinearMinimumSquareError => &LinearMinimumSquareError,
        }
    }
}

impl FinalActivationAndCost for CostKind {
    fn name(&self) -> &'static str {
        self.pairing().name()
    }

    fn final_activation(&self, zl: &Array2<f64>) -> Array2<f64> {
        self.pairing().final_activation(zl)
    }

    fn final_activation_and_cost(
        &self,
        y: &Array2<f64>,
        zl: &Array2<f64>,
    ) -> Result<CostAndGradient> {
        self.pairing().final_activation_and_cost(y, zl)
    }

    fn output_cost(&self, a: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
        self.pairing().output_cost(a, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn serde_names_match_pairing_names() {
        for kind in CostKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: CostKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn activation_matches_pairing_output() {
        let zl = array![[0.4, -2.0, 1.0], [1.5, 0.0, -0.7]];
        for kind in CostKind::ALL {
            assert_eq!(kind.final_activation(&zl), kind.activation().apply(&zl), "{}", kind.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(serde_json::from_str::<CostKind>("\"hinge\"").is_err());
    }
}
