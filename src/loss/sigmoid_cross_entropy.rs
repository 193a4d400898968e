use ndarray::Array2;

use crate::activation::sigmoid;
use crate::error::Result;
use crate::loss::final_activation_and_cost::{sample_count, CostAndGradient, FinalActivationAndCost};
use crate::math::ensure_same_shape;

/// Sigmoid output with binary cross-entropy; binary classification.
///
/// `y` is `(1, m)` with 0/1 labels.
///
///   cost = -(1/m) · Σ [ y·ln(a) + (1 - y)·ln(1 - a) ]
///   dZL  = a - y
///
/// `dZL` is the simplified form of `dAL · a·(1 - a)` with
/// `dAL = (1 - y)/(1 - a) - y/a`; the direct form never divides by `a`.
/// Saturated activations (`a` exactly 0 or 1) are not clipped and give an
/// infinite or NaN cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SigmoidCrossEntropy;

impl SigmoidCrossEntropy {
    fn cost(y: &Array2<f64>, al: &Array2<f64>) -> f64 {
        let log_likelihood = y * &al.mapv(f64::ln) + (1.0 - y) * &al.mapv(|a| (1.0 - a).ln());
        -log_likelihood.sum() / sample_count(y)
    }
}

impl FinalActivationAndCost for SigmoidCrossEntropy {
    fn name(&self) -> &'static str {
        "sigmoid_cross_entropy"
    }

    fn final_activation(&self, zl: &Array2<f64>) -> Array2<f64> {
        sigmoid(zl)
    }

    fn final_activation_and_cost(
        &self,
        y: &Array2<f64>,
        zl: &Array2<f64>,
    ) -> Result<CostAndGradient> {
        ensure_same_shape(y, zl)?;

        let al = self.final_activation(zl);
        let cost = Self::cost(y, &al);
        let dzl = &al - y;

        Ok((cost, al, dzl))
    }

    fn output_cost(&self, a: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
        ensure_same_shape(y, a)?;
        Ok(Self::cost(y, a))
    }
}
