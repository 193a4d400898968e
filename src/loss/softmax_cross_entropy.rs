use ndarray::Array2;

use crate::activation::softmax;
use crate::error::Result;
use crate::loss::final_activation_and_cost::{sample_count, CostAndGradient, FinalActivationAndCost};
use crate::math::ensure_same_shape;

/// Softmax output with categorical cross-entropy; multi-class classification.
///
/// `y` is `(n_classes, m)` and each column is one-hot.
///
///   cost = -(1/m) · Σ y·ln(a)
///   dZL  = a - y
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoftmaxCrossEntropy;

impl SoftmaxCrossEntropy {
    fn cost(y: &Array2<f64>, al: &Array2<f64>) -> f64 {
        -(y * &al.mapv(f64::ln)).sum() / sample_count(y)
    }
}

impl FinalActivationAndCost for SoftmaxCrossEntropy {
    fn name(&self) -> &'static str {
        "softmax_cross_entropy"
    }

    fn final_activation(&self, zl: &Array2<f64>) -> Array2<f64> {
        softmax(zl)
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
