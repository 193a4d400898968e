use ndarray::Array2;

use crate::activation::identity;
use crate::error::Result;
use crate::loss::final_activation_and_cost::{sample_count, CostAndGradient, FinalActivationAndCost};
use crate::math::ensure_same_shape;

/// Identity output with a squared-error cost; regression.
///
/// `y` is `(output_dim, m)` with real targets.
///
///   cost = -(1/m) · Σ (a - y)²
///   dZL  = 2·(a - y)
///
/// The cost carries a leading minus, so it is the negated sum of squared
/// errors and never positive; `dZL` is the gradient of the unnegated,
/// unaveraged sum. Both are kept as is; see DESIGN.md.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearMinimumSquareError;

impl LinearMinimumSquareError {
    fn cost(y: &Array2<f64>, al: &Array2<f64>) -> f64 {
        -(al - y).mapv(|d| d * d).sum() / sample_count(y)
    }
}

impl FinalActivationAndCost for LinearMinimumSquareError {
    fn name(&self) -> &'static str {
        "linear_minimum_square_error"
    }

    fn final_activation(&self, zl: &Array2<f64>) -> Array2<f64> {
        identity(zl)
    }

    fn final_activation_and_cost(
        &self,
        y: &Array2<f64>,
        zl: &Array2<f64>,
    ) -> Result<CostAndGradient> {
        ensure_same_shape(y, zl)?;

        let al = self.final_activation(zl);
        let cost = Self::cost(y, &al);
        let dzl = (&al - y) * 2.0;

        Ok((cost, al, dzl))
    }

    fn output_cost(&self, a: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
        ensure_same_shape(y, a)?;
        Ok(Self::cost(y, a))
    }
}
