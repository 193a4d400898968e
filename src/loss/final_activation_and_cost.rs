use ndarray::Array2;

use crate::error::Result;

/// `(cost, AL, dZL)`: the scalar cost, the final activation output and the
/// gradient of the cost with respect to the pre-activation `ZL`.
pub type CostAndGradient = (f64, Array2<f64>, Array2<f64>);

/// An output-layer activation paired with the cost it is trained against.
///
/// All matrices are laid out `(output_dim, m)`, one column per sample, and
/// `m` is taken from the labels' column count. Implementors hard-code the
/// closed-form `dZL` for their pairing instead of chaining `dAL · dAL/dZL`.
///
/// Implementations are pure: nothing is mutated and nothing is retained
/// between calls.
pub trait FinalActivationAndCost {
    /// Short snake_case identifier, used in logs.
    fn name(&self) -> &'static str;

    /// `AL = activation(ZL)`.
    fn final_activation(&self, zl: &Array2<f64>) -> Array2<f64>;

    /// Computes `AL` from `zl`, then the cost and `dZL` from `(y, AL, zl)`.
    ///
    /// # Errors
    /// `CostError::ShapeMismatch` when `y` and `zl` differ in shape.
    fn final_activation_and_cost(
        &self,
        y: &Array2<f64>,
        zl: &Array2<f64>,
    ) -> Result<CostAndGradient>;

    /// The same scalar cost, computed from an activation output `a` and the
    /// labels `y`. Note the `(a, y)` argument order: this is the
    /// cost-function contract of `compute_cost_with_regularization`.
    ///
    /// # Errors
    /// `CostError::ShapeMismatch` when `a` and `y` differ in shape.
    fn output_cost(&self, a: &Array2<f64>, y: &Array2<f64>) -> Result<f64>;
}

/// Number of samples, as the divisor of the batch-averaged costs.
pub(crate) fn sample_count(y: &Array2<f64>) -> f64 {
    y.ncols() as f64
}
