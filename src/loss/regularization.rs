use ndarray::Array2;

use crate::error::Result;
use crate::math::ensure_same_shape;
use crate::params::Parameters;

/// Adds an L2 weight penalty to a base cost.
///
///   cost = cost_function(a, y) + (λ / 2m) · Σ_W Σ W²
///
/// `m` is the column count of `y`. Only entries of `params` with role
/// `Weight` are penalized; biases are ignored.
///
/// `cost_function` is called with the activation output **first** and the
/// labels second, `(a, y)`. This is the reverse of
/// `FinalActivationAndCost::final_activation_and_cost(y, zl)`;
/// `FinalActivationAndCost::output_cost` already has the right order:
///
/// ```
/// use ferrite_cost::{
///     compute_cost_with_regularization, FinalActivationAndCost, Parameters, SigmoidCrossEntropy,
/// };
/// use ndarray::array;
///
/// # fn main() -> ferrite_cost::Result<()> {
/// let y = array![[1.0, 0.0]];
/// let a = array![[0.5, 0.5]];
/// let mut params = Parameters::new();
/// params.insert_weight("W1", array![[1.0, -1.0]]);
///
/// let cost = compute_cost_with_regularization(
///     &y,
///     &a,
///     &params,
///     |output, labels| SigmoidCrossEntropy.output_cost(output, labels),
///     0.5,
/// )?;
/// assert!((cost - (2f64.ln() + 0.25)).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// `CostError::ShapeMismatch` when `y` and `a` differ in shape, and any error
/// returned by `cost_function`.
pub fn compute_cost_with_regularization<F>(
    y: &Array2<f64>,
    a: &Array2<f64>,
    params: &Parameters,
    cost_function: F,
    lambd: f64,
) -> Result<f64>
where
    F: FnOnce(&Array2<f64>, &Array2<f64>) -> Result<f64>,
{
    ensure_same_shape(y, a)?;

    let cost = cost_function(a, y)?;
    Ok(cost + l2_penalty(params, y.ncols(), lambd))
}

/// `(λ / 2m) · Σ_W Σ W²` over the weight entries of `params`.
/// Exactly zero when `λ` is zero.
pub fn l2_penalty(params: &Parameters, m: usize, lambd: f64) -> f64 {
    if lambd == 0.0 {
        return 0.0;
    }
    let squared_weights: f64 = params.weights().map(|w| w.mapv(|x| x * x).sum()).sum();
    lambd / (2.0 * m as f64) * squared_weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn params() -> Parameters {
        let mut params = Parameters::new();
        params.insert_weight("W1", array![[1.0, 2.0], [0.0, -1.0]]);
        params.insert_bias("b1", array![[100.0], [100.0]]);
        params.insert_weight("W2", array![[3.0, 0.0]]);
        params
    }

    #[test]
    fn penalty_sums_squared_weights_only() {
        // Σ W² = 1 + 4 + 0 + 1 + 9 = 15; biases are skipped.
        let y = array![[0.0, 1.0, 0.0, 1.0]];
        let a = y.clone();
        let cost =
            compute_cost_with_regularization(&y, &a, &params(), |_, _| Ok(1.0), 0.8).unwrap();
        assert_abs_diff_eq!(cost, 1.0 + 0.8 / 8.0 * 15.0, epsilon = 1e-12);
    }

    #[test]
    fn cost_function_receives_output_then_labels() {
        let y = array![[1.0, 0.0]];
        let a = array![[0.25, 0.75]];
        let cost = compute_cost_with_regularization(
            &y,
            &a,
            &Parameters::new(),
            |output, labels| {
                assert_eq!(output, &array![[0.25, 0.75]]);
                assert_eq!(labels, &array![[1.0, 0.0]]);
                Ok(-3.5)
            },
            2.0,
        )
        .unwrap();
        assert_eq!(cost, -3.5);
    }

    #[test]
    fn zero_lambda_returns_base_cost_exactly() {
        let y = array![[1.0, 0.0, 1.0]];
        let a = array![[0.3, 0.2, 0.9]];
        let base = 0.123_456_789;
        let cost =
            compute_cost_with_regularization(&y, &a, &params(), |_, _| Ok(base), 0.0).unwrap();
        assert_eq!(cost, base);
    }

    #[test]
    fn mismatched_output_is_rejected_before_cost_function_runs() {
        let y = array![[1.0, 0.0]];
        let a = array![[0.5, 0.5, 0.5]];
        let err = compute_cost_with_regularization(
            &y,
            &a,
            &params(),
            |_, _| panic!("cost function must not be called"),
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, CostError::ShapeMismatch { labels: (1, 2), other: (1, 3) }));
    }

    #[test]
    fn cost_function_errors_propagate() {
        let y = array![[1.0]];
        let err = compute_cost_with_regularization(
            &y,
            &y,
            &params(),
            |_, _| Err(CostError::InvalidInput("boom".into())),
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, CostError::InvalidInput(_)));
    }
}
