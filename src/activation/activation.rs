use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Activation applied to the output layer's pre-activation `ZL`.
///
/// - `Sigmoid`  — element-wise logistic; binary classification.
/// - `Softmax`  — normalized exponential over each column (one column per
///   sample); multi-class classification.
/// - `Identity` — no nonlinearity; regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalActivation {
    Sigmoid,
    Softmax,
    Identity,
}

impl FinalActivation {
    pub fn apply(&self, z: &Array2<f64>) -> Array2<f64> {
        match self {
            FinalActivation::Sigmoid => sigmoid(z),
            FinalActivation::Softmax => softmax(z),
            FinalActivation::Identity => identity(z),
        }
    }
}

/// Element-wise `1 / (1 + e^-z)`.
pub fn sigmoid(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|x| 1.0 / (1.0 + (-x).exp()))
}

/// Column-wise softmax: every column of the result is non-negative and sums
/// to 1. The column maximum is subtracted before exponentiating, which leaves
/// the result unchanged but keeps `exp` from overflowing.
pub fn softmax(z: &Array2<f64>) -> Array2<f64> {
    let col_max = z
        .fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x))
        .insert_axis(Axis(0));
    let exps = (z - &col_max).mapv(f64::exp);
    let col_sum = exps.sum_axis(Axis(0)).insert_axis(Axis(0));
    exps / &col_sum
}

/// Returns `z` unchanged; the regression output.
pub fn identity(z: &Array2<f64>) -> Array2<f64> {
    z.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn sigmoid_basic_values() {
        let a = sigmoid(&array![[0.0, 10.0, -10.0]]);
        assert_abs_diff_eq!(a[[0, 0]], 0.5, epsilon = 1e-12);
        assert!(a[[0, 1]] > 0.9999);
        assert!(a[[0, 2]] < 0.0001);
    }

    #[test]
    fn softmax_columns_sum_to_one() {
        let z = array![[1.0, -2.0, 0.0], [2.0, 0.5, 0.0], [3.0, 4.0, 0.0]];
        let a = softmax(&z);
        for col in a.columns() {
            assert_abs_diff_eq!(col.sum(), 1.0, epsilon = 1e-12);
            assert!(col.iter().all(|&p| p >= 0.0));
        }
        // Equal logits in a column give a uniform distribution.
        assert_abs_diff_eq!(a[[0, 2]], 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn softmax_is_stable_for_large_logits() {
        let a = softmax(&array![[1000.0], [1000.0]]);
        assert_abs_diff_eq!(a[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a[[1, 0]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn softmax_normalizes_per_column_not_globally() {
        let a = softmax(&array![[0.0, 5.0], [0.0, 5.0]]);
        assert_eq!(a, array![[0.5, 0.5], [0.5, 0.5]]);
    }

    #[test]
    fn apply_dispatches_to_primitive() {
        let z = array![[0.3, -1.2], [0.7, 2.0]];
        assert_eq!(FinalActivation::Sigmoid.apply(&z), sigmoid(&z));
        assert_eq!(FinalActivation::Softmax.apply(&z), softmax(&z));
        assert_eq!(FinalActivation::Identity.apply(&z), z);
    }
}
