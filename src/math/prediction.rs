use ndarray::Array2;

/// Probability at or below which a sample is predicted as class 0.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Turns sigmoid probabilities into hard 0/1 predictions, shape preserved.
pub fn binary_classification_prediction(al: &Array2<f64>) -> Array2<f64> {
    al.mapv(|p| if p > DECISION_THRESHOLD { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn thresholds_at_one_half() {
        let al = array![[0.1, 0.5, 0.51, 0.99]];
        assert_eq!(binary_classification_prediction(&al), array![[0.0, 0.0, 1.0, 1.0]]);
    }
}
