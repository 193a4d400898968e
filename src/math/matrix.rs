use ndarray::Array2;

use crate::error::{CostError, Result};

/// Fails with `ShapeMismatch` unless `labels` and `other` have identical
/// `(rows, cols)`.
pub fn ensure_same_shape(labels: &Array2<f64>, other: &Array2<f64>) -> Result<()> {
    if labels.dim() != other.dim() {
        return Err(CostError::ShapeMismatch {
            labels: labels.dim(),
            other: other.dim(),
        });
    }
    Ok(())
}

/// Builds a `(rows, cols)` array from row vectors, as they appear in JSON
/// input files. Every row must have the same, non-zero length.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
    if n_rows == 0 || n_cols == 0 {
        return Err(CostError::InvalidInput(
            "matrix must have at least one row and one column".into(),
        ));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
        return Err(CostError::InvalidInput(format!(
            "row {i} has {} columns, expected {n_cols}",
            row.len()
        )));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| CostError::InvalidInput(e.to_string()))
}

/// Inverse of `from_rows`.
pub fn to_rows(array: &Array2<f64>) -> Vec<Vec<f64>> {
    array.outer_iter().map(|row| row.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_rows_keeps_row_major_layout() {
        let m = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(to_rows(&m), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, CostError::InvalidInput(msg) if msg.contains("row 1")));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(from_rows(&[]).is_err());
        assert!(from_rows(&[vec![]]).is_err());
    }

    #[test]
    fn shape_check_reports_both_shapes() {
        let y = Array2::<f64>::zeros((2, 3));
        let z = Array2::<f64>::zeros((3, 2));
        match ensure_same_shape(&y, &z) {
            Err(CostError::ShapeMismatch { labels, other }) => {
                assert_eq!(labels, (2, 3));
                assert_eq!(other, (3, 2));
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
        assert!(ensure_same_shape(&y, &y.clone()).is_ok());
    }
}
