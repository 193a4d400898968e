use ndarray::{Array2, Zip};

use crate::activation::sigmoid;
use crate::error::Result;
use crate::loss::final_activation_and_cost::{sample_count, CostAndGradient, FinalActivationAndCost};
use crate::math::{binary_classification_prediction, ensure_same_shape};

/// Sigmoid output with a perceptron-style margin cost; binary classification.
///
/// `y` is `(1, m)` with 0/1 labels. A sample is misclassified when its label
/// and the thresholded prediction of `a = sigmoid(ZL)` disagree:
///
///   cost = -(1/m) · Σ [ |ZL| · misclassified ]
///   dZL  = (2·y - 1) · misclassified
///
/// As formulated the cost is never positive and the gradient points towards
/// the misclassified side, so gradient descent on it does not learn a
/// separator. The formula is kept as is; see DESIGN.md.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SigmoidPerceptron;

impl SigmoidPerceptron {
    /// 1.0 where `y` and the hard prediction from `al` disagree, else 0.0.
    /// Nonzero labels count as class 1.
    pub fn misclassified_indicator(y: &Array2<f64>, al: &Array2<f64>) -> Array2<f64> {
        let prediction = binary_classification_prediction(al);
        Zip::from(y)
            .and(&prediction)
            .map_collect(|&label, &predicted| {
                if (label != 0.0) != (predicted != 0.0) {
                    1.0
                } else {
                    0.0
                }
            })
    }

    /// Correctly classified samples contribute exactly zero, even where
    /// `|ZL|` is infinite.
    fn cost(y: &Array2<f64>, zl: &Array2<f64>, misclassified: &Array2<f64>) -> f64 {
        let margins = Zip::from(zl)
            .and(misclassified)
            .map_collect(|&z, &miss| if miss != 0.0 { z.abs() } else { 0.0 });
        -margins.sum() / sample_count(y)
    }
}

impl FinalActivationAndCost for SigmoidPerceptron {
    fn name(&self) -> &'static str {
        "sigmoid_perceptron"
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
        let misclassified = Self::misclassified_indicator(y, &al);
        let cost = Self::cost(y, zl, &misclassified);
        let dzl = y.mapv(|label| 2.0 * label - 1.0) * &misclassified;

        Ok((cost, al, dzl))
    }

    /// `|ZL|` is recovered from `a` as `|ln(a / (1 - a))|`, which is exact up
    /// to rounding away from saturation. A misclassified sample whose
    /// activation has saturated to exactly 0 or 1 gives `-inf`; use the cost
    /// from `final_activation_and_cost` when `ZL` is at hand.
    fn output_cost(&self, a: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
        ensure_same_shape(y, a)?;

        let zl = a.mapv(|p| (p / (1.0 - p)).ln());
        let misclassified = Self::misclassified_indicator(y, a);
        Ok(Self::cost(y, &zl, &misclassified))
    }
}
