pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod params;
pub mod eval;

// Convenience re-exports
pub use error::{CostError, Result};
pub use activation::{sigmoid, softmax, FinalActivation};
pub use math::binary_classification_prediction;
pub use loss::{
    compute_cost_with_regularization, CostAndGradient, CostKind, FinalActivationAndCost,
    LinearMinimumSquareError, SigmoidCrossEntropy, SigmoidPerceptron, SoftmaxCrossEntropy,
};
pub use params::{ParamRole, Parameters};
pub use eval::{evaluate, CostReport, EvalConfig};
