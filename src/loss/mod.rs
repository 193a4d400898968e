pub mod final_activation_and_cost;
pub mod sigmoid_cross_entropy;
pub mod sigmoid_perceptron;
pub mod softmax_cross_entropy;
pub mod linear_mse;
pub mod cost_kind;
pub mod regularization;

pub use final_activation_and_cost::{CostAndGradient, FinalActivationAndCost};
pub use sigmoid_cross_entropy::SigmoidCrossEntropy;
pub use sigmoid_perceptron::SigmoidPerceptron;
pub use softmax_cross_entropy::SoftmaxCrossEntropy;
pub use linear_mse::LinearMinimumSquareError;
pub use cost_kind::CostKind;
pub use regularization::{compute_cost_with_regularization, l2_penalty};
