pub mod activation;

pub use activation::{identity, sigmoid, softmax, FinalActivation};
