pub mod matrix;
pub mod prediction;

pub use matrix::{ensure_same_shape, from_rows, to_rows};
pub use prediction::binary_classification_prediction;
