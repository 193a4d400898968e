use thiserror::Error;

/// Errors produced by the cost layer and its evaluation driver.
#[derive(Debug, Error)]
pub enum CostError {
    /// Labels and the matrix they are compared against differ in shape.
    /// Shapes are `(rows, cols)`; nothing is broadcast.
    #[error("inconsistent shapes {labels:?} != {other:?}")]
    ShapeMismatch {
        labels: (usize, usize),
        other: (usize, usize),
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CostError>;
