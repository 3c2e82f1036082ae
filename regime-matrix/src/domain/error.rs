//! Domain errors for matrix construction and risk propagation

use thiserror::Error;

/// Validation failures raised before any computation runs.
///
/// Every variant is deterministic: retrying with the same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Insufficient data: need at least 2 samples, got {samples}")]
    InsufficientData { samples: usize },

    #[error("Unknown regime label: {0}")]
    UnknownLabel(String),

    #[error("Invalid smoothing alpha {0}: must be finite and >= 0")]
    InvalidAlpha(f64),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Samples not strictly increasing in time at index {index}")]
    UnorderedSamples { index: usize },

    #[error("Invalid step size: {0} days (must be between 1 and 366)")]
    InvalidStep(u32),
}

impl MatrixError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            MatrixError::InsufficientData { .. } => "INSUFFICIENT_DATA",
            MatrixError::UnknownLabel(_) => "UNKNOWN_LABEL",
            MatrixError::InvalidAlpha(_) => "INVALID_ALPHA",
            MatrixError::DimensionMismatch(_) => "DIMENSION_MISMATCH",
            MatrixError::UnorderedSamples { .. } => "UNORDERED_SAMPLES",
            MatrixError::InvalidStep(_) => "INVALID_STEP",
        }
    }
}
