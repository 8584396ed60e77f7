use thiserror::Error;

use crate::parameters::bounds::BoundsError;

/// Error types for the parset-rs library.
#[derive(Error, Debug)]
pub enum ParSetError {
    /// Error indicating a mismatch between a vector/matrix and the selection size.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error in a parameter trait definition.
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// Serialized data belongs to a different parameter policy.
    #[error("Policy mismatch: expected '{expected}', found '{found}'")]
    PolicyMismatch { expected: String, found: String },

    /// Serialized data holds a different identifier selection.
    #[error("Selection mismatch: expected [{expected}], found [{found}]")]
    SelectionMismatch { expected: String, found: String },

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parset-rs operations.
pub type Result<T> = std::result::Result<T, ParSetError>;
