//! Compensating engine error types.

use dirtx_core::DirectoryError;
use thiserror::Error;

/// Errors that can occur while recording or compensating operations.
#[derive(Debug, Error)]
pub enum CompensatingError {
    /// A directory transport call failed.
    #[error("directory operation failed: {0}")]
    Directory(#[from] DirectoryError),

    /// The supplied arguments do not match the operation's signature.
    #[error("argument mismatch for operation '{operation}'")]
    ArgumentMismatch { operation: String },

    /// The operation log has already been committed or rolled back.
    #[error("transaction already completed; the operation log is single-use")]
    AlreadyCompleted,
}

impl CompensatingError {
    pub fn argument_mismatch(operation: impl Into<String>) -> Self {
        Self::ArgumentMismatch {
            operation: operation.into(),
        }
    }
}

/// Result type for compensating operations.
pub type CompensatingResult<T> = Result<T, CompensatingError>;
