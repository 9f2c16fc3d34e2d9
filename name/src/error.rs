//! Name model error types.

use thiserror::Error;

/// Errors that can occur in the distinguished name model.
#[derive(Debug, Clone, Error)]
pub enum NameError {
    /// The name text does not follow the naming grammar.
    #[error("malformed name: {reason}")]
    MalformedName { reason: String },

    /// A range query exceeded the number of components in the name.
    #[error("index {index} out of range for name with {len} components")]
    IndexOutOfRange { index: usize, len: usize },
}

impl NameError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedName {
            reason: reason.into(),
        }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result type for name operations.
pub type NameResult<T> = Result<T, NameError>;
