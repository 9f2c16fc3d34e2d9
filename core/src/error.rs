//! Common error types for DIRTX.

use thiserror::Error;

/// Errors raised by a directory transport, forward or compensating.
///
/// Provider-specific failures that have no dedicated variant are carried
/// by [`DirectoryError::Provider`].
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// No entry is bound at the given name.
    #[error("no entry bound at {name}")]
    NoSuchEntry { name: String },

    /// An entry is already bound at the given name.
    #[error("an entry is already bound at {name}")]
    NameAlreadyBound { name: String },

    /// The entry has no such attribute.
    #[error("no attribute {id} on entry {name}")]
    NoSuchAttribute { name: String, id: String },

    /// The session has been closed.
    #[error("directory session is closed")]
    SessionClosed,

    /// Provider-specific failure.
    #[error("directory provider error: {message}")]
    Provider { message: String },
}

impl DirectoryError {
    pub fn no_such_entry(name: impl Into<String>) -> Self {
        Self::NoSuchEntry { name: name.into() }
    }

    pub fn name_already_bound(name: impl Into<String>) -> Self {
        Self::NameAlreadyBound { name: name.into() }
    }

    pub fn no_such_attribute(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NoSuchAttribute {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

/// Result type for directory transport operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
