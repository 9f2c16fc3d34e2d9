//! Transaction error types.

use dirtx_compensating::CompensatingError;
use dirtx_core::DirectoryError;
use thiserror::Error;

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// No transaction is bound to the context.
    #[error("no transaction is active")]
    NoActiveTransaction,

    /// Opening or closing the directory session failed.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// The compensating engine refused or failed an operation.
    #[error("compensating engine error: {0}")]
    Compensating(#[from] CompensatingError),
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
