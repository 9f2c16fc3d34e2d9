//! Convenience imports for integration tests.

pub use crate::{Call, FixedSource, MemoryDirectory, RecordingDirectory};

pub use dirtx_compensating::{
    CompensatingError, CompensationPhase, DefaultTempEntryRenamingStrategy,
    DifferentSubtreeTempEntryRenamingStrategy, OperationArgs, OperationFactory, OperationManager,
    TempEntryRenamingStrategy,
};
pub use dirtx_core::{
    attributes, Attribute, Attributes, DirectoryError, DirectoryHandle, DirectoryOperations,
    DirectorySession, DirectorySource, Modification, ModifyOp,
};
pub use dirtx_name::{DistinguishedName, NameError, Rdn};
pub use dirtx_transaction::{TransactionContext, TransactionDelegate, TransactionError};

/// Parse a name, panicking on bad test input.
pub fn dn(text: &str) -> DistinguishedName {
    DistinguishedName::parse(text).unwrap()
}
