//! Operation factory - maps operation names to recorders.

use std::sync::Arc;

use dirtx_core::DirectoryHandle;
use tracing::warn;

use crate::ops::{
    BindOperationRecorder, ModifyAttributesOperationRecorder, NoOpOperationRecorder,
    RebindOperationRecorder, RenameOperationRecorder, UnbindOperationRecorder,
};
use crate::recorder::OperationRecorder;
use crate::renaming::{DefaultTempEntryRenamingStrategy, TempEntryRenamingStrategy};

/// The closed set of operations the engine can compensate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    Bind,
    Rebind,
    Rename,
    ModifyAttributes,
    Unbind,
    /// Anything else; routed to the no-op fallback.
    Unsupported,
}

impl OperationKind {
    /// Exact, case-sensitive match on the transport method name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bind" => Self::Bind,
            "rebind" => Self::Rebind,
            "rename" => Self::Rename,
            "modify_attributes" => Self::ModifyAttributes,
            "unbind" => Self::Unbind,
            _ => Self::Unsupported,
        }
    }
}

/// Produces the recorder for each incoming operation.
///
/// Owns the directory handle and the renaming strategy so that every
/// recorder it hands out compensates through the same session.
pub struct OperationFactory {
    directory: DirectoryHandle,
    renaming: Arc<dyn TempEntryRenamingStrategy>,
}

impl OperationFactory {
    pub fn new(directory: DirectoryHandle, renaming: Arc<dyn TempEntryRenamingStrategy>) -> Self {
        Self {
            directory,
            renaming,
        }
    }

    /// Factory with the fixed-suffix renaming strategy.
    pub fn with_default_strategy(directory: DirectoryHandle) -> Self {
        Self::new(directory, Arc::new(DefaultTempEntryRenamingStrategy::new()))
    }

    /// Resolve the recorder for an operation name. Never fails: names
    /// outside the closed set get the no-op recorder, so the operation
    /// executes unprotected instead of failing the transaction.
    pub fn recorder(&self, operation: &str) -> Box<dyn OperationRecorder> {
        match OperationKind::from_name(operation) {
            OperationKind::Bind => Box::new(BindOperationRecorder::new(self.directory.clone())),
            OperationKind::Rebind => Box::new(RebindOperationRecorder::new(
                self.directory.clone(),
                self.renaming.clone(),
            )),
            OperationKind::Rename => Box::new(RenameOperationRecorder::new(self.directory.clone())),
            OperationKind::ModifyAttributes => Box::new(ModifyAttributesOperationRecorder::new(
                self.directory.clone(),
            )),
            OperationKind::Unbind => Box::new(UnbindOperationRecorder::new(
                self.directory.clone(),
                self.renaming.clone(),
            )),
            OperationKind::Unsupported => {
                warn!(operation, "no compensating support; operation will not be rolled back");
                Box::new(NoOpOperationRecorder)
            }
        }
    }
}
