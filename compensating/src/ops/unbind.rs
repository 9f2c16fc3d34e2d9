//! unbind (delete-entry) - soft delete via a temporary name.
//!
//! Deletion is destructive, so the forward action only renames the entry
//! out of visibility. Commit performs the real delete; rollback renames
//! the entry back.

use std::sync::Arc;

use dirtx_core::DirectoryHandle;
use dirtx_name::DistinguishedName;

use crate::error::{CompensatingError, CompensatingResult};
use crate::executor::OperationExecutor;
use crate::recorder::{OperationArgs, OperationRecorder};
use crate::renaming::TempEntryRenamingStrategy;

/// Records an incoming `unbind` call, choosing the temporary name up
/// front.
pub struct UnbindOperationRecorder {
    directory: DirectoryHandle,
    renaming: Arc<dyn TempEntryRenamingStrategy>,
}

impl UnbindOperationRecorder {
    pub fn new(directory: DirectoryHandle, renaming: Arc<dyn TempEntryRenamingStrategy>) -> Self {
        Self {
            directory,
            renaming,
        }
    }
}

impl OperationRecorder for UnbindOperationRecorder {
    fn record(&self, args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>> {
        match args {
            OperationArgs::Name { name } => {
                let temp = self.renaming.temporary_name(&name);
                Ok(Box::new(UnbindOperationExecutor {
                    directory: self.directory.clone(),
                    name,
                    temp,
                }))
            }
            _ => Err(CompensatingError::argument_mismatch("unbind")),
        }
    }
}

/// A recorded `unbind`: the entry survives at `temp` until commit makes
/// the delete irreversible.
pub struct UnbindOperationExecutor {
    directory: DirectoryHandle,
    name: DistinguishedName,
    temp: DistinguishedName,
}

impl UnbindOperationExecutor {
    pub fn name(&self) -> &DistinguishedName {
        &self.name
    }

    pub fn temp(&self) -> &DistinguishedName {
        &self.temp
    }
}

impl OperationExecutor for UnbindOperationExecutor {
    fn perform(&self) -> CompensatingResult<()> {
        self.directory.rename(&self.name, &self.temp)?;
        Ok(())
    }

    fn commit(&self) -> CompensatingResult<()> {
        self.directory.unbind(&self.temp)?;
        Ok(())
    }

    fn rollback(&self) -> CompensatingResult<()> {
        self.directory.rename(&self.temp, &self.name)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("unbind {} (parked at {})", self.name, self.temp)
    }
}
