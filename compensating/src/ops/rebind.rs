//! rebind (replace-entry) - overwrite synthesized from rename + bind.
//!
//! The transport has no atomic overwrite. The existing entry is parked
//! under a temporary name, freeing the original name for a fresh bind;
//! the displaced data stays recoverable until commit deletes it.

use std::sync::Arc;

use dirtx_core::{Attributes, DirectoryHandle};
use dirtx_name::DistinguishedName;

use crate::error::{CompensatingError, CompensatingResult};
use crate::executor::OperationExecutor;
use crate::recorder::{OperationArgs, OperationRecorder};
use crate::renaming::TempEntryRenamingStrategy;

/// Records an incoming `rebind` call, choosing the temporary name up
/// front.
pub struct RebindOperationRecorder {
    directory: DirectoryHandle,
    renaming: Arc<dyn TempEntryRenamingStrategy>,
}

impl RebindOperationRecorder {
    pub fn new(directory: DirectoryHandle, renaming: Arc<dyn TempEntryRenamingStrategy>) -> Self {
        Self {
            directory,
            renaming,
        }
    }
}

impl OperationRecorder for RebindOperationRecorder {
    fn record(&self, args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>> {
        match args {
            OperationArgs::Entry { name, payload } => {
                let temp = self.renaming.temporary_name(&name);
                Ok(Box::new(RebindOperationExecutor {
                    directory: self.directory.clone(),
                    name,
                    temp,
                    payload,
                }))
            }
            _ => Err(CompensatingError::argument_mismatch("rebind")),
        }
    }
}

/// A recorded `rebind`: the displaced entry lives at `temp` until the
/// transaction terminates.
pub struct RebindOperationExecutor {
    directory: DirectoryHandle,
    name: DistinguishedName,
    temp: DistinguishedName,
    payload: Attributes,
}

impl RebindOperationExecutor {
    pub fn name(&self) -> &DistinguishedName {
        &self.name
    }

    pub fn temp(&self) -> &DistinguishedName {
        &self.temp
    }
}

impl OperationExecutor for RebindOperationExecutor {
    fn perform(&self) -> CompensatingResult<()> {
        self.directory.rename(&self.name, &self.temp)?;
        self.directory.bind(&self.name, &self.payload)?;
        Ok(())
    }

    fn commit(&self) -> CompensatingResult<()> {
        // The displaced entry is now obsolete.
        self.directory.unbind(&self.temp)?;
        Ok(())
    }

    fn rollback(&self) -> CompensatingResult<()> {
        self.directory.unbind(&self.name)?;
        self.directory.rename(&self.temp, &self.name)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("rebind {} (displaced to {})", self.name, self.temp)
    }
}
