//! bind (create-entry) - creation is inverted by deleting the entry.

use dirtx_core::{Attributes, DirectoryHandle};
use dirtx_name::DistinguishedName;

use crate::error::{CompensatingError, CompensatingResult};
use crate::executor::OperationExecutor;
use crate::recorder::{OperationArgs, OperationRecorder};

/// Records an incoming `bind` call.
pub struct BindOperationRecorder {
    directory: DirectoryHandle,
}

impl BindOperationRecorder {
    pub fn new(directory: DirectoryHandle) -> Self {
        Self { directory }
    }
}

impl OperationRecorder for BindOperationRecorder {
    fn record(&self, args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>> {
        match args {
            OperationArgs::Entry { name, payload } => Ok(Box::new(BindOperationExecutor {
                directory: self.directory.clone(),
                name,
                payload,
            })),
            _ => Err(CompensatingError::argument_mismatch("bind")),
        }
    }
}

/// A recorded `bind`: forward creates the entry, rollback deletes it.
pub struct BindOperationExecutor {
    directory: DirectoryHandle,
    name: DistinguishedName,
    payload: Attributes,
}

impl BindOperationExecutor {
    pub fn name(&self) -> &DistinguishedName {
        &self.name
    }
}

impl OperationExecutor for BindOperationExecutor {
    fn perform(&self) -> CompensatingResult<()> {
        self.directory.bind(&self.name, &self.payload)?;
        Ok(())
    }

    fn commit(&self) -> CompensatingResult<()> {
        // Nothing to finalize; the entry stays.
        Ok(())
    }

    fn rollback(&self) -> CompensatingResult<()> {
        self.directory.unbind(&self.name)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("bind {}", self.name)
    }
}
