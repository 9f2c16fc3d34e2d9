//! rename (rename-entry) - inverted by renaming back.

use dirtx_core::DirectoryHandle;
use dirtx_name::DistinguishedName;

use crate::error::{CompensatingError, CompensatingResult};
use crate::executor::OperationExecutor;
use crate::recorder::{OperationArgs, OperationRecorder};

/// Records an incoming `rename` call.
pub struct RenameOperationRecorder {
    directory: DirectoryHandle,
}

impl RenameOperationRecorder {
    pub fn new(directory: DirectoryHandle) -> Self {
        Self { directory }
    }
}

impl OperationRecorder for RenameOperationRecorder {
    fn record(&self, args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>> {
        match args {
            OperationArgs::Rename { from, to } => Ok(Box::new(RenameOperationExecutor {
                directory: self.directory.clone(),
                from,
                to,
            })),
            _ => Err(CompensatingError::argument_mismatch("rename")),
        }
    }
}

/// A recorded `rename`: rollback moves the entry back to its old name.
pub struct RenameOperationExecutor {
    directory: DirectoryHandle,
    from: DistinguishedName,
    to: DistinguishedName,
}

impl OperationExecutor for RenameOperationExecutor {
    fn perform(&self) -> CompensatingResult<()> {
        self.directory.rename(&self.from, &self.to)?;
        Ok(())
    }

    fn commit(&self) -> CompensatingResult<()> {
        Ok(())
    }

    fn rollback(&self) -> CompensatingResult<()> {
        self.directory.rename(&self.to, &self.from)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("rename {} -> {}", self.from, self.to)
    }
}
