//! Fallback for operations without compensating support.
//!
//! Unrecognized operations still execute at the transport, but the engine
//! records nothing for them: commit and rollback are no-ops. This keeps
//! the engine forward-compatible with directory operations it does not
//! yet know how to compensate.

use crate::error::CompensatingResult;
use crate::executor::OperationExecutor;
use crate::recorder::{OperationArgs, OperationRecorder};

/// Accepts any arguments and yields a do-nothing executor.
pub struct NoOpOperationRecorder;

impl OperationRecorder for NoOpOperationRecorder {
    fn record(&self, _args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>> {
        Ok(Box::new(NoOpOperationExecutor))
    }
}

/// Executor whose every phase does nothing.
pub struct NoOpOperationExecutor;

impl OperationExecutor for NoOpOperationExecutor {
    fn perform(&self) -> CompensatingResult<()> {
        Ok(())
    }

    fn commit(&self) -> CompensatingResult<()> {
        Ok(())
    }

    fn rollback(&self) -> CompensatingResult<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "unsupported operation".to_string()
    }
}
