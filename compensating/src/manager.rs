//! Per-transaction operation manager.
//!
//! Keeps the ordered log of recorded executors and drives the terminal
//! phase: commit finalizes in recording order, rollback inverts in
//! reverse order (LIFO, mirroring nested resource release). The log is
//! single-use; after one terminal call it is drained and the manager
//! refuses further work.

use tracing::warn;

use crate::error::{CompensatingError, CompensatingResult};
use crate::executor::OperationExecutor;
use crate::factory::OperationFactory;
use crate::recorder::OperationArgs;
use crate::result::{CompensationFailure, CompensationPhase, CompensationReport};

/// Lifecycle state of the operation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    /// Accepting operations.
    Recording,
    /// Terminated by commit.
    Committed,
    /// Terminated by rollback.
    RolledBack,
}

/// The per-transaction ordered log of recorded operations.
pub struct OperationManager {
    factory: OperationFactory,
    log: Vec<Box<dyn OperationExecutor>>,
    state: ManagerState,
}

impl OperationManager {
    pub fn new(factory: OperationFactory) -> Self {
        Self {
            factory,
            log: Vec::new(),
            state: ManagerState::Recording,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ManagerState {
        self.state
    }

    /// Number of operations recorded so far.
    pub fn recorded(&self) -> usize {
        self.log.len()
    }

    /// Record and perform one directory operation.
    ///
    /// The recorder captures undo state, then the forward action runs. A
    /// forward failure propagates to the caller and the operation is NOT
    /// appended: nothing took effect, so there is nothing to compensate.
    pub fn perform_operation(
        &mut self,
        operation: &str,
        args: OperationArgs,
    ) -> CompensatingResult<()> {
        if self.state != ManagerState::Recording {
            return Err(CompensatingError::AlreadyCompleted);
        }
        let recorder = self.factory.recorder(operation);
        let executor = recorder.record(args)?;
        executor.perform()?;
        self.log.push(executor);
        Ok(())
    }

    /// Finalize every recorded operation, in recording order.
    pub fn commit(&mut self) -> CompensatingResult<CompensationReport> {
        self.terminate(ManagerState::Committed, CompensationPhase::Commit)
    }

    /// Invert every recorded operation, in reverse recording order.
    pub fn rollback(&mut self) -> CompensatingResult<CompensationReport> {
        self.terminate(ManagerState::RolledBack, CompensationPhase::Rollback)
    }

    /// Drain the log exactly once. Per-entry failures are collected and
    /// reported but do not stop the remaining entries from being
    /// processed: skipping them would leave more state inconsistent, not
    /// less.
    fn terminate(
        &mut self,
        next: ManagerState,
        phase: CompensationPhase,
    ) -> CompensatingResult<CompensationReport> {
        if self.state != ManagerState::Recording {
            return Err(CompensatingError::AlreadyCompleted);
        }
        self.state = next;

        let drained: Vec<Box<dyn OperationExecutor>> = self.log.drain(..).collect();
        let mut report = CompensationReport::new();

        let entries: Box<dyn Iterator<Item = Box<dyn OperationExecutor>>> = match phase {
            CompensationPhase::Commit => Box::new(drained.into_iter()),
            CompensationPhase::Rollback => Box::new(drained.into_iter().rev()),
        };

        for executor in entries {
            let outcome = match phase {
                CompensationPhase::Commit => executor.commit(),
                CompensationPhase::Rollback => executor.rollback(),
            };
            if let Err(error) = outcome {
                let operation = executor.describe();
                warn!(%phase, %operation, %error, "compensation entry failed; continuing");
                report.push(CompensationFailure {
                    operation,
                    phase,
                    error,
                });
            }
        }
        Ok(report)
    }
}
