//! The operation executor contract.

use crate::CompensatingResult;

/// One recorded mutation, able to finalize or invert itself.
///
/// Lifecycle: the executor is built by a recorder with all undo state
/// captured, `perform` runs the forward action exactly once, and then
/// exactly one of `commit` or `rollback` is invoked by the operation
/// manager. Executors are owned by the manager that recorded them and are
/// never shared.
pub trait OperationExecutor {
    /// Perform the forward directory action.
    fn perform(&self) -> CompensatingResult<()>;

    /// Finalize after the transaction committed (e.g. delete a now
    /// obsolete temporary entry).
    fn commit(&self) -> CompensatingResult<()>;

    /// Undo the forward action after the transaction rolled back.
    fn rollback(&self) -> CompensatingResult<()>;

    /// Short human-readable description, used in failure reports.
    fn describe(&self) -> String;
}
