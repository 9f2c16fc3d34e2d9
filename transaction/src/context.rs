//! Explicit transaction context.

use dirtx_compensating::{CompensatingResult, OperationArgs, OperationManager};
use dirtx_core::DirectoryHandle;

use crate::error::{TransactionError, TransactionResult};

/// The directory session and operation manager bound to one transaction.
///
/// Both are exclusively owned by one logical unit of work and must not be
/// shared across concurrent units of work.
pub struct SessionHolder {
    session: DirectoryHandle,
    manager: OperationManager,
}

impl SessionHolder {
    pub fn new(session: DirectoryHandle, manager: OperationManager) -> Self {
        Self { session, manager }
    }

    pub fn session(&self) -> &DirectoryHandle {
        &self.session
    }

    pub fn manager(&self) -> &OperationManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut OperationManager {
        &mut self.manager
    }
}

/// Handle to the current logical unit of work.
///
/// Created unbound by the caller and passed explicitly into every engine
/// call; the delegate binds a [`SessionHolder`] on begin and clears it on
/// cleanup.
#[derive(Default)]
pub struct TransactionContext {
    holder: Option<SessionHolder>,
}

impl TransactionContext {
    /// A context with no transaction bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a transaction is bound to this context.
    pub fn is_active(&self) -> bool {
        self.holder.is_some()
    }

    /// The session protecting the current transaction, if any.
    pub fn session(&self) -> Option<&DirectoryHandle> {
        self.holder.as_ref().map(SessionHolder::session)
    }

    /// Route one directory operation through the bound operation manager.
    ///
    /// This is the single entry point for application code running inside
    /// the transaction.
    pub fn perform_operation(
        &mut self,
        operation: &str,
        args: OperationArgs,
    ) -> TransactionResult<()> {
        match self.holder.as_mut() {
            Some(holder) => {
                holder.manager_mut().perform_operation(operation, args)?;
                Ok(())
            }
            None => Err(TransactionError::NoActiveTransaction),
        }
    }

    pub(crate) fn bind(&mut self, holder: SessionHolder) {
        self.holder = Some(holder);
    }

    pub(crate) fn with_manager<T>(
        &mut self,
        f: impl FnOnce(&mut OperationManager) -> CompensatingResult<T>,
    ) -> TransactionResult<T> {
        match self.holder.as_mut() {
            Some(holder) => Ok(f(holder.manager_mut())?),
            None => Err(TransactionError::NoActiveTransaction),
        }
    }

    pub(crate) fn unbind(&mut self) -> Option<SessionHolder> {
        self.holder.take()
    }
}
