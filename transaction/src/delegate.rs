//! Transaction delegate.
//!
//! Performs the work behind an external transaction coordinator's
//! lifecycle callbacks: begin opens and binds a session plus an empty
//! operation log, commit/rollback drive the log, and cleanup always
//! closes the session regardless of outcome.

use std::sync::Arc;

use dirtx_compensating::{
    CompensationReport, DefaultTempEntryRenamingStrategy, OperationFactory, OperationManager,
    TempEntryRenamingStrategy,
};
use dirtx_core::DirectorySource;
use tracing::{debug, warn};

use crate::context::{SessionHolder, TransactionContext};
use crate::error::{TransactionError, TransactionResult};

/// Binds transactions to directory sessions on behalf of an external
/// coordinator.
///
/// One delegate serves many sequential or concurrent transactions; the
/// per-transaction state lives in the [`TransactionContext`] passed into
/// every callback.
pub struct TransactionDelegate {
    source: Box<dyn DirectorySource>,
    renaming: Arc<dyn TempEntryRenamingStrategy>,
}

impl TransactionDelegate {
    /// Delegate with the fixed-suffix renaming strategy.
    pub fn new(source: Box<dyn DirectorySource>) -> Self {
        Self::with_renaming_strategy(source, Arc::new(DefaultTempEntryRenamingStrategy::new()))
    }

    pub fn with_renaming_strategy(
        source: Box<dyn DirectorySource>,
        renaming: Arc<dyn TempEntryRenamingStrategy>,
    ) -> Self {
        Self { source, renaming }
    }

    /// Begin a transaction: open a session and bind it, together with an
    /// empty operation log, to the context. A no-op when the context is
    /// already active, so nested participants join the ongoing
    /// transaction.
    pub fn begin(&self, ctx: &mut TransactionContext) -> TransactionResult<()> {
        if ctx.is_active() {
            debug!("context already active; joining existing transaction");
            return Ok(());
        }
        let session = self.source.connect()?;
        let manager =
            OperationManager::new(OperationFactory::new(session.clone(), self.renaming.clone()));
        ctx.bind(SessionHolder::new(session, manager));
        debug!("transaction begun");
        Ok(())
    }

    /// Commit: finalize every recorded operation in recording order.
    ///
    /// Per-entry failures are aggregated in the returned report; the
    /// transaction is considered terminated either way.
    pub fn commit(&self, ctx: &mut TransactionContext) -> TransactionResult<CompensationReport> {
        debug!("committing transaction");
        ctx.with_manager(OperationManager::commit)
    }

    /// Rollback: invert every recorded operation in reverse recording
    /// order, with the same best-effort policy as commit.
    pub fn rollback(&self, ctx: &mut TransactionContext) -> TransactionResult<CompensationReport> {
        debug!("rolling back transaction");
        ctx.with_manager(OperationManager::rollback)
    }

    /// Cleanup after completion: unbind and close the session. Always
    /// safe to call; close failures are reported but swallowed so they
    /// never mask the already-decided commit or rollback outcome.
    pub fn cleanup_after_completion(&self, ctx: &mut TransactionContext) {
        let Some(holder) = ctx.unbind() else {
            return;
        };
        debug!("closing directory session");
        if let Err(error) = holder.session().close() {
            warn!(%error, "failed to close directory session");
        }
    }
}
