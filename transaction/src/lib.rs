//! DIRTX Transaction Binding
//!
//! Binds one directory session and one operation manager to the lifetime
//! of one logical transaction, following the begin/commit/rollback/cleanup
//! lifecycle callbacks of an external transaction coordinator.
//!
//! There is no ambient or thread-local registry: every call into the
//! engine takes an explicit [`TransactionContext`] handle owned by the
//! unit of work.

mod context;
mod delegate;
mod error;


pub use context::{SessionHolder, TransactionContext};
pub use delegate::TransactionDelegate;
pub use error::{TransactionError, TransactionResult};
