//! Compensating operation implementations.
//!
//! Each operation kind (bind, rebind, rename, unbind, modify_attributes,
//! plus the no-op fallback) is implemented in its own module: a recorder
//! that captures undo state and an executor that performs, finalizes, and
//! inverts the call.

mod bind;
mod modify;
mod noop;
mod rebind;
mod rename;
mod unbind;

pub use bind::{BindOperationExecutor, BindOperationRecorder};
pub use modify::{ModifyAttributesOperationExecutor, ModifyAttributesOperationRecorder};
pub use noop::{NoOpOperationExecutor, NoOpOperationRecorder};
pub use rebind::{RebindOperationExecutor, RebindOperationRecorder};
pub use rename::{RenameOperationExecutor, RenameOperationRecorder};
pub use unbind::{UnbindOperationExecutor, UnbindOperationRecorder};
