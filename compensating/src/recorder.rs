//! The operation recorder contract.

use dirtx_core::{Attributes, Modification};
use dirtx_name::DistinguishedName;

use crate::{CompensatingResult, OperationExecutor};

/// Arguments of an incoming directory call, positionally matching the
/// transport signatures: name(s) first, payload second, changes third.
///
/// Argument values are owned; recording moves them onto the executor, so
/// rollback state can never be corrupted by later caller-side mutation.
#[derive(Debug, Clone)]
pub enum OperationArgs {
    /// A name and an entry payload (`bind`, `rebind`).
    Entry {
        name: DistinguishedName,
        payload: Attributes,
    },
    /// Source and target names (`rename`).
    Rename {
        from: DistinguishedName,
        to: DistinguishedName,
    },
    /// A name and an attribute change list (`modify_attributes`).
    Modify {
        name: DistinguishedName,
        changes: Vec<Modification>,
    },
    /// A name only (`unbind`).
    Name { name: DistinguishedName },
    /// No arguments (operations without compensating support).
    None,
}

/// Builds the executor for one incoming call, capturing everything its
/// rollback will need (temporary names, attribute pre-images).
///
/// Recording does not run the forward action; the operation manager calls
/// [`OperationExecutor::perform`] on the result and only appends the
/// executor to the log when that call succeeds.
pub trait OperationRecorder {
    fn record(&self, args: OperationArgs) -> CompensatingResult<Box<dyn OperationExecutor>>;
}
