//! The directory transport contract.
//!
//! The remote directory service is an external collaborator; the engine
//! only ever talks to it through these traits. Every mutating call is
//! immediately effective on the server and individually atomic, which is
//! exactly the property the compensating engine builds on.

use std::sync::Arc;

use dirtx_name::DistinguishedName;

use crate::{Attributes, DirectoryResult, Modification};

/// The mutating and reading operations a directory transport offers.
pub trait DirectoryOperations {
    /// Create an entry at `name`. Fails if the name is already bound.
    fn bind(&self, name: &DistinguishedName, payload: &Attributes) -> DirectoryResult<()>;

    /// Bind `payload` at `name`, replacing any existing entry.
    fn rebind(&self, name: &DistinguishedName, payload: &Attributes) -> DirectoryResult<()>;

    /// Move the entry at `from` to `to`. Atomic on the server.
    fn rename(&self, from: &DistinguishedName, to: &DistinguishedName) -> DirectoryResult<()>;

    /// Apply an attribute change list to the entry at `name`.
    fn modify_attributes(
        &self,
        name: &DistinguishedName,
        changes: &[Modification],
    ) -> DirectoryResult<()>;

    /// Delete the entry at `name`.
    fn unbind(&self, name: &DistinguishedName) -> DirectoryResult<()>;

    /// Read the attributes of the entry at `name`.
    fn lookup(&self, name: &DistinguishedName) -> DirectoryResult<Attributes>;
}

/// A live connection to the directory, owned by one unit of work.
pub trait DirectorySession: DirectoryOperations {
    /// Close the connection. Calls after close fail with
    /// [`crate::DirectoryError::SessionClosed`].
    fn close(&self) -> DirectoryResult<()>;
}

/// Shared handle to the session bound to the current transaction.
///
/// Executors retain one of these so compensating calls go through the
/// same session that performed the forward action.
pub type DirectoryHandle = Arc<dyn DirectorySession>;

/// Opens directory sessions; the transaction delegate asks for one
/// session per transaction.
pub trait DirectorySource {
    fn connect(&self) -> DirectoryResult<DirectoryHandle>;
}
