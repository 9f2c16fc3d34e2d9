//! Shared test doubles for the compensating engine's unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use dirtx_core::{
    Attributes, DirectoryError, DirectoryHandle, DirectoryOperations, DirectoryResult,
    DirectorySession, Modification,
};
use dirtx_name::DistinguishedName;

/// A scripted directory stub that records every transport call in order.
///
/// Calls are recorded as formatted strings so tests can assert exact call
/// sequences. `fail_on` makes every call whose record starts with the
/// given prefix fail with a provider error.
pub(crate) struct StubDirectory {
    calls: RefCell<Vec<String>>,
    entries: RefCell<HashMap<String, Attributes>>,
    fail_on: RefCell<Option<String>>,
}

impl StubDirectory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: RefCell::new(Vec::new()),
            entries: RefCell::new(HashMap::new()),
            fail_on: RefCell::new(None),
        })
    }

    /// Shared-handle view of this stub.
    pub fn handle(self: &Arc<Self>) -> DirectoryHandle {
        self.clone()
    }

    /// Seed an entry for `lookup`.
    pub fn seed(&self, name: &DistinguishedName, attrs: Attributes) {
        self.entries.borrow_mut().insert(name.to_string(), attrs);
    }

    /// Make calls matching the prefix fail.
    pub fn fail_on(&self, prefix: impl Into<String>) {
        *self.fail_on.borrow_mut() = Some(prefix.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> DirectoryResult<()> {
        let failing = self
            .fail_on
            .borrow()
            .as_ref()
            .is_some_and(|prefix| call.starts_with(prefix));
        self.calls.borrow_mut().push(call.clone());
        if failing {
            return Err(DirectoryError::provider(format!("scripted failure: {call}")));
        }
        Ok(())
    }
}

impl DirectoryOperations for StubDirectory {
    fn bind(&self, name: &DistinguishedName, _payload: &Attributes) -> DirectoryResult<()> {
        self.record(format!("bind({name})"))
    }

    fn rebind(&self, name: &DistinguishedName, _payload: &Attributes) -> DirectoryResult<()> {
        self.record(format!("rebind({name})"))
    }

    fn rename(&self, from: &DistinguishedName, to: &DistinguishedName) -> DirectoryResult<()> {
        self.record(format!("rename({from} -> {to})"))
    }

    fn modify_attributes(
        &self,
        name: &DistinguishedName,
        changes: &[Modification],
    ) -> DirectoryResult<()> {
        let rendered: Vec<String> = changes.iter().map(ToString::to_string).collect();
        self.record(format!("modify_attributes({name}: {})", rendered.join("; ")))
    }

    fn unbind(&self, name: &DistinguishedName) -> DirectoryResult<()> {
        self.record(format!("unbind({name})"))
    }

    fn lookup(&self, name: &DistinguishedName) -> DirectoryResult<Attributes> {
        self.record(format!("lookup({name})"))?;
        self.entries
            .borrow()
            .get(&name.to_string())
            .cloned()
            .ok_or_else(|| DirectoryError::no_such_entry(name.to_string()))
    }
}

impl DirectorySession for StubDirectory {
    fn close(&self) -> DirectoryResult<()> {
        self.record("close()".to_string())
    }
}

pub(crate) fn dn(text: &str) -> DistinguishedName {
    DistinguishedName::parse(text).unwrap()
}
