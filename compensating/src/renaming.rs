//! Temporary-entry renaming strategies.
//!
//! Delete and overwrite have no reversible form on the transport, so the
//! engine first parks the displaced entry under a temporary name. The
//! strategy decides what that name looks like.

use std::sync::atomic::{AtomicUsize, Ordering};

use dirtx_name::{DistinguishedName, Rdn, RdnComponent};

/// Maps a name to the temporary name its entry is parked at.
///
/// Collision avoidance is advisory only: no lock is taken on the chosen
/// name, so concurrent transactions racing to displace the same entry can
/// still collide. The directory server is the only serialization point.
pub trait TempEntryRenamingStrategy {
    fn temporary_name(&self, original: &DistinguishedName) -> DistinguishedName;
}

/// Default strategy: suffix a fixed marker onto the leaf component value,
/// keeping the entry in place. `cn=john doe` becomes `cn=john doe_temp`.
#[derive(Debug, Clone)]
pub struct DefaultTempEntryRenamingStrategy {
    suffix: String,
}

impl DefaultTempEntryRenamingStrategy {
    pub const DEFAULT_SUFFIX: &'static str = "_temp";

    pub fn new() -> Self {
        Self::with_suffix(Self::DEFAULT_SUFFIX)
    }

    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for DefaultTempEntryRenamingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl TempEntryRenamingStrategy for DefaultTempEntryRenamingStrategy {
    fn temporary_name(&self, original: &DistinguishedName) -> DistinguishedName {
        let mut temp = original.clone();
        if let Some(leaf) = temp.remove_last() {
            let mut components = leaf.components().to_vec();
            let first = &components[0];
            components[0] =
                RdnComponent::new(first.key(), format!("{}{}", first.value(), self.suffix));
            temp.add(Rdn::from_components(components));
        }
        temp
    }
}

/// Relocates displaced entries under a dedicated subtree, making the leaf
/// value unique with a process-local sequence number. Keeps in-flight
/// temporary entries out of the original subtree, at the cost of an extra
/// hop across the tree on every displace/restore.
#[derive(Debug)]
pub struct DifferentSubtreeTempEntryRenamingStrategy {
    subtree: DistinguishedName,
    next: AtomicUsize,
}

impl DifferentSubtreeTempEntryRenamingStrategy {
    pub fn new(subtree: DistinguishedName) -> Self {
        Self {
            subtree,
            next: AtomicUsize::new(0),
        }
    }

    pub fn subtree(&self) -> &DistinguishedName {
        &self.subtree
    }
}

impl TempEntryRenamingStrategy for DifferentSubtreeTempEntryRenamingStrategy {
    fn temporary_name(&self, original: &DistinguishedName) -> DistinguishedName {
        let mut temp = self.subtree.clone();
        if let Some(leaf) = original.leaf() {
            let serial = self.next.fetch_add(1, Ordering::Relaxed);
            temp.add(Rdn::new(
                leaf.key(),
                format!("{}{}", leaf.value(), serial),
            ));
        }
        temp
    }
}
