//! Distinguished names.

use std::fmt;
use std::str::FromStr;

use crate::error::{NameError, NameResult};
use crate::parser;
use crate::rdn::{escape_value_url, Rdn};

/// A hierarchical directory path name.
///
/// Stored as an ordered sequence of relative name components, root-most
/// first (index 0 is the component closest to the directory root). The
/// `Display` rendering follows the wire convention: leaf component first.
///
/// Cloning is a deep copy; captured names are immune to later mutation of
/// the source instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DistinguishedName {
    rdns: Vec<Rdn>,
}

impl DistinguishedName {
    /// The empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse name text. Blank input yields the empty name.
    pub fn parse(text: &str) -> NameResult<Self> {
        Ok(Self {
            rdns: parser::parse_name(text)?,
        })
    }

    /// Build a name from components given root-first.
    pub fn from_rdns(rdns: Vec<Rdn>) -> Self {
        Self { rdns }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.rdns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rdns.is_empty()
    }

    /// Component at a root-based index.
    pub fn get(&self, index: usize) -> Option<&Rdn> {
        self.rdns.get(index)
    }

    /// The leaf component (most-significant, rendered first).
    pub fn leaf(&self) -> Option<&Rdn> {
        self.rdns.last()
    }

    /// Iterate components root-first.
    pub fn iter(&self) -> impl Iterator<Item = &Rdn> {
        self.rdns.iter()
    }

    /// Splice another name in at the leaf end: `other` becomes the deeper
    /// part of the path.
    pub fn append(&mut self, other: DistinguishedName) {
        self.rdns.extend(other.rdns);
    }

    /// Splice another name in at the root end: `other` becomes the part
    /// closest to the directory root.
    pub fn prepend(&mut self, other: DistinguishedName) {
        self.rdns.splice(0..0, other.rdns);
    }

    /// Add a component at the leaf end.
    pub fn add(&mut self, rdn: Rdn) {
        self.rdns.push(rdn);
    }

    /// Insert a component at a root-based index.
    pub fn add_at(&mut self, index: usize, rdn: Rdn) -> NameResult<()> {
        if index > self.rdns.len() {
            return Err(NameError::index_out_of_range(index, self.rdns.len()));
        }
        self.rdns.insert(index, rdn);
        Ok(())
    }

    /// Remove and return the component at a root-based index.
    pub fn remove(&mut self, index: usize) -> NameResult<Rdn> {
        if index >= self.rdns.len() {
            return Err(NameError::index_out_of_range(index, self.rdns.len()));
        }
        Ok(self.rdns.remove(index))
    }

    /// Remove and return the root-most component.
    pub fn remove_first(&mut self) -> Option<Rdn> {
        if self.rdns.is_empty() {
            None
        } else {
            Some(self.rdns.remove(0))
        }
    }

    /// Remove and return the leaf component.
    pub fn remove_last(&mut self) -> Option<Rdn> {
        self.rdns.pop()
    }

    /// The first `n` components from the root.
    pub fn prefix(&self, n: usize) -> NameResult<DistinguishedName> {
        if n > self.rdns.len() {
            return Err(NameError::index_out_of_range(n, self.rdns.len()));
        }
        Ok(Self {
            rdns: self.rdns[..n].to_vec(),
        })
    }

    /// The components from root-based index `n` to the leaf.
    pub fn suffix(&self, n: usize) -> NameResult<DistinguishedName> {
        if n > self.rdns.len() {
            return Err(NameError::index_out_of_range(n, self.rdns.len()));
        }
        Ok(Self {
            rdns: self.rdns[n..].to_vec(),
        })
    }

    /// True when `other`'s components match this name at the root end.
    /// The empty name matches nothing.
    pub fn starts_with(&self, other: &DistinguishedName) -> bool {
        !other.is_empty()
            && other.len() <= self.len()
            && self.rdns[..other.len()] == other.rdns[..]
    }

    /// True when `other`'s components match this name at the leaf end.
    /// The empty name matches nothing.
    pub fn ends_with(&self, other: &DistinguishedName) -> bool {
        !other.is_empty()
            && other.len() <= self.len()
            && self.rdns[self.len() - other.len()..] == other.rdns[..]
    }

    /// True when `other`'s components occur as a contiguous block anywhere
    /// in this name. The empty name matches nothing.
    pub fn contains(&self, other: &DistinguishedName) -> bool {
        !other.is_empty()
            && other.len() <= self.len()
            && self
                .rdns
                .windows(other.len())
                .any(|window| window == other.rdns.as_slice())
    }

    /// URL-safe serialization: components joined leaf-first with `,` and
    /// spaces percent-encoded.
    pub fn to_url(&self) -> String {
        let mut out = String::new();
        for (i, rdn) in self.rdns.iter().rev().enumerate() {
            if i > 0 {
                out.push(',');
            }
            for (j, component) in rdn.components().iter().enumerate() {
                if j > 0 {
                    out.push('+');
                }
                out.push_str(component.key());
                out.push('=');
                out.push_str(&escape_value_url(component.value()));
            }
        }
        out
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rdn) in self.rdns.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", rdn)?;
        }
        Ok(())
    }
}

impl FromStr for DistinguishedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
