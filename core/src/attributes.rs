//! Attribute structures for directory entries.
//!
//! Directory attributes are multi-valued and identified by a
//! case-insensitive id. [`Attributes`] keeps insertion order, matching how
//! entries come back from a transport lookup.

use std::fmt;

/// One attribute of a directory entry: an id plus one or more values.
#[derive(Debug, Clone, Eq)]
pub struct Attribute {
    id: String,
    values: Vec<String>,
}

impl Attribute {
    /// Create an attribute with no values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: Vec::new(),
        }
    }

    /// Create a single-valued attribute.
    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: vec![value.into()],
        }
    }

    /// Create a multi-valued attribute.
    pub fn with_values(id: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    /// The attribute id, as constructed.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All values, in insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The first value, if any.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Add a value.
    pub fn add(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Remove a value; true if it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Case-insensitive id match.
    pub fn matches(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq_ignore_ascii_case(&other.id) && self.values == other.values
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.values.join(", "))
    }
}

/// The attributes of one directory entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attrs: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.matches(id))
    }

    /// Mutable lookup by id (case-insensitive).
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Attribute> {
        self.attrs.iter_mut().find(|a| a.matches(id))
    }

    /// Insert an attribute, replacing any existing attribute with the
    /// same id.
    pub fn put(&mut self, attr: Attribute) {
        match self.attrs.iter().position(|a| a.matches(attr.id())) {
            Some(index) => self.attrs[index] = attr,
            None => self.attrs.push(attr),
        }
    }

    /// Remove and return the attribute with the given id.
    pub fn remove(&mut self, id: &str) -> Option<Attribute> {
        self.attrs
            .iter()
            .position(|a| a.matches(id))
            .map(|index| self.attrs.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(Attribute::id)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Helper macro to create attribute sets.
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::Attributes::new()
    };
    ($($id:expr => $value:expr),+ $(,)?) => {
        {
            let mut attrs = $crate::Attributes::new();
            $(
                attrs.put($crate::Attribute::with_value($id, $value));
            )+
            attrs
        }
    };
}
