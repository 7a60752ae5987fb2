//! Append-only string storage backing string and tag tokens

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable index of a string held by a [`StringInterner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StringId(usize);

impl StringId {
    /// Raw 0-based index
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StringId {
    fn from(index: usize) -> Self {
        StringId(index)
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered, append-only sequence of owned strings
///
/// Entries are never removed or rewritten, so a [`StringId`] handed out by
/// [`StringInterner::set`] stays valid for the interner's lifetime. Every
/// entry is a separate allocation; growing the index table never moves text
/// that was already returned by [`StringInterner::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Creates an empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` and returns its index
    pub fn set(&mut self, value: impl Into<String>) -> StringId {
        let id = StringId(self.strings.len());
        self.strings.push(value.into().into_boxed_str());
        id
    }

    /// Looks up a previously interned string
    pub fn get(&self, id: StringId) -> Result<&str> {
        self.strings
            .get(id.0)
            .map(|s| &**s)
            .ok_or_else(|| Error::OutOfRange {
                index: id.0,
                len: self.strings.len(),
            })
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true when nothing has been interned
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterates `(id, text)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (StringId, &str)> + '_ {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (StringId(i), &**s))
    }
}
