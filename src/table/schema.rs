//! Branch table schema.
//!
//! A table maps string keys to literal values. The reserved `_default` entry, when
//! present, is the fallback branch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::{self, Branch, Branches, MatchResult, Partial};

/// Reserved key holding a table's default branch.
pub const DEFAULT_KEY: &str = "_default";

/// Literal branches keyed by string, with an optional default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BranchTable<V> {
    /// Default branch, used when a key has no entry.
    #[serde(rename = "_default", default = "Option::default", skip_serializing_if = "Option::is_none")]
    default: Option<V>,

    /// Keyed branches.
    #[serde(flatten)]
    entries: BTreeMap<String, V>,
}

impl<V> BranchTable<V> {
    pub fn new() -> Self {
        Self {
            default: None,
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an entry. Inserting under [`DEFAULT_KEY`] sets the default.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if key == DEFAULT_KEY {
            return self.set_default(value);
        }
        self.entries.insert(key, value)
    }

    pub fn set_default(&mut self, value: V) -> Option<V> {
        self.default.replace(value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries, the default excluded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split into a typed branch set and the default value, if any.
    pub fn into_parts<'a>(self) -> (Branches<'a, String, V, Partial>, Option<V>) {
        let branches = self
            .entries
            .into_iter()
            .fold(Branches::new(), |branches, (key, value)| branches.on(key, value));
        (branches, self.default)
    }
}

impl<V: Clone> BranchTable<V> {
    /// Resolve `key` to a copy of its entry, or of the default.
    pub fn resolve(&self, key: &str) -> MatchResult<V> {
        matching::select(
            key,
            self.entries.get(key).cloned().map(Branch::Value),
            self.default.clone().map(Branch::Value),
        )
    }
}

impl<V> Default for BranchTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for BranchTable<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
