//! Variable registry
//!
//! Flat mapping from environment variable name to its default value, filled
//! in while a configuration is envified and read afterwards by the doc
//! renderer.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Environment variable name → default value (possibly empty)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableRegistry {
    vars: BTreeMap<String, String>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a variable, replacing any earlier default for the same name
    pub fn insert(&mut self, name: impl Into<String>, default: impl Into<String>) {
        self.vars.insert(name.into(), default.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Variable names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// `(name, default)` pairs in lexicographic order of name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl IntoIterator for VariableRegistry {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (k, v) in iter {
            registry.insert(k, v);
        }
        registry
    }
}
