//! Placeholder expressions
//!
//! A placeholder is `${PATH}` when the variable has no default and
//! `${PATH:DEFAULT}` otherwise. This module formats them, parses them back,
//! and checks a generated tree against the registry it was built with.

use super::registry::VariableRegistry;
use crate::domain::{ConfgenError, ConfigValue, Result, Scalar};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)^\$\{([^:{}]+)(?::(.*))?\}$").unwrap())
}

/// A parsed `${PATH}` / `${PATH:DEFAULT}` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub path: String,
    pub default: Option<String>,
}

impl Placeholder {
    /// Create a placeholder; an empty default means "no default"
    pub fn new(path: impl Into<String>, default: &str) -> Self {
        Self {
            path: path.into(),
            default: (!default.is_empty()).then(|| default.to_string()),
        }
    }

    /// Parse a placeholder expression
    ///
    /// Returns `None` when `s` is not exactly one placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_confgen::core::transform::placeholder::Placeholder;
    ///
    /// let p = Placeholder::parse("${INPUT_KAFKA_ADDRESSES:localhost:9092}").unwrap();
    /// assert_eq!(p.path, "INPUT_KAFKA_ADDRESSES");
    /// assert_eq!(p.default.as_deref(), Some("localhost:9092"));
    ///
    /// assert!(Placeholder::parse("kafka").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let caps = placeholder_pattern().captures(s)?;
        Some(Self {
            path: caps[1].to_string(),
            default: caps.get(2).map(|m| m.as_str().to_string()),
        })
    }

    /// Default value as stored in the registry
    pub fn default_value(&self) -> &str {
        self.default.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(f, "${{{}:{}}}", self.path, default),
            None => write!(f, "${{{}}}", self.path),
        }
    }
}

/// Collect every placeholder leaf of a tree, depth first
pub fn collect_placeholders(tree: &ConfigValue) -> Vec<Placeholder> {
    let mut found = Vec::new();
    collect_into(tree, &mut found);
    found
}

fn collect_into(tree: &ConfigValue, found: &mut Vec<Placeholder>) {
    match tree {
        ConfigValue::Object(map) => map.values().for_each(|v| collect_into(v, found)),
        ConfigValue::Sequence(items) => items.iter().for_each(|v| collect_into(v, found)),
        ConfigValue::Scalar(Scalar::String(s)) => {
            if let Some(p) = Placeholder::parse(s) {
                found.push(p);
            }
        }
        ConfigValue::Scalar(_) => {}
    }
}

/// Check that the placeholders of `tree` and the `registry` describe the
/// same set of variables with the same defaults
///
/// # Errors
///
/// Returns [`ConfgenError::Invariant`] naming the first mismatch found.
pub fn verify_registry(tree: &ConfigValue, registry: &VariableRegistry) -> Result<()> {
    let mut seen = BTreeSet::new();

    for placeholder in collect_placeholders(tree) {
        match registry.get(&placeholder.path) {
            Some(default) if default == placeholder.default_value() => {}
            Some(default) => {
                return Err(ConfgenError::Invariant(format!(
                    "placeholder {placeholder} disagrees with registry default '{default}'"
                )));
            }
            None => {
                return Err(ConfgenError::Invariant(format!(
                    "placeholder {placeholder} has no registry entry"
                )));
            }
        }
        seen.insert(placeholder.path);
    }

    if let Some(orphan) = registry.names().find(|name| !seen.contains(*name)) {
        return Err(ConfgenError::Invariant(format!(
            "registry entry {orphan} has no placeholder in the generated tree"
        )));
    }

    Ok(())
}
