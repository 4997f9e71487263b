//! Configuration to environment variable transformation
//!
//! This module turns a configuration tree into its environment-driven form:
//!
//! - every scalar leaf becomes a placeholder `${PATH:DEFAULT}` (or `${PATH}`
//!   when the default is empty), where `PATH` is built by [`naming`] and
//!   rewritten by [`alias`]
//! - every placeholder is recorded in a [`VariableRegistry`]
//! - subtrees are preserved, dropped, or walked according to [`filter`]
//!
//! Sequences do not extend the path, since an element index has no meaning
//! to an operator. Objects and sequences that end up empty are dropped
//! rather than emitted as `{}` / `[]`.

pub mod alias;
pub mod filter;
pub mod naming;
pub mod placeholder;
pub mod registry;

pub use alias::AliasMap;
pub use filter::{FilterDecision, FilterLists};
pub use placeholder::{collect_placeholders, verify_registry, Placeholder};
pub use registry::VariableRegistry;

use crate::domain::{ConfgenError, ConfigValue, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Replace the scalar leaves of `value` with environment placeholders
///
/// Returns `None` when nothing survives filtering. The variables behind
/// every emitted placeholder are added to `registry`.
///
/// # Errors
///
/// Returns [`ConfgenError::Invariant`] when `value` is not an object and
/// `root_path` is empty: a leaf needs a name.
///
/// # Examples
///
/// ```
/// use relay_confgen::core::transform::{envify, FilterLists, VariableRegistry};
/// use relay_confgen::domain::ConfigValue;
/// use serde_json::json;
///
/// let conf = ConfigValue::from_json(json!({"type": "kafka", "retries": 3}));
/// let mut registry = VariableRegistry::new();
///
/// let out = envify("INPUT", &conf, &FilterLists::default(), &mut registry)
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(out.get("type").and_then(|v| v.as_str()), Some("${INPUT_TYPE:kafka}"));
/// assert_eq!(registry.get("INPUT_RETRIES"), Some("3"));
/// ```
pub fn envify(
    root_path: &str,
    value: &ConfigValue,
    lists: &FilterLists,
    registry: &mut VariableRegistry,
) -> Result<Option<ConfigValue>> {
    if root_path.is_empty() && !value.is_object() {
        return Err(ConfgenError::Invariant(
            "Environment values at path root".to_string(),
        ));
    }

    let before = registry.len();
    let result = traverse(root_path, value, lists, registry);

    tracing::debug!(
        root = root_path,
        new_variables = registry.len() - before,
        empty = result.is_none(),
        "Envified configuration"
    );

    Ok(result)
}

/// Encode a serializable configuration and envify it
///
/// # Errors
///
/// Returns [`ConfgenError::Encoding`] if `conf` cannot be encoded, or any
/// error [`envify`] returns.
pub fn envify_serializable<T: Serialize + ?Sized>(
    root_path: &str,
    conf: &T,
    lists: &FilterLists,
    registry: &mut VariableRegistry,
) -> Result<Option<ConfigValue>> {
    let value = ConfigValue::from_serializable(conf)?;
    envify(root_path, &value, lists, registry)
}

fn traverse(
    path: &str,
    value: &ConfigValue,
    lists: &FilterLists,
    registry: &mut VariableRegistry,
) -> Option<ConfigValue> {
    match value {
        ConfigValue::Object(fields) => {
            let mut out = BTreeMap::new();
            for (field, child) in fields {
                let child_path = naming::child_path(path, field);
                match lists.decide(&child_path) {
                    FilterDecision::Preserve => {
                        out.insert(field.clone(), child.clone());
                    }
                    FilterDecision::Block => {
                        tracing::trace!(path = %child_path, "Blocked configuration path");
                    }
                    FilterDecision::Recurse => {
                        if let Some(v) = traverse(&child_path, child, lists, registry) {
                            out.insert(field.clone(), v);
                        }
                    }
                }
            }
            (!out.is_empty()).then_some(ConfigValue::Object(out))
        }
        ConfigValue::Sequence(items) => {
            let out: Vec<ConfigValue> = items
                .iter()
                .filter_map(|item| traverse(path, item, lists, registry))
                .collect();
            (!out.is_empty()).then_some(ConfigValue::Sequence(out))
        }
        ConfigValue::Scalar(scalar) => {
            let name = lists.aliases().rewrite(path);
            let default = scalar.to_default_string();
            let placeholder = Placeholder::new(name.as_str(), &default);
            registry.insert(name, default);
            Some(ConfigValue::string(placeholder.to_string()))
        }
    }
}
