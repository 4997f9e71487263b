//! Canonical serializable form of component configurations
//!
//! A component config carries a section for every type it could be, but
//! only the one named by its `type` field means anything. Sanitising drops
//! the rest so example configs only show what applies.

use crate::domain::{ConfigValue, Result};

/// Keep `type`, the section named by `type`, and the `extra` fields
///
/// Non-object values are returned unchanged.
///
/// # Examples
///
/// ```
/// use relay_confgen::components::sanitise::retain_selected;
/// use relay_confgen::domain::ConfigValue;
/// use serde_json::json;
///
/// let conf = ConfigValue::from_json(json!({
///     "type": "stdin",
///     "stdin": {"multipart": false},
///     "kafka": {"topic": "relay_stream"},
///     "processors": []
/// }));
///
/// let sanitised = retain_selected(conf, &["processors"]);
/// assert!(sanitised.get("stdin").is_some());
/// assert!(sanitised.get("processors").is_some());
/// assert!(sanitised.get("kafka").is_none());
/// ```
pub fn retain_selected(value: ConfigValue, extra: &[&str]) -> ConfigValue {
    match value {
        ConfigValue::Object(mut fields) => {
            let kind = fields
                .get("type")
                .and_then(|v| v.as_str())
                .map(str::to_string);
            fields.retain(|k, _| {
                k == "type" || Some(k.as_str()) == kind.as_deref() || extra.contains(&k.as_str())
            });
            ConfigValue::Object(fields)
        }
        other => other,
    }
}

/// Sanitise every element of a list of component configs
pub fn sanitise_each<T>(
    items: &[T],
    sanitise: impl Fn(&T) -> Result<ConfigValue>,
) -> Result<ConfigValue> {
    items
        .iter()
        .map(sanitise)
        .collect::<Result<Vec<_>>>()
        .map(ConfigValue::Sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_type_keeps_only_type() {
        let conf = ConfigValue::from_json(json!({"type": "nope", "stdin": {}}));
        assert_eq!(
            retain_selected(conf, &[]),
            ConfigValue::from_json(json!({"type": "nope"}))
        );
    }

    #[test]
    fn test_scalar_section_is_kept() {
        let conf = ConfigValue::from_json(json!({"type": "static", "static": true, "text": {}}));
        assert_eq!(
            retain_selected(conf, &[]),
            ConfigValue::from_json(json!({"type": "static", "static": true}))
        );
    }

    #[test]
    fn test_non_object_unchanged() {
        let conf = ConfigValue::string("stdin");
        assert_eq!(retain_selected(conf.clone(), &[]), conf);
    }

    #[test]
    fn test_sanitise_each() {
        let items = vec!["a", "b"];
        let out = sanitise_each(&items, |s| Ok(ConfigValue::string(*s))).unwrap();
        assert_eq!(out, ConfigValue::from_json(json!(["a", "b"])));
    }
}
