//! YAML rendering of generated configs

use crate::domain::Result;
use serde::Serialize;

/// First line of every generated config
pub const GENERATED_HEADER: &str = "# This file was auto generated by relay-confgen.\n";

/// Directive that stops `relay lint` from validating a file
///
/// The environment config is full of placeholders where typed values are
/// expected, so it would never lint clean.
pub const LINT_DISABLE_DIRECTIVE: &str = "# RELAY LINT DISABLE\n";

/// Render a config as YAML with the generated-file header
///
/// Pass a [`crate::domain::ConfigValue`] rather than a `serde_json::Value`:
/// JSON numbers keep their literal text and only encode faithfully as JSON.
///
/// # Errors
///
/// Returns [`crate::domain::ConfgenError::Encoding`] if the value cannot be
/// encoded as YAML.
///
/// # Examples
///
/// ```
/// use relay_confgen::core::output::yaml::render_yaml;
/// use relay_confgen::domain::ConfigValue;
/// use serde_json::json;
///
/// let conf = ConfigValue::from_json(json!({"input": {"type": "stdin"}}));
/// let bytes = render_yaml(&conf, true).unwrap();
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.starts_with("# RELAY LINT DISABLE\n# This file was auto generated"));
/// ```
pub fn render_yaml<T: Serialize + ?Sized>(conf: &T, lint_disabled: bool) -> Result<Vec<u8>> {
    let mut out = String::new();
    if lint_disabled {
        out.push_str(LINT_DISABLE_DIRECTIVE);
    }
    out.push_str(GENERATED_HEADER);
    out.push_str(&serde_yaml::to_string(conf)?);
    Ok(out.into_bytes())
}
