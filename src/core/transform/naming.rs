//! Path naming
//!
//! Converts a structural location in a configuration tree into the flat
//! environment variable name used both in placeholders and in the registry.

/// Delimiter between path segments
pub const PATH_DELIMITER: &str = "_";

/// Build the path of a child field
///
/// The field is upper-cased and every `-` becomes `_`:
/// - `("INPUT", "type")` → `"INPUT_TYPE"`
/// - `("OUTPUT_AMQP", "exchange-type")` → `"OUTPUT_AMQP_EXCHANGE_TYPE"`
///
/// # Examples
///
/// ```
/// use relay_confgen::core::transform::naming::child_path;
///
/// assert_eq!(child_path("INPUT_KAFKA", "client-id"), "INPUT_KAFKA_CLIENT_ID");
/// ```
pub fn child_path(parent: &str, field: &str) -> String {
    let mut path = String::with_capacity(parent.len() + field.len() + 1);
    path.push_str(parent);
    path.push_str(PATH_DELIMITER);
    path.push_str(&normalize_segment(field));
    path
}

/// Normalize a single field name into a path segment
fn normalize_segment(field: &str) -> String {
    field.to_uppercase().replace('-', PATH_DELIMITER)
}
