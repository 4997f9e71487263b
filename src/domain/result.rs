//! Result type alias for relay-confgen

use super::errors::ConfgenError;

/// Result type alias for relay-confgen operations
///
/// # Examples
///
/// ```
/// use relay_confgen::domain::result::Result;
/// use relay_confgen::domain::errors::ConfgenError;
///
/// fn failing_function() -> Result<()> {
///     Err(ConfgenError::Invariant("bare scalar at root".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, ConfgenError>;
