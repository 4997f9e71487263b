//! Domain error types
//!
//! This module defines the error hierarchy for relay-confgen. Every failure
//! is fatal for a generation run; the variants only exist so the caller can
//! report what kind of failure aborted it.

use thiserror::Error;

/// Main relay-confgen error type
#[derive(Debug, Error)]
pub enum ConfgenError {
    /// Generator configuration errors (bad TOML, invalid log level, bad filter lists)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Encoding or decoding a configuration object failed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The transformer was invoked in a way that can never be valid
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// I/O errors while writing artifacts
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConfgenError {
    /// Process exit code for this error
    ///
    /// Configuration problems exit with 2, everything else is a fatal 5.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfgenError::Configuration(_) => 2,
            _ => 5,
        }
    }
}

impl From<std::io::Error> for ConfgenError {
    fn from(err: std::io::Error) -> Self {
        ConfgenError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfgenError {
    fn from(err: serde_json::Error) -> Self {
        ConfgenError::Encoding(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfgenError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfgenError::Encoding(format!("YAML encode error: {err}"))
    }
}

impl From<toml::de::Error> for ConfgenError {
    fn from(err: toml::de::Error) -> Self {
        ConfgenError::Configuration(format!("TOML parse error: {err}"))
    }
}
