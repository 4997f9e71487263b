//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Plain or JSON-formatted logs
//! - Configurable log levels, overridable through `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use relay_confgen::logging::init_logging;
//! use relay_confgen::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! init_logging(&config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Generator started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use relay_confgen::log_error_with_context;
/// use relay_confgen::domain::ConfgenError;
///
/// let error = ConfgenError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::ConfgenError;

    #[test]
    fn test_macros_compile() {
        let error = ConfgenError::Invariant("test".to_string());
        crate::log_error_with_context!(&error, "Generating");
    }
}
