//! Configuration schema types
//!
//! This module defines the configuration structure of the generator itself.
//! Every section is optional; an absent file or section means defaults.

use crate::core::transform::{AliasMap, FilterLists};
use serde::{Deserialize, Serialize};

/// Accepted log levels
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main generator configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Environment config filter lists
    #[serde(default)]
    pub filters: FiltersConfig,
}

impl GeneratorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.logging.validate()?;
        self.filters.validate()?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON formatted log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !VALID_LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}

/// Filter lists applied when building the environment config
///
/// ```toml
/// [filters]
/// preserve = ["INPUT_TYPE", "OUTPUT_TYPE"]
/// block = ["READ_UNTIL", "LOGGER_STATIC_FIELDS"]
/// aliases = [["INPUT_BROKER_INPUTS", "INPUT"], ["OUTPUT_BROKER_OUTPUTS", "OUTPUT"]]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Path fragments whose subtrees are kept literally
    #[serde(default = "default_preserve")]
    pub preserve: Vec<String>,

    /// Path fragments whose subtrees are dropped
    #[serde(default = "default_block")]
    pub block: Vec<String>,

    /// Ordered `[from, to]` path rewrites
    #[serde(default = "default_aliases")]
    pub aliases: Vec<[String; 2]>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            preserve: default_preserve(),
            block: default_block(),
            aliases: default_aliases(),
        }
    }
}

impl FiltersConfig {
    fn validate(&self) -> Result<(), String> {
        if self.preserve.iter().any(|e| e.is_empty()) {
            return Err("filters.preserve must not contain empty entries".to_string());
        }
        if self.block.iter().any(|e| e.is_empty()) {
            return Err("filters.block must not contain empty entries".to_string());
        }
        if self.aliases.iter().any(|[from, _]| from.is_empty()) {
            return Err("filters.aliases must not contain empty keys".to_string());
        }

        // At most one alias may ever match a path
        for (i, [a, _]) in self.aliases.iter().enumerate() {
            for [b, _] in self.aliases.iter().skip(i + 1) {
                if a.contains(b.as_str()) || b.contains(a.as_str()) {
                    return Err(format!(
                        "filters.aliases keys '{}' and '{}' overlap",
                        a, b
                    ));
                }
            }
        }

        Ok(())
    }

    /// Build the transformer's filter lists
    pub fn to_filter_lists(&self) -> FilterLists {
        let aliases = AliasMap::new(
            self.aliases
                .iter()
                .map(|[from, to]| (from.clone(), to.clone())),
        );
        FilterLists::new(self.preserve.clone(), self.block.clone(), aliases)
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_preserve() -> Vec<String> {
    FilterLists::standard().preserve().to_vec()
}

fn default_block() -> Vec<String> {
    FilterLists::standard().block().to_vec()
}

fn default_aliases() -> Vec<[String; 2]> {
    AliasMap::standard()
        .iter()
        .map(|(from, to)| [from.to_string(), to.to_string()])
        .collect()
}
