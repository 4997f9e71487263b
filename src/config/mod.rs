//! Configuration management for relay-confgen.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation for the generator itself (not for the relay configs it
//! generates).
//!
//! # Overview
//!
//! The generator runs with defaults and needs no configuration file. When
//! `RELAY_CONFGEN_CONFIG` names one, it supports:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every omitted setting
//! - Validation of log levels and filter lists
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use relay_confgen::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("relay-confgen.toml")?;
//!
//! println!("Log level: {}", config.logging.level);
//! println!("Block list: {:?}", config.filters.block);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`LoggingConfig`] - Log level and format
//! - [`FiltersConfig`] - Preserve, block and alias lists for the environment config
//!
//! # Example Configuration
//!
//! ```toml
//! [logging]
//! level = "debug"
//! json = false
//!
//! [filters]
//! preserve = ["INPUT_TYPE", "OUTPUT_TYPE"]
//! block = ["READ_UNTIL", "${EXTRA_BLOCKED_PATH}"]
//! aliases = [["INPUT_BROKER_INPUTS", "INPUT"]]
//! ```
//!
//! # Environment Variables
//!
//! - `RELAY_CONFGEN_CONFIG` - path of the TOML file
//! - `RELAY_CONFGEN_LOG_LEVEL` - overrides `logging.level`
//! - `RELAY_CONFGEN_LOG_JSON` - overrides `logging.json`

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_from_env};
pub use schema::{FiltersConfig, GeneratorConfig, LoggingConfig};
