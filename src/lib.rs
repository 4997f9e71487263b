// relay-confgen - Reference configuration generator for relay
// Copyright (c) 2025 Relay Contributors
// Licensed under the MIT License

//! # relay-confgen - Environment driven configuration for relay
//!
//! relay-confgen generates the reference configuration files of the relay
//! stream bridge: one example per component type, plus an environment
//! config in which every field can be set through an environment variable,
//! and the Markdown reference of those variables.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Describing** every relay component with typed, serializable configs
//! - **Sanitising** configs down to the sections their `type` selects
//! - **Transforming** configuration trees into `${VAR:default}` placeholders
//! - **Documenting** the resulting variables by category
//! - **Writing** artifacts only when their content changed
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`components`] - Relay component configuration catalog
//! - [`core`] - Business logic (transform, docs, output, generate)
//! - [`domain`] - Core domain types, errors and the configuration tree
//! - [`config`] - Generator configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use relay_confgen::core::generate::Generator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = Generator::new("./config").run()?;
//!
//!     println!("Generated {} files", summary.generated.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Transformation
//!
//! ```rust
//! use relay_confgen::core::transform::{envify, FilterLists, VariableRegistry};
//! use relay_confgen::domain::ConfigValue;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), relay_confgen::domain::ConfgenError> {
//! let conf = ConfigValue::from_json(json!({"kafka": {"topic": "relay_stream"}}));
//! let mut registry = VariableRegistry::new();
//!
//! let _tree = envify("INPUT", &conf, &FilterLists::standard(), &mut registry)?;
//! assert_eq!(registry.get("INPUT_KAFKA_TOPIC"), Some("relay_stream"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Error Handling
//!
//! relay-confgen uses the [`domain::ConfgenError`] type for all errors:
//!
//! ```rust,no_run
//! use relay_confgen::domain::ConfgenError;
//!
//! fn example() -> Result<(), ConfgenError> {
//!     let config = relay_confgen::config::load_config("relay-confgen.toml")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
