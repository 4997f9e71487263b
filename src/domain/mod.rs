//! Domain types for relay-confgen.
//!
//! - **Error types** ([`ConfgenError`]) and the [`Result`] alias
//! - **Configuration trees** ([`ConfigValue`], [`Scalar`]): the type-erased
//!   form every component configuration is decoded into before it is
//!   transformed
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ConfgenError>`]:
//!
//! ```rust
//! use relay_confgen::domain::{ConfigValue, Result};
//!
//! fn decode() -> Result<ConfigValue> {
//!     ConfigValue::from_serializable(&serde_json::json!({"type": "stdin"}))
//! }
//! # assert!(decode().is_ok());
//! ```

pub mod errors;
pub mod result;
pub mod value;

pub use errors::ConfgenError;
pub use result::Result;
pub use value::{ConfigValue, Scalar};
