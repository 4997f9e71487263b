//! Artifact output
//!
//! - [`yaml`] - YAML rendering with the generated-file header
//! - [`writer`] - write-if-changed file primitive

pub mod writer;
pub mod yaml;

pub use writer::{write_if_changed, WriteOutcome};
pub use yaml::render_yaml;
