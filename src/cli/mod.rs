//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for relay-confgen using clap.

use crate::config::GeneratorConfig;
use crate::core::generate::Generator;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// relay-confgen - reference configuration generator for relay
#[derive(Parser, Debug)]
#[command(name = "relay-confgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to write generated configuration files into
    #[arg(long, default_value = "./config", env = "RELAY_CONFGEN_DIR")]
    pub dir: PathBuf,
}

impl Cli {
    /// Generate every configuration artifact into `dir`
    ///
    /// Returns the process exit code.
    pub fn execute(&self, config: &GeneratorConfig) -> anyhow::Result<i32> {
        let generator = Generator::with_filters(&self.dir, config.filters.to_filter_lists());

        let summary = generator
            .run()
            .with_context(|| format!("Failed to generate configs into {}", self.dir.display()))?;

        println!();
        println!(
            "Generated {} and skipped {} files ({} environment variables)",
            summary.generated.len(),
            summary.skipped.len(),
            summary.env_variables
        );

        Ok(0)
    }
}
