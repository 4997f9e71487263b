//! Generation of the reference configuration tree
//!
//! A run renders every artifact in memory and hands each one to the
//! idempotent writer, so an up to date output directory is never touched.
//!
//! Layout under the output directory:
//!
//! - `<type>.yaml` for every input and output type
//! - `processors/`, `conditions/`, `metrics/`, `tracers/` per-type examples
//! - `env/default.yaml` and `env/README.md` for the environment config

pub mod environment;
pub mod examples;
pub mod summary;

pub use environment::{build_environment_config, EnvironmentConfig};
pub use examples::{all_examples, Artifact};
pub use summary::GenerationSummary;

use crate::core::docs::render_env_docs;
use crate::core::output::{render_yaml, write_if_changed};
use crate::core::transform::FilterLists;
use crate::domain::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Drives a generation run into one output directory
#[derive(Debug, Clone)]
pub struct Generator {
    dir: PathBuf,
    lists: FilterLists,
}

impl Generator {
    /// Create a generator using the standard filter lists
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_filters(dir, FilterLists::standard())
    }

    /// Create a generator with explicit filter lists
    pub fn with_filters(dir: impl Into<PathBuf>, lists: FilterLists) -> Self {
        Self {
            dir: dir.into(),
            lists,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render every artifact and write the ones that changed
    ///
    /// # Errors
    ///
    /// Fails on the first artifact that cannot be rendered or written.
    /// Files written before the failure are left in place.
    pub fn run(&self) -> Result<GenerationSummary> {
        let start = Instant::now();
        tracing::info!(dir = %self.dir.display(), "Generating configuration examples");

        let mut summary = GenerationSummary::new();

        for artifact in all_examples()? {
            self.write(&artifact, &mut summary)?;
        }

        let env = build_environment_config(&self.lists)?;
        summary.env_variables = env.registry.len();

        let env_config = Artifact {
            label: "environment".to_string(),
            path: PathBuf::from("env").join("default.yaml"),
            content: render_yaml(&env.tree, true)?,
        };
        self.write(&env_config, &mut summary)?;

        let env_docs = Artifact {
            label: "environment docs".to_string(),
            path: PathBuf::from("env").join("README.md"),
            content: render_env_docs(&env.registry).into_bytes(),
        };
        self.write(&env_docs, &mut summary)?;

        let summary = summary.with_duration(start.elapsed());
        summary.log();
        Ok(summary)
    }

    fn write(&self, artifact: &Artifact, summary: &mut GenerationSummary) -> Result<()> {
        let path = self.dir.join(&artifact.path);
        let outcome = write_if_changed(&artifact.label, &path, &artifact.content)?;
        summary.record(path, outcome);
        Ok(())
    }
}
