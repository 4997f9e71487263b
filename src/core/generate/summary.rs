//! Generation summary and reporting

use crate::core::output::WriteOutcome;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Files created or overwritten
    pub generated: Vec<PathBuf>,

    /// Files left untouched because their content was already current
    pub skipped: Vec<PathBuf>,

    /// Number of environment variables in the environment config
    pub env_variables: usize,

    /// Duration of the run
    pub duration: Duration,
}

impl GenerationSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome of one artifact write
    pub fn record(&mut self, path: PathBuf, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Generated => self.generated.push(path),
            WriteOutcome::Skipped => self.skipped.push(path),
        }
    }

    /// Total number of artifacts considered
    pub fn total(&self) -> usize {
        self.generated.len() + self.skipped.len()
    }

    /// Check whether the run changed nothing on disk
    pub fn is_unchanged(&self) -> bool {
        self.generated.is_empty()
    }

    /// Log the summary
    pub fn log(&self) {
        tracing::info!(
            total = self.total(),
            generated = self.generated.len(),
            skipped = self.skipped.len(),
            env_variables = self.env_variables,
            duration_ms = self.duration.as_millis() as u64,
            "Configuration generation completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary() {
        let summary = GenerationSummary::new();
        assert_eq!(summary.total(), 0);
        assert!(summary.is_unchanged());
    }

    #[test]
    fn test_record_outcomes() {
        let mut summary = GenerationSummary::new();
        summary.record(PathBuf::from("a.yaml"), WriteOutcome::Generated);
        summary.record(PathBuf::from("b.yaml"), WriteOutcome::Skipped);
        summary.record(PathBuf::from("c.yaml"), WriteOutcome::Skipped);

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.generated, vec![PathBuf::from("a.yaml")]);
        assert_eq!(summary.skipped.len(), 2);
        assert!(!summary.is_unchanged());
    }

    #[test]
    fn test_with_duration() {
        let summary = GenerationSummary::new().with_duration(Duration::from_millis(12));
        assert_eq!(summary.duration, Duration::from_millis(12));
    }
}
