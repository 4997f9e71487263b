//! Per-type example configurations
//!
//! Each example is the default relay configuration with all processor
//! lists emptied, one component switched to the type being documented, and
//! everything the selected types don't use sanitised away.

use crate::components::processor::FilterConfig;
use crate::components::{
    stream_types, ComponentKind, ConditionConfig, MetricsConfig, ProcessorConfig, RelayConfig,
    TracerConfig, CONDITION_TYPES, METRICS_TYPES, PROCESSOR_TYPES, TRACER_TYPES,
};
use crate::core::output::render_yaml;
use crate::domain::Result;
use std::path::PathBuf;

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Name shown in status output
    pub label: String,
    /// Path relative to the output directory
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl Artifact {
    fn yaml(label: &str, path: PathBuf, conf: &RelayConfig) -> Result<Self> {
        let content = render_yaml(&conf.sanitised()?, false)?;
        Ok(Self {
            label: label.to_string(),
            path,
            content,
        })
    }
}

/// Example for an input and/or output type, at `<type>.yaml`
///
/// A type registered as both selects it in both sections.
pub fn stream_example(kind: &str) -> Result<Artifact> {
    let mut conf = RelayConfig::bare();
    if ComponentKind::Input.is_registered(kind) {
        conf.input.kind = kind.to_string();
    }
    if ComponentKind::Output.is_registered(kind) {
        conf.output.kind = kind.to_string();
    }
    Artifact::yaml(kind, PathBuf::from(format!("{kind}.yaml")), &conf)
}

/// Example for a processor type, at `processors/<type>.yaml`
pub fn processor_example(kind: &str) -> Result<Artifact> {
    let mut conf = RelayConfig::bare();
    conf.pipeline.processors.push(ProcessorConfig::with_type(kind));
    Artifact::yaml(kind, PathBuf::from("processors").join(format!("{kind}.yaml")), &conf)
}

/// Example for a condition type, at `conditions/<type>.yaml`
///
/// Conditions only run inside processors, so the condition is wrapped in a
/// `filter_parts` processor.
pub fn condition_example(kind: &str) -> Result<Artifact> {
    let mut conf = RelayConfig::bare();
    let mut processor = ProcessorConfig::with_type("filter_parts");
    processor.filter_parts = FilterConfig {
        condition: ConditionConfig::with_type(kind),
    };
    conf.pipeline.processors.push(processor);
    Artifact::yaml(kind, PathBuf::from("conditions").join(format!("{kind}.yaml")), &conf)
}

/// Example for a metrics type, at `metrics/<type>.yaml`
pub fn metrics_example(kind: &str) -> Result<Artifact> {
    let mut conf = RelayConfig::bare();
    conf.metrics = MetricsConfig::with_type(kind);
    Artifact::yaml(kind, PathBuf::from("metrics").join(format!("{kind}.yaml")), &conf)
}

/// Example for a tracer type, at `tracers/<type>.yaml`
pub fn tracer_example(kind: &str) -> Result<Artifact> {
    let mut conf = RelayConfig::bare();
    conf.tracer = TracerConfig::with_type(kind);
    Artifact::yaml(kind, PathBuf::from("tracers").join(format!("{kind}.yaml")), &conf)
}

/// Every per-type example, in a stable order
pub fn all_examples() -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    for kind in stream_types() {
        artifacts.push(stream_example(kind)?);
    }
    for kind in PROCESSOR_TYPES {
        artifacts.push(processor_example(kind)?);
    }
    for kind in CONDITION_TYPES {
        artifacts.push(condition_example(kind)?);
    }
    for kind in METRICS_TYPES {
        artifacts.push(metrics_example(kind)?);
    }
    for kind in TRACER_TYPES {
        artifacts.push(tracer_example(kind)?);
    }

    tracing::debug!(count = artifacts.len(), "Rendered example configs");
    Ok(artifacts)
}
