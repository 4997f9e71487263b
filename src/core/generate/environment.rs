//! Environment-wide configuration
//!
//! One configuration file that exposes every field of every section through
//! an environment variable. Inputs and outputs are wrapped in brokers around
//! a fully populated child config so a single file covers every type.

use crate::components::{
    BufferConfig, HttpConfig, InputConfig, LoggerConfig, MetricsConfig, OutputConfig,
    PipelineConfig, ProcessorConfig,
};
use crate::core::transform::{envify_serializable, verify_registry, FilterLists, VariableRegistry};
use crate::domain::{ConfigValue, Result};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct BrokerInputSection {
    #[serde(rename = "type")]
    kind: &'static str,
    broker: BrokerInputs,
}

#[derive(Debug, Serialize)]
struct BrokerInputs {
    copies: u64,
    inputs: Vec<InputConfig>,
}

#[derive(Debug, Serialize)]
struct BrokerOutputSection {
    #[serde(rename = "type")]
    kind: &'static str,
    broker: BrokerOutputs,
}

#[derive(Debug, Serialize)]
struct BrokerOutputs {
    copies: u64,
    pattern: &'static str,
    outputs: Vec<OutputConfig>,
}

/// The envified configuration tree and the variables it refers to
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub tree: ConfigValue,
    pub registry: VariableRegistry,
}

/// Build the environment config with the given filter lists
///
/// # Errors
///
/// Returns an encoding error if a section cannot be encoded, or
/// [`crate::domain::ConfgenError::Invariant`] if the resulting tree and
/// registry disagree.
pub fn build_environment_config(lists: &FilterLists) -> Result<EnvironmentConfig> {
    let input = BrokerInputSection {
        kind: "broker",
        broker: BrokerInputs {
            copies: 1,
            inputs: vec![InputConfig::with_type("dynamic")],
        },
    };

    let pipeline = PipelineConfig {
        processors: vec![ProcessorConfig::with_type("noop")],
        ..PipelineConfig::default()
    };

    let output = BrokerOutputSection {
        kind: "broker",
        broker: BrokerOutputs {
            copies: 1,
            pattern: "greedy",
            outputs: vec![OutputConfig::with_type("dynamic")],
        },
    };

    let mut registry = VariableRegistry::new();
    let mut tree = BTreeMap::new();

    let sections = [
        (
            "http",
            envify_serializable("HTTP", &HttpConfig::default(), lists, &mut registry)?,
        ),
        (
            "input",
            envify_serializable("INPUT", &input, lists, &mut registry)?,
        ),
        (
            "buffer",
            envify_serializable("BUFFER", &BufferConfig::default(), lists, &mut registry)?,
        ),
        (
            "pipeline",
            envify_serializable("PIPELINE", &pipeline, lists, &mut registry)?,
        ),
        (
            "output",
            envify_serializable("OUTPUT", &output, lists, &mut registry)?,
        ),
        (
            "logger",
            envify_serializable("LOGGER", &LoggerConfig::default(), lists, &mut registry)?,
        ),
        (
            "metrics",
            envify_serializable("METRICS", &MetricsConfig::default(), lists, &mut registry)?,
        ),
    ];

    for (name, section) in sections {
        match section {
            Some(value) => {
                tree.insert(name.to_string(), value);
            }
            None => tracing::debug!(section = name, "Section empty after filtering, omitted"),
        }
    }

    let tree = ConfigValue::Object(tree);
    verify_registry(&tree, &registry)?;

    tracing::info!(variables = registry.len(), "Built environment config");
    Ok(EnvironmentConfig { tree, registry })
}
