//! Root relay configuration and the sections that have no type selector

use super::buffer::BufferConfig;
use super::input::InputConfig;
use super::metrics::{MetricsConfig, TracerConfig};
use super::output::OutputConfig;
use super::processor::ProcessorConfig;
use super::sanitise::sanitise_each;
use crate::domain::{ConfigValue, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Full configuration of a relay process
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelayConfig {
    pub http: HttpConfig,
    pub input: InputConfig,
    pub buffer: BufferConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
    pub logger: LoggerConfig,
    pub metrics: MetricsConfig,
    pub tracer: TracerConfig,
}

impl RelayConfig {
    /// Default configuration with every processor list emptied
    pub fn bare() -> Self {
        let mut conf = Self::default();
        conf.input.processors.clear();
        conf.output.processors.clear();
        conf.pipeline.processors.clear();
        conf
    }

    /// Canonical form of the whole configuration
    ///
    /// Every typed section keeps only what its `type` selects.
    pub fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert("input", self.input.sanitised()?);
        value.insert("buffer", self.buffer.sanitised()?);
        value.insert("pipeline", self.pipeline.sanitised()?);
        value.insert("output", self.output.sanitised()?);
        value.insert("metrics", self.metrics.sanitised()?);
        value.insert("tracer", self.tracer.sanitised()?);
        Ok(value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HttpConfig {
    pub address: String,
    pub read_timeout: String,
    pub root_path: String,
    pub debug_endpoints: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:4195".to_string(),
            read_timeout: "5s".to_string(),
            root_path: "/relay".to_string(),
            debug_endpoints: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineConfig {
    pub processors: Vec<ProcessorConfig>,
    pub threads: u64,
}

impl PipelineConfig {
    pub fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert(
            "processors",
            sanitise_each(&self.processors, ProcessorConfig::sanitised)?,
        );
        Ok(value)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            processors: Vec::new(),
            threads: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggerConfig {
    pub prefix: String,
    pub level: String,
    pub add_timestamp: bool,
    pub json_format: bool,
    pub static_fields: BTreeMap<String, String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let mut static_fields = BTreeMap::new();
        static_fields.insert("@service".to_string(), "relay".to_string());

        Self {
            prefix: "relay".to_string(),
            level: "INFO".to_string(),
            add_timestamp: true,
            json_format: true,
            static_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let value = ConfigValue::from_serializable(&RelayConfig::default()).unwrap();
        for section in [
            "http", "input", "buffer", "pipeline", "output", "logger", "metrics", "tracer",
        ] {
            assert!(value.get(section).is_some(), "missing {section}");
        }
    }

    #[test]
    fn test_sanitised_root() {
        let mut conf = RelayConfig::bare();
        conf.input.kind = "kafka".to_string();
        conf.pipeline
            .processors
            .push(ProcessorConfig::with_type("sleep"));

        let value = conf.sanitised().unwrap();
        let input = value.get("input").unwrap();
        assert!(input.get("kafka").is_some());
        assert!(input.get("stdin").is_none());

        let output = value.get("output").unwrap();
        assert!(output.get("stdout").is_some());
        assert!(output.get("kafka").is_none());

        match value.get("pipeline").and_then(|p| p.get("processors")) {
            Some(ConfigValue::Sequence(p)) => {
                assert!(p[0].get("sleep").is_some());
                assert!(p[0].get("log").is_none());
            }
            other => panic!("unexpected processors: {other:?}"),
        }

        let logger = value.get("logger").unwrap();
        assert!(logger.get("static_fields").is_some());
    }
}
