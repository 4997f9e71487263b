//! Metrics and tracer configurations

use super::common::EmptyConfig;
use super::sanitise::retain_selected;
use crate::domain::{ConfigValue, Result};
use serde::Serialize;

/// Every registered metrics type
pub const METRICS_TYPES: &[&str] = &["http_server", "prometheus", "statsd", "stdout"];

/// Every registered tracer type
pub const TRACER_TYPES: &[&str] = &["jaeger", "none"];

#[derive(Debug, Clone, Serialize)]
pub struct MetricsConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub prefix: String,
    pub http_server: EmptyConfig,
    pub prometheus: PrometheusConfig,
    pub statsd: StatsdConfig,
    pub stdout: StdoutMetricsConfig,
}

impl MetricsConfig {
    /// Default metrics config with `type` set
    pub fn with_type(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    pub fn sanitised(&self) -> Result<ConfigValue> {
        Ok(retain_selected(
            ConfigValue::from_serializable(self)?,
            &["prefix"],
        ))
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            kind: "http_server".to_string(),
            prefix: "relay".to_string(),
            http_server: EmptyConfig::default(),
            prometheus: PrometheusConfig::default(),
            statsd: StatsdConfig::default(),
            stdout: StdoutMetricsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PrometheusConfig {
    pub push_url: String,
    pub push_interval: String,
    pub push_job_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsdConfig {
    pub address: String,
    pub flush_period: String,
    pub network: String,
}

impl Default for StatsdConfig {
    fn default() -> Self {
        Self {
            address: "localhost:4040".to_string(),
            flush_period: "100ms".to_string(),
            network: "udp".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StdoutMetricsConfig {
    pub push_interval: String,
    pub flush_metrics: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TracerConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub jaeger: JaegerConfig,
    pub none: EmptyConfig,
}

impl TracerConfig {
    /// Default tracer config with `type` set
    pub fn with_type(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    pub fn sanitised(&self) -> Result<ConfigValue> {
        Ok(retain_selected(ConfigValue::from_serializable(self)?, &[]))
    }
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            kind: "none".to_string(),
            jaeger: JaegerConfig::default(),
            none: EmptyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JaegerConfig {
    pub agent_address: String,
    pub service_name: String,
    pub sampler_type: String,
    pub sampler_param: f64,
    pub flush_interval: String,
}

impl Default for JaegerConfig {
    fn default() -> Self {
        Self {
            agent_address: "localhost:6831".to_string(),
            service_name: "relay".to_string(),
            sampler_type: "const".to_string(),
            sampler_param: 1.0,
            flush_interval: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_sanitised_keeps_prefix() {
        let value = MetricsConfig::with_type("statsd").sanitised().unwrap();
        assert_eq!(value.get("prefix").and_then(|v| v.as_str()), Some("relay"));
        assert!(value.get("statsd").is_some());
        assert!(value.get("prometheus").is_none());
    }

    #[test]
    fn test_tracer_defaults_to_none() {
        let value = TracerConfig::default().sanitised().unwrap();
        assert_eq!(
            value,
            ConfigValue::from_json(serde_json::json!({"type": "none", "none": {}}))
        );
    }

    #[test]
    fn test_every_type_has_a_section() {
        let metrics = ConfigValue::from_serializable(&MetricsConfig::default()).unwrap();
        for kind in METRICS_TYPES {
            assert!(metrics.get(kind).is_some(), "missing section for {kind}");
        }
        let tracer = ConfigValue::from_serializable(&TracerConfig::default()).unwrap();
        for kind in TRACER_TYPES {
            assert!(tracer.get(kind).is_some(), "missing section for {kind}");
        }
    }
}
