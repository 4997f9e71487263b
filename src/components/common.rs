//! Configuration blocks shared by several component types

use super::condition::ConditionConfig;
use crate::domain::{ConfigValue, Result};
use serde::Serialize;

/// TLS client settings
#[derive(Debug, Clone, Default, Serialize)]
pub struct TlsConfig {
    pub enabled: bool,
    pub root_cas_file: String,
    pub skip_cert_verify: bool,
}

/// Exponential backoff between retries
#[derive(Debug, Clone, Serialize)]
pub struct BackoffConfig {
    pub initial_interval: String,
    pub max_interval: String,
    pub max_elapsed_time: String,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_interval: "1s".to_string(),
            max_interval: "5s".to_string(),
            max_elapsed_time: "30s".to_string(),
        }
    }
}

/// Rules for grouping messages into batches
#[derive(Debug, Clone, Serialize)]
pub struct BatchPolicyConfig {
    pub byte_size: u64,
    pub count: u64,
    pub condition: ConditionConfig,
    pub period: String,
}

impl Default for BatchPolicyConfig {
    fn default() -> Self {
        Self {
            byte_size: 0,
            count: 1,
            condition: ConditionConfig::with_type("static"),
            period: String::new(),
        }
    }
}

impl BatchPolicyConfig {
    /// Same policy with its condition reduced to the selected type
    pub fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert("condition", self.condition.sanitised()?);
        Ok(value)
    }
}

/// Settings of a component type that takes none
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyConfig {}
