//! Buffer configurations

use super::common::{BatchPolicyConfig, EmptyConfig};
use super::sanitise::retain_selected;
use crate::domain::{ConfigValue, Result};
use serde::Serialize;

/// Every registered buffer type
pub const BUFFER_TYPES: &[&str] = &["memory", "none"];

#[derive(Debug, Clone, Serialize)]
pub struct BufferConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub memory: MemoryBufferConfig,
    pub none: EmptyConfig,
}

impl BufferConfig {
    pub fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = retain_selected(ConfigValue::from_serializable(self)?, &[]);
        if self.kind == "memory" {
            value.insert("memory", self.memory.sanitised()?);
        }
        Ok(value)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            kind: "none".to_string(),
            memory: MemoryBufferConfig::default(),
            none: EmptyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryBufferConfig {
    pub limit: u64,
    pub batch_policy: MemoryBatchPolicyConfig,
}

impl MemoryBufferConfig {
    fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert("batch_policy", self.batch_policy.sanitised()?);
        Ok(value)
    }
}

impl Default for MemoryBufferConfig {
    fn default() -> Self {
        Self {
            limit: 524_288_000,
            batch_policy: MemoryBatchPolicyConfig::default(),
        }
    }
}

/// Batch policy that can be switched off entirely
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryBatchPolicyConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub policy: BatchPolicyConfig,
}

impl MemoryBatchPolicyConfig {
    fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert("condition", self.policy.condition.sanitised()?);
        Ok(value)
    }
}
