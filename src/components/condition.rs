//! Condition configurations
//!
//! Conditions are never used on their own; they are embedded in processors
//! (`filter`, `filter_parts`, `switch`) and batch policies.

use super::sanitise::retain_selected;
use crate::domain::{ConfigValue, Result};
use serde::Serialize;

/// Every registered condition type
pub const CONDITION_TYPES: &[&str] = &["bounds_check", "count", "jmespath", "static", "text"];

#[derive(Debug, Clone, Serialize)]
pub struct ConditionConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub bounds_check: BoundsCheckConditionConfig,
    pub count: CountConditionConfig,
    pub jmespath: JmespathConditionConfig,
    pub r#static: bool,
    pub text: TextConditionConfig,
}

impl ConditionConfig {
    /// Default condition config with `type` set
    pub fn with_type(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    /// Canonical form: only `type` and the section it selects
    pub fn sanitised(&self) -> Result<ConfigValue> {
        Ok(retain_selected(ConfigValue::from_serializable(self)?, &[]))
    }
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            kind: "text".to_string(),
            bounds_check: BoundsCheckConditionConfig::default(),
            count: CountConditionConfig::default(),
            jmespath: JmespathConditionConfig::default(),
            r#static: true,
            text: TextConditionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundsCheckConditionConfig {
    pub max_part_size: u64,
    pub max_parts: u64,
    pub min_part_size: u64,
    pub min_parts: u64,
}

impl Default for BoundsCheckConditionConfig {
    fn default() -> Self {
        Self {
            max_part_size: 1_073_741_824,
            max_parts: 100,
            min_part_size: 1,
            min_parts: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CountConditionConfig {
    pub arg: u64,
}

impl Default for CountConditionConfig {
    fn default() -> Self {
        Self { arg: 100 }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct JmespathConditionConfig {
    pub part: i64,
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextConditionConfig {
    pub arg: String,
    pub operator: String,
    pub part: i64,
}

impl Default for TextConditionConfig {
    fn default() -> Self {
        Self {
            arg: String::new(),
            operator: "equals_cs".to_string(),
            part: 0,
        }
    }
}
