//! Processor configurations

use super::common::EmptyConfig;
use super::condition::ConditionConfig;
use super::sanitise::{retain_selected, sanitise_each};
use crate::domain::{ConfigValue, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Every registered processor type
pub const PROCESSOR_TYPES: &[&str] = &[
    "bounds_check",
    "compress",
    "dedupe",
    "filter",
    "filter_parts",
    "log",
    "noop",
    "sleep",
    "switch",
    "while",
];

#[derive(Debug, Clone, Serialize)]
pub struct ProcessorConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub bounds_check: BoundsCheckConfig,
    pub compress: CompressConfig,
    pub dedupe: DedupeConfig,
    pub filter: FilterConfig,
    pub filter_parts: FilterConfig,
    pub log: LogConfig,
    pub noop: EmptyConfig,
    pub sleep: SleepConfig,
    pub switch: Vec<SwitchCaseConfig>,
    pub r#while: WhileConfig,
}

impl ProcessorConfig {
    /// Default processor config with `type` set
    pub fn with_type(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    /// Canonical form: `type` plus the selected section, with nested
    /// conditions and processors sanitised as well
    pub fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = retain_selected(ConfigValue::from_serializable(self)?, &[]);

        let section = match self.kind.as_str() {
            "filter" => Some(self.filter.sanitised()?),
            "filter_parts" => Some(self.filter_parts.sanitised()?),
            "switch" => Some(sanitise_each(&self.switch, SwitchCaseConfig::sanitised)?),
            "while" => Some(self.r#while.sanitised()?),
            _ => None,
        };
        if let Some(section) = section {
            value.insert(self.kind.clone(), section);
        }

        Ok(value)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            kind: "bounds_check".to_string(),
            bounds_check: BoundsCheckConfig::default(),
            compress: CompressConfig::default(),
            dedupe: DedupeConfig::default(),
            filter: FilterConfig::default(),
            filter_parts: FilterConfig::default(),
            log: LogConfig::default(),
            noop: EmptyConfig::default(),
            sleep: SleepConfig::default(),
            switch: Vec::new(),
            r#while: WhileConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundsCheckConfig {
    pub max_part_size: u64,
    pub max_parts: u64,
    pub min_part_size: u64,
    pub min_parts: u64,
}

impl Default for BoundsCheckConfig {
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
pub struct CompressConfig {
    pub algorithm: String,
    pub level: i64,
    pub parts: Vec<i64>,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            algorithm: "gzip".to_string(),
            level: -1,
            parts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DedupeConfig {
    pub cache: String,
    pub drop_on_err: bool,
    pub hash: String,
    pub key: String,
    pub parts: Vec<i64>,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            cache: String::new(),
            drop_on_err: true,
            hash: "none".to_string(),
            key: String::new(),
            parts: vec![0],
        }
    }
}

/// Shared by `filter` and `filter_parts`
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterConfig {
    #[serde(flatten)]
    pub condition: ConditionConfig,
}

impl FilterConfig {
    fn sanitised(&self) -> Result<ConfigValue> {
        self.condition.sanitised()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogConfig {
    pub fields: BTreeMap<String, String>,
    pub level: String,
    pub message: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            level: "INFO".to_string(),
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepConfig {
    pub duration: String,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            duration: "100us".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SwitchCaseConfig {
    pub condition: ConditionConfig,
    pub fallthrough: bool,
    pub processors: Vec<ProcessorConfig>,
}

impl SwitchCaseConfig {
    fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert("condition", self.condition.sanitised()?);
        value.insert(
            "processors",
            sanitise_each(&self.processors, ProcessorConfig::sanitised)?,
        );
        Ok(value)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WhileConfig {
    pub at_least_once: bool,
    pub check: String,
    pub max_loops: u64,
    pub processors: Vec<ProcessorConfig>,
}

impl WhileConfig {
    fn sanitised(&self) -> Result<ConfigValue> {
        let mut value = ConfigValue::from_serializable(self)?;
        value.insert(
            "processors",
            sanitise_each(&self.processors, ProcessorConfig::sanitised)?,
        );
        Ok(value)
    }
}
