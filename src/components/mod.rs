//! Catalog of relay component configurations
//!
//! Every component category has a typed configuration struct carrying a
//! section per registered type, a `type` field selecting one of them, and
//! a `sanitised` form that keeps only the selected section.

pub mod buffer;
pub mod common;
pub mod condition;
pub mod input;
pub mod metrics;
pub mod output;
pub mod processor;
pub mod root;
pub mod sanitise;

pub use buffer::{BufferConfig, BUFFER_TYPES};
pub use condition::{ConditionConfig, CONDITION_TYPES};
pub use input::{InputConfig, INPUT_TYPES};
pub use metrics::{MetricsConfig, TracerConfig, METRICS_TYPES, TRACER_TYPES};
pub use output::{OutputConfig, OUTPUT_TYPES};
pub use processor::{ProcessorConfig, PROCESSOR_TYPES};
pub use root::{HttpConfig, LoggerConfig, PipelineConfig, RelayConfig};

use std::collections::BTreeSet;

/// Component categories that have a type registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Input,
    Output,
    Buffer,
    Processor,
    Condition,
    Metrics,
    Tracer,
}

impl ComponentKind {
    /// Registered type names, sorted
    pub fn types(self) -> &'static [&'static str] {
        match self {
            ComponentKind::Input => INPUT_TYPES,
            ComponentKind::Output => OUTPUT_TYPES,
            ComponentKind::Buffer => BUFFER_TYPES,
            ComponentKind::Processor => PROCESSOR_TYPES,
            ComponentKind::Condition => CONDITION_TYPES,
            ComponentKind::Metrics => METRICS_TYPES,
            ComponentKind::Tracer => TRACER_TYPES,
        }
    }

    pub fn is_registered(self, kind: &str) -> bool {
        self.types().contains(&kind)
    }
}

/// Sorted union of input and output type names
pub fn stream_types() -> Vec<&'static str> {
    INPUT_TYPES
        .iter()
        .chain(OUTPUT_TYPES.iter())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ComponentKind::Input ; "input")]
    #[test_case(ComponentKind::Output ; "output")]
    #[test_case(ComponentKind::Buffer ; "buffer")]
    #[test_case(ComponentKind::Processor ; "processor")]
    #[test_case(ComponentKind::Condition ; "condition")]
    #[test_case(ComponentKind::Metrics ; "metrics")]
    #[test_case(ComponentKind::Tracer ; "tracer")]
    fn test_types_are_sorted_and_unique(kind: ComponentKind) {
        let types = kind.types();
        assert!(!types.is_empty());
        assert!(types.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_is_registered() {
        assert!(ComponentKind::Input.is_registered("kafka"));
        assert!(!ComponentKind::Input.is_registered("dynamodb"));
        assert!(ComponentKind::Output.is_registered("dynamodb"));
    }

    #[test]
    fn test_stream_types_union() {
        let types = stream_types();
        assert!(types.windows(2).all(|w| w[0] < w[1]));
        assert!(types.contains(&"read_until"));
        assert!(types.contains(&"retry"));
        // kafka is both an input and an output
        assert_eq!(types.iter().filter(|t| **t == "kafka").count(), 1);
        assert_eq!(types.len(), 12);
    }
}
