//! Filter policy
//!
//! Decides per path whether a subtree is copied verbatim, dropped, or walked
//! into. Entries match by substring containment so one entry can cover a
//! whole family of nested forms (`FILTER` drops `filter`, `filter_parts`
//! and everything below them) without listing each depth.

use super::alias::AliasMap;

/// Outcome of the filter policy for a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Keep the subtree as literal structured data, no placeholders
    Preserve,
    /// Drop the subtree from the output entirely
    Block,
    /// Recurse into children, or flatten if the value is a scalar
    Recurse,
}

/// Immutable preserve/block/alias lists passed into the transformer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterLists {
    preserve: Vec<String>,
    block: Vec<String>,
    aliases: AliasMap,
}

impl FilterLists {
    /// Build filter lists from explicit entries
    pub fn new<P, B>(preserve: P, block: B, aliases: AliasMap) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            preserve: preserve.into_iter().map(Into::into).collect(),
            block: block.into_iter().map(Into::into).collect(),
            aliases,
        }
    }

    /// The lists used to generate the environment config
    ///
    /// Component `type` fields at the root must stay literal because a
    /// broker cannot be selected from an environment variable. The block
    /// list removes nested structural forms (conditions, sub-brokers,
    /// processor trees, static label maps) that have no sensible flat
    /// variable representation.
    pub fn standard() -> Self {
        Self::new(
            ["INPUT_TYPE", "OUTPUT_TYPE"],
            [
                "READ_UNTIL",
                "OUTPUT_BROKER_OUTPUTS_RETRY",
                "CONDITIONAL",
                "BUFFER_MEMORY_BATCH_POLICY",
                "WHILE",
                "SWITCH",
                "PROCESS_FIELD",
                "PROCESS_MAP",
                "CHECK_FIELD",
                "FILTER",
                "DEDUPE",
                "BATCHING_CONDITION",
                "INPUT_BROKER_INPUTS_BROKER",
                "OUTPUT_BROKER_OUTPUTS_BROKER",
                "OUTPUT_BROKER_OUTPUTS_DYNAMODB",
                "LOGGER_STATIC_FIELDS",
            ],
            AliasMap::standard(),
        )
    }

    /// Decide what to do with the subtree at `path`
    ///
    /// The preserve list is checked before the block list.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_confgen::core::transform::filter::{FilterDecision, FilterLists};
    ///
    /// let lists = FilterLists::standard();
    /// assert_eq!(lists.decide("INPUT_TYPE"), FilterDecision::Preserve);
    /// assert_eq!(lists.decide("LOGGER_STATIC_FIELDS"), FilterDecision::Block);
    /// assert_eq!(lists.decide("LOGGER_LEVEL"), FilterDecision::Recurse);
    /// ```
    pub fn decide(&self, path: &str) -> FilterDecision {
        if self.preserve.iter().any(|p| path.contains(p.as_str())) {
            FilterDecision::Preserve
        } else if self.block.iter().any(|b| path.contains(b.as_str())) {
            FilterDecision::Block
        } else {
            FilterDecision::Recurse
        }
    }

    pub fn preserve(&self) -> &[String] {
        &self.preserve
    }

    pub fn block(&self) -> &[String] {
        &self.block
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("INPUT_TYPE", FilterDecision::Preserve ; "root input type")]
    #[test_case("OUTPUT_TYPE", FilterDecision::Preserve ; "root output type")]
    #[test_case("INPUT_BROKER_INPUTS_TYPE", FilterDecision::Recurse ; "inner input type is not preserved")]
    #[test_case("INPUT_BROKER_INPUTS_BROKER", FilterDecision::Block ; "nested input broker")]
    #[test_case("INPUT_BROKER_INPUTS_BROKER_COPIES", FilterDecision::Block ; "below nested input broker")]
    #[test_case("INPUT_BROKER_INPUTS_READ_UNTIL", FilterDecision::Block ; "read until")]
    #[test_case("OUTPUT_BROKER_OUTPUTS_RETRY", FilterDecision::Block ; "retry output")]
    #[test_case("OUTPUT_BROKER_OUTPUTS_DYNAMODB_TABLE", FilterDecision::Block ; "dynamodb output")]
    #[test_case("PIPELINE_PROCESSORS_FILTER_PARTS", FilterDecision::Block ; "filter parts by substring")]
    #[test_case("PIPELINE_PROCESSORS_SWITCH", FilterDecision::Block ; "switch processor")]
    #[test_case("PIPELINE_PROCESSORS_DEDUPE_CACHE", FilterDecision::Block ; "dedupe processor")]
    #[test_case("BUFFER_MEMORY_BATCH_POLICY_COUNT", FilterDecision::Block ; "buffer batch policy")]
    #[test_case("BUFFER_MEMORY_LIMIT", FilterDecision::Recurse ; "buffer limit")]
    #[test_case("LOGGER_STATIC_FIELDS_@SERVICE", FilterDecision::Block ; "logger static fields")]
    #[test_case("METRICS_PROMETHEUS_PUSH_URL", FilterDecision::Recurse ; "plain field")]
    fn test_standard_decisions(path: &str, expected: FilterDecision) {
        assert_eq!(FilterLists::standard().decide(path), expected);
    }

    #[test]
    fn test_preserve_takes_precedence_over_block() {
        let lists = FilterLists::new(["TYPE"], ["INPUT"], AliasMap::default());
        assert_eq!(lists.decide("INPUT_TYPE"), FilterDecision::Preserve);
        assert_eq!(lists.decide("INPUT_COPIES"), FilterDecision::Block);
    }

    #[test]
    fn test_substring_matches_inside_longer_segment() {
        // "FILTER" also catches a field that merely contains the word
        let lists = FilterLists::standard();
        assert_eq!(
            lists.decide("INPUT_KAFKA_TOPIC_FILTERS"),
            FilterDecision::Block
        );
        // and "WHILE" catches "ERRWHILEX"
        assert_eq!(lists.decide("OUTPUT_ERRWHILEX"), FilterDecision::Block);
    }

    #[test]
    fn test_empty_lists_always_recurse() {
        let lists = FilterLists::default();
        assert_eq!(lists.decide("INPUT_TYPE"), FilterDecision::Recurse);
    }

    #[test]
    fn test_standard_lists_contents() {
        let lists = FilterLists::standard();
        assert_eq!(lists.preserve().len(), 2);
        assert_eq!(lists.block().len(), 16);
        assert_eq!(lists.aliases().len(), 7);
    }
}
