//! Alias rewriting
//!
//! The structural path of a leaf mirrors the nested schema it came from,
//! e.g. `INPUT_BROKER_INPUTS_KAFKA_TOPIC` for the kafka topic of the single
//! input wrapped by the environment broker. Operators should only ever see
//! `INPUT_KAFKA_TOPIC`, so just before a leaf is flattened its path is run
//! through an [`AliasMap`].

/// Ordered list of `(from, to)` substring rewrites
///
/// At most one alias applies to a path: the first entry, in declared order,
/// whose `from` occurs in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<(String, String)>,
}

impl AliasMap {
    /// Create an alias map from ordered `(from, to)` pairs
    pub fn new<I, F, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Aliases used by the environment config
    pub fn standard() -> Self {
        Self::new([
            ("INPUT_BROKER_INPUTS", "INPUT"),
            ("INPUT_BROKER_COPIES", "INPUTS"),
            ("PIPELINE_PROCESSORS", "PROCESSOR"),
            ("PIPELINE_THREADS", "PROCESSOR_THREADS"),
            ("OUTPUT_BROKER_OUTPUTS", "OUTPUT"),
            ("OUTPUT_BROKER_PATTERN", "OUTPUTS_PATTERN"),
            ("OUTPUT_BROKER_COPIES", "OUTPUTS"),
        ])
    }

    /// Rewrite the first matching alias in `path`
    ///
    /// Only the first occurrence of the matched substring is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_confgen::core::transform::alias::AliasMap;
    ///
    /// let aliases = AliasMap::standard();
    /// assert_eq!(
    ///     aliases.rewrite("INPUT_BROKER_INPUTS_KAFKA_TOPIC"),
    ///     "INPUT_KAFKA_TOPIC"
    /// );
    /// assert_eq!(aliases.rewrite("LOGGER_LEVEL"), "LOGGER_LEVEL");
    /// ```
    pub fn rewrite(&self, path: &str) -> String {
        match self.entries.iter().find(|(from, _)| path.contains(from.as_str())) {
            Some((from, to)) => path.replacen(from.as_str(), to, 1),
            None => path.to_string(),
        }
    }

    /// Iterate over the `(from, to)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
