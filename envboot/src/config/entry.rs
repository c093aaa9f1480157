//! Single configuration contributions derived from environment variables.

/// Separator between hierarchy levels in a variable name.
pub const NODE_SEPARATOR: &str = "__";

/// One key/value contribution to the environment-derived configuration.
///
/// `value` is expected to be configuration-safe already (quoted where
/// needed, or a bracketed list literal); the aggregator writes it verbatim
/// for single-member keys.
///
/// # Examples
///
/// ```
/// use envboot::config::ConfigEntrySource;
///
/// let entry = ConfigEntrySource::from_variable("AKKA__CLUSTER__SEED_NODES__2", "\"a\"").unwrap();
/// assert_eq!(entry.key(), "akka.cluster.seed-nodes");
/// assert_eq!(entry.index(), 2);
/// assert_eq!(entry.depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntrySource {
    variable: String,
    nodes: Vec<String>,
    key: String,
    value: String,
    index: usize,
}

impl ConfigEntrySource {
    /// Describes where entries of this type come from.
    pub const SOURCE_NAME: &'static str = "environment-variable";

    /// Builds an entry from explicit path segments.
    ///
    /// Returns `None` if `nodes` is empty.
    #[must_use]
    pub fn new(
        variable: impl Into<String>,
        nodes: Vec<String>,
        value: impl Into<String>,
        index: usize,
    ) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        let key = nodes.join(".");
        Some(Self {
            variable: variable.into(),
            nodes,
            key,
            value: value.into(),
            index,
        })
    }

    /// Derives the path and list index from a flattened variable name.
    ///
    /// The name is split on `__`; underscores inside a segment become
    /// hyphens and every segment is lower-cased. Empty segments are dropped.
    /// A trailing all-digit segment is taken as the list index, unless it is
    /// the only segment. Returns `None` when no segment remains.
    #[must_use]
    pub fn from_variable(name: &str, value: impl Into<String>) -> Option<Self> {
        let mut nodes: Vec<String> = name
            .split(NODE_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.replace('_', "-").to_lowercase())
            .collect();

        let mut index = 0;
        if nodes.len() > 1 {
            if let Some(parsed) = nodes.last().and_then(|last| parse_index(last)) {
                nodes.pop();
                index = parsed;
            }
        }

        Self::new(name, nodes, value, index)
    }

    /// Records the original variable name, e.g. when the entry was derived
    /// from an alias spelled differently.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// The variable this entry was derived from.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Path segments, outermost first.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Dotted key; always the join of [`nodes`](Self::nodes).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Configuration-safe value text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Position within a multi-value key; 0 when not indexed.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of path segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.len()
    }
}

/// Parses a pure digit string; anything else (or an overflow) is not an index.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
