//! Aggregation of environment entries into configuration text.
//!
//! Entries sharing a key form a multi-value (list) key. Groups are built
//! from entries ordered by descending depth, so a nested key is always
//! emitted alongside, never folded into, a shallower one.

use std::collections::HashMap;

use crate::config::entry::ConfigEntrySource;
use crate::config::layered::Config;
use crate::error::{Error, Result};
use crate::quoting::add_quotes_if_needed;

/// All entries contributing to one key, ordered by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup {
    key: String,
    members: Vec<ConfigEntrySource>,
}

impl EntryGroup {
    /// The dotted key shared by all members.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Members in ascending index order, one per index.
    #[must_use]
    pub fn members(&self) -> &[ConfigEntrySource] {
        &self.members
    }

    /// The contributing variable names, comma separated.
    #[must_use]
    pub fn variables(&self) -> String {
        self.members
            .iter()
            .map(ConfigEntrySource::variable)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The value literal for this key: the bare value of a single member, or
    /// a bracketed list of quote-normalized values.
    #[must_use]
    pub fn literal(&self) -> String {
        match self.members.as_slice() {
            [single] => single.value().to_string(),
            members => {
                let values: Vec<String> = members
                    .iter()
                    .map(|m| add_quotes_if_needed(m.value()))
                    .collect();
                format!("[{}]", values.join(","))
            }
        }
    }

    fn line(&self) -> String {
        format!("{}={}\n", self.key, self.literal())
    }

    /// Adds `entry`, replacing any member already holding the same index.
    fn push(&mut self, entry: ConfigEntrySource) {
        match self
            .members
            .iter_mut()
            .find(|m| m.index() == entry.index())
        {
            Some(existing) => *existing = entry,
            None => self.members.push(entry),
        }
    }
}

/// Groups, orders and serializes environment entries.
///
/// # Examples
///
/// ```
/// use envboot::config::{ConfigEntryAggregator, ConfigEntrySource};
///
/// let entries = vec![
///     ConfigEntrySource::from_variable("AKKA__CLUSTER__ROLES__1", "backend").unwrap(),
///     ConfigEntrySource::from_variable("AKKA__CLUSTER__ROLES__0", "web").unwrap(),
/// ];
///
/// let text = ConfigEntryAggregator::render(entries);
/// assert_eq!(text, "akka.cluster.roles=[web,backend]\n");
/// ```
pub struct ConfigEntryAggregator;

impl ConfigEntryAggregator {
    /// Groups entries by key.
    ///
    /// Entries are first stably ordered by descending depth; groups keep the
    /// order in which their key first appears. Within a group, the last
    /// entry seen for an index wins and members are sorted by index.
    #[must_use]
    pub fn group(mut entries: Vec<ConfigEntrySource>) -> Vec<EntryGroup> {
        entries.sort_by(|a, b| b.depth().cmp(&a.depth()));

        let mut groups: Vec<EntryGroup> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for entry in entries {
            match positions.get(entry.key()) {
                Some(&position) => groups[position].push(entry),
                None => {
                    positions.insert(entry.key().to_string(), groups.len());
                    groups.push(EntryGroup {
                        key: entry.key().to_string(),
                        members: vec![entry],
                    });
                }
            }
        }

        for group in &mut groups {
            group.members.sort_by_key(ConfigEntrySource::index);
        }
        groups
    }

    /// Renders entries as `key=value` lines.
    ///
    /// No entries yields an empty string.
    #[must_use]
    pub fn render(entries: Vec<ConfigEntrySource>) -> String {
        Self::group(entries)
            .iter()
            .map(EntryGroup::line)
            .collect()
    }

    /// Renders and parses entries into a single-layer configuration.
    ///
    /// No entries yields [`Config::empty`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntrySyntax`] naming the contributing variables if an
    /// entry carries a value that is not configuration-safe.
    pub fn to_config(entries: Vec<ConfigEntrySource>) -> Result<Config> {
        let groups = Self::group(entries);
        if groups.is_empty() {
            return Ok(Config::empty());
        }
        let text: String = groups.iter().map(EntryGroup::line).collect();
        log::debug!("environment configuration:\n{text}");

        // one line per group, so a line number identifies the variables
        Config::parse_str(&text).map_err(|err| match err {
            Error::ConfigSyntax { line, message } => {
                match line.checked_sub(1).and_then(|i| groups.get(i)) {
                    Some(group) => Error::EntrySyntax {
                        variable: group.variables(),
                        key: group.key().to_string(),
                        message,
                    },
                    None => Error::ConfigSyntax { line, message },
                }
            }
            other => other,
        })
    }
}
