//! Environment variable handling for configuration overrides.
//!
//! This module captures the process environment as an [`EnvSnapshot`] and
//! resolves `AKKA__*` variables (plus a few legacy `CLUSTER_*` names) into
//! [`ConfigEntrySource`]s.
//!
//! # Naming convention
//!
//! | Variable | Key |
//! |---|---|
//! | `AKKA__REMOTE__DOT_NETTY__TCP__PORT` | `akka.remote.dot-netty.tcp.port` |
//! | `AKKA__CLUSTER__ROLES__0`, `AKKA__CLUSTER__ROLES__1` | `akka.cluster.roles` (list) |
//! | `CLUSTER_IP` | `akka.remote.<transport>.tcp.public-hostname` |
//! | `CLUSTER_PORT` | `akka.remote.<transport>.tcp.port` |
//! | `CLUSTER_SEEDS` | `akka.cluster.seed-nodes` (list) |

use std::env;
use std::fmt;
use std::sync::Arc;

use crate::config::entry::{ConfigEntrySource, NODE_SEPARATOR};
use crate::error::{Error, Result};
use crate::list_parser::{tokenize, ListSyntaxError};
use crate::quoting::{add_quotes, add_quotes_if_needed};

/// Reserved variable-name prefix for configuration overrides.
pub const RESERVED_PREFIX: &str = "AKKA__";

/// Remoting transport used in legacy alias paths unless overridden.
pub const DEFAULT_TRANSPORT: &str = "dot-netty";

/// An immutable copy of environment variable name/value pairs.
///
/// # Examples
///
/// ```
/// use envboot::config::EnvSnapshot;
///
/// let snapshot = EnvSnapshot::from_pairs([("CLUSTER_PORT", "4053")]);
/// assert_eq!(snapshot.get("CLUSTER_PORT"), Some("4053"));
/// assert_eq!(snapshot.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Reads the current process environment once, sorted by name.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        let mut vars: Vec<(String, String)> = env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        vars.sort();
        Self { vars }
    }

    /// Builds a snapshot from explicit pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value of `name`; the last occurrence wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over name/value pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// A flat, non-hierarchical variable name mapped onto a configuration path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyAlias {
    /// Variable name, matched case-insensitively as a prefix.
    pub name: &'static str,
    /// Dotted configuration path the name stands for.
    pub path: String,
    /// Whether the un-indexed variable holds a list.
    pub is_list: bool,
}

impl LegacyAlias {
    /// The built-in alias table for the given remoting transport.
    #[must_use]
    pub fn defaults(transport: &str) -> Vec<Self> {
        vec![
            Self {
                name: "CLUSTER_IP",
                path: format!("akka.remote.{transport}.tcp.public-hostname"),
                is_list: false,
            },
            Self {
                name: "CLUSTER_PORT",
                path: format!("akka.remote.{transport}.tcp.port"),
                is_list: false,
            },
            Self {
                name: "CLUSTER_SEEDS",
                path: "akka.cluster.seed-nodes".to_string(),
                is_list: true,
            },
        ]
    }

    /// Returns the part of `variable` after this alias, if it matches.
    ///
    /// The remainder must be empty or start a new hierarchy level.
    fn strip_from<'a>(&self, variable: &'a str) -> Option<&'a str> {
        let rest = strip_prefix_ignore_case(variable, self.name)?;
        (rest.is_empty() || rest.starts_with(NODE_SEPARATOR)).then_some(rest)
    }

    /// The alias path spelled as a reserved-prefix variable name.
    fn as_variable_name(&self) -> String {
        self.path
            .to_uppercase()
            .replace('.', NODE_SEPARATOR)
            .replace('-', "_")
    }
}

/// Decides which variables other than legacy aliases are resolved.
///
/// Legacy aliases (`CLUSTER_IP`, `CLUSTER_PORT`, `CLUSTER_SEEDS` and their
/// `__` extensions) never pass through this rule: they are always resolved,
/// whatever variant is chosen. To drop them, replace the alias table with
/// [`KeyPathResolver::with_aliases`].
#[derive(Clone, Default)]
pub enum Inclusion {
    /// Only names starting with [`RESERVED_PREFIX`], in any case.
    #[default]
    ReservedPrefix,
    /// Every variable.
    All,
    /// A caller-supplied predicate over the variable name.
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Inclusion {
    /// Returns true if `variable` should be resolved. Not consulted for
    /// legacy aliases.
    #[must_use]
    pub fn includes(&self, variable: &str) -> bool {
        match self {
            Self::ReservedPrefix => strip_prefix_ignore_case(variable, RESERVED_PREFIX).is_some(),
            Self::All => true,
            Self::Custom(predicate) => predicate(variable),
        }
    }
}

impl fmt::Debug for Inclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedPrefix => write!(f, "ReservedPrefix"),
            Self::All => write!(f, "All"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Resolves environment variables into configuration entries.
///
/// # Examples
///
/// ```
/// use envboot::config::{EnvSnapshot, KeyPathResolver};
///
/// let resolver = KeyPathResolver::new("dot-netty");
/// let snapshot = EnvSnapshot::from_pairs([
///     ("CLUSTER_SEEDS", "akka.tcp://Sys@a:4053, akka.tcp://Sys@b:4053"),
///     ("PATH", "/usr/bin"),
/// ]);
///
/// let entries = resolver.resolve_all(&snapshot).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].key(), "akka.cluster.seed-nodes");
/// assert_eq!(entries[0].value(), r#"["akka.tcp://Sys@a:4053","akka.tcp://Sys@b:4053"]"#);
/// ```
#[derive(Debug, Clone)]
pub struct KeyPathResolver {
    aliases: Vec<LegacyAlias>,
    inclusion: Inclusion,
}

impl KeyPathResolver {
    /// Creates a resolver with the default alias table and inclusion rule.
    #[must_use]
    pub fn new(transport: &str) -> Self {
        Self {
            aliases: LegacyAlias::defaults(transport),
            inclusion: Inclusion::default(),
        }
    }

    /// Replaces the inclusion rule.
    #[must_use]
    pub fn with_inclusion(mut self, inclusion: Inclusion) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// Replaces the alias table; an empty table disables legacy aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<LegacyAlias>) -> Self {
        self.aliases = aliases;
        self
    }

    /// The alias table in use.
    #[must_use]
    pub fn aliases(&self) -> &[LegacyAlias] {
        &self.aliases
    }

    /// Resolves every relevant variable of the snapshot, in snapshot order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListSyntax`] for the first list variable with
    /// malformed syntax; no partial result is returned.
    pub fn resolve_all(&self, snapshot: &EnvSnapshot) -> Result<Vec<ConfigEntrySource>> {
        let mut entries = Vec::new();
        for (name, value) in snapshot.iter() {
            if let Some(entry) = self.resolve(name, value)? {
                log::debug!(
                    "{name} -> {}[{}] = {}",
                    entry.key(),
                    entry.index(),
                    entry.value()
                );
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Resolves one variable. Returns `Ok(None)` for ignored variables and
    /// for values that are empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListSyntax`] if `variable` is an un-indexed list alias
    /// and `value` is not a well-formed list.
    pub fn resolve(&self, variable: &str, value: &str) -> Result<Option<ConfigEntrySource>> {
        let mut name = variable.to_string();
        let mut is_list = false;

        if let Some((alias, rest)) = self
            .aliases
            .iter()
            .find_map(|alias| alias.strip_from(variable).map(|rest| (alias, rest)))
        {
            is_list = alias.is_list && rest.is_empty();
            name = format!("{}{rest}", alias.as_variable_name());
        } else if !self.inclusion.includes(variable) {
            return Ok(None);
        }

        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        let value = if is_list {
            list_literal(variable, value)?
        } else {
            add_quotes_if_needed(value)
        };

        Ok(ConfigEntrySource::from_variable(&name, value).map(|entry| entry.with_variable(variable)))
    }
}

/// Turns a raw list value into a bracketed list of quoted strings.
///
/// A value that tokenizes to a single item is tokenized once more, so a
/// whole list wrapped in quotes (`"a, b"`) still splits.
fn list_literal(variable: &str, value: &str) -> Result<String> {
    let mut items = tokenize(value).map_err(|e| list_error(variable, value, e))?;
    if items.len() == 1 {
        let single = items.remove(0);
        items = tokenize(&single).map_err(|e| list_error(variable, &single, e))?;
    }

    let quoted: Vec<String> = items.iter().map(|item| add_quotes(item)).collect();
    Ok(format!("[{}]", quoted.join(",")))
}

fn list_error(variable: &str, value: &str, err: ListSyntaxError) -> Error {
    Error::ListSyntax {
        variable: variable.to_string(),
        value: value.to_string(),
        position: err.position,
        message: err.message,
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
