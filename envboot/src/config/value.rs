//! Configuration tree values.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::quoting::{add_quotes, needs_quotes};

/// A node of a configuration tree.
///
/// Scalars are always kept as text; typed accessors on
/// [`Config`](crate::config::Config) convert on demand.
///
/// # Examples
///
/// ```
/// use envboot::config::ConfigValue;
///
/// let value = ConfigValue::from(serde_yaml::from_str::<serde_yaml::Value>("port: 4053").unwrap());
/// assert_eq!(value.get("port"), Some(&ConfigValue::String("4053".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A scalar value.
    String(String),
    /// An ordered list of values.
    List(Vec<ConfigValue>),
    /// A nested object keyed by path segment.
    Object(BTreeMap<String, ConfigValue>),
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::Object(BTreeMap::new())
    }
}

impl ConfigValue {
    /// Looks up a dotted path below this value.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Self> {
        path.split('.').try_fold(self, |node, segment| match node {
            Self::Object(map) => map.get(segment),
            _ => None,
        })
    }

    /// Returns the scalar text, if this is a scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for an object with no keys.
    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(map) if map.is_empty())
    }

    /// Kind name used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Merges `lower` underneath `self`: keys present in `self` win, objects
    /// present in both are merged recursively.
    #[must_use]
    pub fn with_fallback(&self, lower: &Self) -> Self {
        match (self, lower) {
            (Self::Object(high), Self::Object(low)) => {
                let mut merged = low.clone();
                for (key, value) in high {
                    let combined = match low.get(key) {
                        Some(existing) => value.with_fallback(existing),
                        None => value.clone(),
                    };
                    merged.insert(key.clone(), combined);
                }
                Self::Object(merged)
            }
            (high, _) => high.clone(),
        }
    }

    /// Renders the tree as `dotted.key=value` lines, one per leaf.
    ///
    /// The output is accepted by [`parse_config_text`](crate::config::parse_config_text).
    #[must_use]
    pub fn to_config_text(&self) -> String {
        let mut out = String::new();
        self.write_lines("", &mut out);
        out
    }

    fn write_lines(&self, prefix: &str, out: &mut String) {
        match self {
            Self::Object(map) => {
                for (key, value) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    value.write_lines(&path, out);
                }
            }
            leaf => {
                out.push_str(prefix);
                out.push('=');
                out.push_str(&leaf.to_literal());
                out.push('\n');
            }
        }
    }

    fn to_literal(&self) -> String {
        match self {
            Self::String(s) if s.is_empty() || s.trim() != s || needs_quotes(s) => add_quotes(s),
            Self::String(s) => s.clone(),
            Self::List(items) => {
                let items: Vec<String> = items.iter().map(Self::to_literal).collect();
                format!("[{}]", items.join(","))
            }
            // nested objects inside lists are not produced by this crate
            Self::Object(_) => "{}".to_string(),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::String(String::new()),
            Value::Bool(b) => Self::String(b.to_string()),
            Value::Number(n) => Self::String(n.to_string()),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Self::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::String(String::new()),
            Value::Bool(b) => Self::String(b.to_string()),
            Value::Number(n) => Self::String(n.to_string()),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
