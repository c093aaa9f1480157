//! Immutable layered configuration with first-match-wins lookup.

use std::sync::Arc;

use crate::config::parser::parse_config_text;
use crate::config::value::ConfigValue;
use crate::error::{Error, Result};

/// An ordered chain of configuration layers, highest priority first.
///
/// Layering never mutates: [`Config::with_fallback`] returns a new view that
/// shares the existing layers. A `Config` is `Send + Sync` and can be shared
/// freely once built.
///
/// # Examples
///
/// ```
/// use envboot::config::Config;
///
/// let env = Config::parse_str("akka.remote.dot-netty.tcp.port = 4053").unwrap();
/// let base = Config::parse_str("akka.remote.dot-netty.tcp.port = 0\nakka.loglevel = INFO").unwrap();
///
/// let config = env.with_fallback(&base);
/// assert_eq!(config.get_int("akka.remote.dot-netty.tcp.port").unwrap(), 4053);
/// assert_eq!(config.get_string("akka.loglevel").unwrap(), "INFO");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    layers: Vec<Arc<ConfigValue>>,
}

impl Config {
    /// A configuration with no layers; every path is absent.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a single-layer configuration from a tree.
    ///
    /// An empty object yields [`Config::empty`].
    #[must_use]
    pub fn from_value(value: ConfigValue) -> Self {
        if value.is_empty_object() {
            return Self::empty();
        }
        Self {
            layers: vec![Arc::new(value)],
        }
    }

    /// Parses `key=value` configuration text into a single-layer configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigSyntax`] if the text is malformed.
    pub fn parse_str(text: &str) -> Result<Self> {
        Ok(Self::from_value(parse_config_text(text)?))
    }

    /// Returns a new configuration where `fallback`'s layers sit below this
    /// configuration's layers.
    #[must_use]
    pub fn with_fallback(&self, fallback: &Config) -> Config {
        let mut layers = self.layers.clone();
        layers.extend(fallback.layers.iter().cloned());
        Config { layers }
    }

    /// Returns true if no layer holds any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty_object())
    }

    /// Number of layers in the chain.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if `path` resolves to a value.
    ///
    /// A path running below a scalar or list is absent even if a lower layer
    /// defines it, as in [`Config::to_value`].
    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        !self.candidates(path).is_empty()
    }

    /// Looks up `path`, returning the value from the first layer defining it.
    ///
    /// Object values are merged with the objects lower layers hold at the
    /// same path, so `get_value("akka.remote")` sees every layer's keys. The
    /// answer always matches looking `path` up in [`Config::to_value`].
    #[must_use]
    pub fn get_value(&self, path: &str) -> Option<ConfigValue> {
        let candidates = self.candidates(path);
        let (first, rest) = candidates.split_first()?;
        Some(
            rest.iter()
                .fold((*first).clone(), |merged, lower| merged.with_fallback(lower)),
        )
    }

    /// Returns the scalar at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] if absent or [`Error::WrongType`] if the
    /// value is not a scalar.
    pub fn get_string(&self, path: &str) -> Result<String> {
        match self.require(path)? {
            ConfigValue::String(s) => Ok(s),
            _ => Err(wrong_type(path, "string")),
        }
    }

    /// Returns the scalar at `path` parsed as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] if absent or [`Error::WrongType`] if the
    /// value is not an integer.
    pub fn get_int(&self, path: &str) -> Result<i64> {
        self.get_string(path)?
            .trim()
            .parse()
            .map_err(|_| wrong_type(path, "integer"))
    }

    /// Returns the list of scalars at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] if absent or [`Error::WrongType`] if the
    /// value is not a list of scalars.
    pub fn get_string_list(&self, path: &str) -> Result<Vec<String>> {
        match self.require(path)? {
            ConfigValue::List(items) => items
                .into_iter()
                .map(|item| match item {
                    ConfigValue::String(s) => Ok(s),
                    _ => Err(wrong_type(path, "list of strings")),
                })
                .collect(),
            _ => Err(wrong_type(path, "list of strings")),
        }
    }

    /// Collapses every layer into a single tree.
    #[must_use]
    pub fn to_value(&self) -> ConfigValue {
        self.layers
            .iter()
            .fold(ConfigValue::default(), |merged, layer| {
                merged.with_fallback(layer)
            })
    }

    /// Values each layer holds at `path`, highest first, following the
    /// [`ConfigValue::with_fallback`] rule: below an object, lower scalars
    /// are ignored; below a scalar, nothing is visible.
    fn candidates(&self, path: &str) -> Vec<&ConfigValue> {
        let mut nodes: Vec<&ConfigValue> = self.layers.iter().map(|layer| &**layer).collect();
        for segment in path.split('.') {
            if !matches!(nodes.first(), Some(ConfigValue::Object(_))) {
                return Vec::new();
            }
            nodes = nodes
                .into_iter()
                .filter_map(|node| match node {
                    ConfigValue::Object(map) => map.get(segment),
                    _ => None,
                })
                .collect();
        }
        nodes
    }

    fn require(&self, path: &str) -> Result<ConfigValue> {
        self.get_value(path).ok_or_else(|| Error::Missing {
            path: path.to_string(),
        })
    }
}

fn wrong_type(path: &str, expected: &str) -> Error {
    Error::WrongType {
        path: path.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(text: &str) -> Config {
        Config::parse_str(text).unwrap()
    }

    #[test]
    fn test_empty_config() {
        let empty = Config::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.layer_count(), 0);
        assert!(!empty.has_path("akka"));
        assert!(matches!(empty.get_string("akka"), Err(Error::Missing { .. })));
    }

    #[test]
    fn test_empty_text_is_empty_config() {
        assert_eq!(config("").layer_count(), 0);
    }

    #[test]
    fn test_first_layer_wins() {
        let high = config("a.b = high");
        let mid = config("a.b = mid\na.c = mid");
        let low = config("a.b = low\na.c = low\na.d = low");

        let chain = high.with_fallback(&mid).with_fallback(&low);
        assert_eq!(chain.layer_count(), 3);
        assert_eq!(chain.get_string("a.b").unwrap(), "high");
        assert_eq!(chain.get_string("a.c").unwrap(), "mid");
        assert_eq!(chain.get_string("a.d").unwrap(), "low");
    }

    #[test]
    fn test_with_fallback_does_not_mutate() {
        let high = config("a = 1");
        let low = config("b = 2");
        let _chain = high.with_fallback(&low);
        assert!(!high.has_path("b"));
        assert!(!low.has_path("a"));
    }

    #[test]
    fn test_get_value_merges_objects_across_layers() {
        let chain = config("a.b = 1").with_fallback(&config("a.c = 2"));
        let ConfigValue::Object(map) = chain.get_value("a").unwrap() else {
            panic!("expected object");
        };
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_typed_accessors() {
        let cfg = config("port = 8000\nname = node\nseeds = [\"a\", \"b\"]\nempty = []");
        assert_eq!(cfg.get_int("port").unwrap(), 8000);
        assert!(matches!(cfg.get_int("name"), Err(Error::WrongType { .. })));
        assert_eq!(cfg.get_string_list("seeds").unwrap(), vec!["a", "b"]);
        assert!(cfg.has_path("empty"));
        assert!(cfg.get_string_list("empty").unwrap().is_empty());
        assert!(matches!(
            cfg.get_string_list("name"),
            Err(Error::WrongType { .. })
        ));
    }

    #[test]
    fn test_to_value_collapses_layers() {
        let chain = config("a.b = 1").with_fallback(&config("a.b = 2\na.c = 3"));
        let merged = Config::from_value(chain.to_value());
        assert_eq!(merged.layer_count(), 1);
        assert_eq!(merged.get_string("a.b").unwrap(), "1");
        assert_eq!(merged.get_string("a.c").unwrap(), "3");
    }

    #[test]
    fn test_scalar_hides_lower_object() {
        let chain = config("a.b = shallow").with_fallback(&config("a.b.c = 1\na.d = 2"));

        assert!(!chain.has_path("a.b.c"));
        assert!(matches!(chain.get_string("a.b.c"), Err(Error::Missing { .. })));
        assert_eq!(chain.get_string("a.b").unwrap(), "shallow");
        assert_eq!(chain.get_string("a.d").unwrap(), "2");

        let whole = chain.to_value();
        assert_eq!(whole.get("a.b.c"), None);
        assert_eq!(chain.get_value("a"), whole.get("a").cloned());
        assert_eq!(chain.get_value("a").unwrap().get("b.c"), None);
    }

    #[test]
    fn test_object_above_scalar_merges_lowest_layer() {
        let high = config("a.b.c = 1");
        let mid = config("a.b = scalar");
        let low = config("a.b.d = 2");
        let chain = high.with_fallback(&mid).with_fallback(&low);

        let whole = chain.to_value();
        assert_eq!(chain.get_value("a.b"), whole.get("a.b").cloned());
        assert!(chain.has_path("a.b.d"));
        assert_eq!(chain.get_string("a.b.d").unwrap(), "2");
    }

    #[test]
    fn test_config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }
}
