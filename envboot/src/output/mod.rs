//! Output formatting for configuration trees.
//!
//! This module renders a merged [`ConfigValue`] as YAML, JSON or the
//! `key=value` configuration text the bootstrap itself consumes.

mod formatters;

use crate::config::ConfigValue;
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for formatting a configuration tree into a textual output format.
pub trait OutputFormatter {
    /// Format the given configuration tree into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, value: &ConfigValue) -> Result<String>;
}

/// Available output formats for configuration trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
    /// Flattened `key=value` lines.
    Text,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Yaml => Box::new(YamlFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Text => Box::new(TextFormatter),
        }
    }

    /// Format `value` in this output format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use envboot::output::OutputFormat;
    /// use envboot::Config;
    ///
    /// let config = Config::parse_str("akka.loglevel = INFO").unwrap();
    /// let text = OutputFormat::Text.format(&config.to_value()).unwrap();
    /// assert_eq!(text, "akka.loglevel=INFO\n");
    /// ```
    pub fn format(&self, value: &ConfigValue) -> Result<String> {
        self.create_formatter().format(value)
    }
}
