//! Output formatter implementations.

use crate::config::ConfigValue;
use crate::Result;

use super::OutputFormatter;

/// YAML formatter.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, value: &ConfigValue) -> Result<String> {
        Ok(serde_yaml::to_string(value)?)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, value: &ConfigValue) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

/// Configuration text formatter.
///
/// The output parses back into the same tree.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, value: &ConfigValue) -> Result<String> {
        Ok(value.to_config_text())
    }
}
