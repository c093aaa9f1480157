//! Base configuration file loading.
//!
//! The base configuration is the lowest-priority layer of a bootstrap. It
//! can be written as YAML, JSON or `key=value` configuration text; the
//! format is chosen from the file extension.

use crate::config::layered::Config;
use crate::config::value::ConfigValue;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Supported base configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
    /// `key=value` configuration text (any other extension).
    Text,
}

impl ConfigFormat {
    /// Chooses the format for `path` from its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Loads base configuration files.
///
/// # Examples
///
/// ```no_run
/// use envboot::config::ConfigLoader;
/// use std::path::Path;
///
/// let base = ConfigLoader::load_file(Path::new("app.yaml")).unwrap();
/// println!("{} layer(s)", base.layer_count());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not
    /// valid for the format implied by its extension.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Self::load_str(&contents, ConfigFormat::from_path(path))
    }

    /// Parse configuration contents of a known format.
    ///
    /// # Errors
    ///
    /// Returns an error if `contents` is not valid for `format`, or if a
    /// YAML/JSON document's top level is not a mapping.
    pub fn load_str(contents: &str, format: ConfigFormat) -> Result<Config> {
        let value = match format {
            ConfigFormat::Yaml => {
                if contents.trim().is_empty() {
                    return Ok(Config::empty());
                }
                ConfigValue::from(serde_yaml::from_str::<serde_yaml::Value>(contents)?)
            }
            ConfigFormat::Json => {
                ConfigValue::from(serde_json::from_str::<serde_json::Value>(contents)?)
            }
            ConfigFormat::Text => return Config::parse_str(contents),
        };

        if !matches!(value, ConfigValue::Object(_)) {
            return Err(Error::WrongType {
                path: "<root>".to_string(),
                expected: "object".to_string(),
            });
        }
        Ok(Config::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("app.conf")), ConfigFormat::Text);
        assert_eq!(ConfigFormat::from_path(Path::new("app")), ConfigFormat::Text);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/app.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("app.yaml");
        fs::write(
            &config_path,
            "akka:\n  cluster:\n    seed-nodes: []\n  remote:\n    dot-netty:\n      tcp:\n        port: 4053\n",
        )
        .unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.get_int("akka.remote.dot-netty.tcp.port").unwrap(), 4053);
        assert!(config.get_string_list("akka.cluster.seed-nodes").unwrap().is_empty());
    }

    #[test]
    fn test_load_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("app.json");
        fs::write(&config_path, r#"{"akka": {"loglevel": "INFO"}}"#).unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.get_string("akka.loglevel").unwrap(), "INFO");
    }

    #[test]
    fn test_load_text() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("app.conf");
        fs::write(&config_path, "# base\nakka.loglevel = INFO\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.get_string("akka.loglevel").unwrap(), "INFO");
    }

    #[test]
    fn test_empty_yaml_is_empty_config() {
        assert!(ConfigLoader::load_str("", ConfigFormat::Yaml).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_document_rejected() {
        let result = ConfigLoader::load_str("42", ConfigFormat::Yaml);
        assert!(matches!(result, Err(Error::WrongType { .. })));
    }
}
