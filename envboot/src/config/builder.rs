//! Bootstrap entry point: layers environment overrides over a base config.

use crate::config::entry::ConfigEntrySource;
use crate::config::environment::{EnvSnapshot, Inclusion, KeyPathResolver, DEFAULT_TRANSPORT};
use crate::config::layered::Config;
use crate::config::merger::ConfigEntryAggregator;
use crate::config::value::ConfigValue;
use crate::error::Result;
use crate::quoting::add_quotes;

/// Host name used when neither an override nor the environment provides one.
pub const FALLBACK_HOSTNAME: &str = "localhost";

/// Builder for bootstrapping a configuration from environment variables.
///
/// The resulting configuration has three layers, highest priority first:
///
/// 1. Environment-derived entries (`AKKA__*`, `CLUSTER_*`)
/// 2. Default values (bind address and public host name), if enabled
/// 3. The caller's base configuration
///
/// # Examples
///
/// ```
/// use envboot::config::{Bootstrap, Config, EnvSnapshot};
///
/// let base = Config::parse_str("akka.remote.dot-netty.tcp.port = 0").unwrap();
/// let env = EnvSnapshot::from_pairs([
///     ("CLUSTER_PORT", "4053"),
///     ("CLUSTER_SEEDS", "akka.tcp://Sys@seed:4053"),
/// ]);
///
/// let config = Bootstrap::new()
///     .with_environment(env)
///     .with_default_hostname("node-1")
///     .apply(&base)
///     .unwrap();
///
/// assert_eq!(config.get_int("akka.remote.dot-netty.tcp.port").unwrap(), 4053);
/// assert_eq!(config.get_string("akka.remote.dot-netty.tcp.public-hostname").unwrap(), "node-1");
/// assert_eq!(
///     config.get_string_list("akka.cluster.seed-nodes").unwrap(),
///     vec!["akka.tcp://Sys@seed:4053"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap {
    environment: Option<EnvSnapshot>,
    transport: String,
    assign_default_hostname: bool,
    default_hostname: Option<String>,
    inclusion: Inclusion,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    /// Create a builder that reads the process environment and assigns
    /// default host names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: None,
            transport: DEFAULT_TRANSPORT.to_string(),
            assign_default_hostname: true,
            default_hostname: None,
            inclusion: Inclusion::default(),
        }
    }

    /// Use `snapshot` instead of reading the process environment.
    #[must_use]
    pub fn with_environment(mut self, snapshot: EnvSnapshot) -> Self {
        self.environment = Some(snapshot);
        self
    }

    /// Set the remoting transport name used in alias and default paths.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = transport.into();
        self
    }

    /// Enable or disable the default-values layer.
    #[must_use]
    pub fn assign_default_hostname(mut self, enabled: bool) -> Self {
        self.assign_default_hostname = enabled;
        self
    }

    /// Use `hostname` as the default public host name.
    #[must_use]
    pub fn with_default_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.default_hostname = Some(hostname.into());
        self
    }

    /// Resolve every variable, not only reserved-prefix ones.
    #[must_use]
    pub fn include_all(self) -> Self {
        self.with_inclusion(Inclusion::All)
    }

    /// Replace the rule deciding which variables are resolved.
    #[must_use]
    pub fn with_inclusion(mut self, inclusion: Inclusion) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// The resolver this builder is configured with.
    #[must_use]
    pub fn resolver(&self) -> KeyPathResolver {
        KeyPathResolver::new(&self.transport).with_inclusion(self.inclusion.clone())
    }

    /// Resolve the environment into entries without building a config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListSyntax`](crate::Error::ListSyntax) for a
    /// malformed list variable.
    pub fn entries(&self) -> Result<Vec<ConfigEntrySource>> {
        self.resolver().resolve_all(&self.snapshot())
    }

    /// Build the environment-derived layer on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListSyntax`](crate::Error::ListSyntax) for a
    /// malformed list variable.
    pub fn environment_config(&self) -> Result<Config> {
        ConfigEntryAggregator::to_config(self.entries()?)
    }

    /// Layer the environment (and default values) over `base`.
    ///
    /// The environment is read once; `base` is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListSyntax`](crate::Error::ListSyntax) for a
    /// malformed list variable. Nothing is returned partially.
    pub fn apply(&self, base: &Config) -> Result<Config> {
        let snapshot = self.snapshot();
        let entries = self.resolver().resolve_all(&snapshot)?;
        let mut config = ConfigEntryAggregator::to_config(entries)?;

        if self.assign_default_hostname {
            config = config.with_fallback(&self.default_values(&snapshot)?);
        }

        let config = config.with_fallback(base);
        self.log_summary(&config);
        Ok(config)
    }

    /// The default-values layer: bind on all interfaces and advertise the
    /// machine's host name.
    fn default_values(&self, snapshot: &EnvSnapshot) -> Result<Config> {
        let hostname = self
            .default_hostname
            .clone()
            .or_else(|| machine_hostname(snapshot))
            .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string());

        let prefix = format!("akka.remote.{}.tcp", self.transport);
        Config::parse_str(&format!(
            "{prefix}.hostname=0.0.0.0\n{prefix}.public-hostname={}\n",
            add_quotes(&hostname)
        ))
    }

    fn snapshot(&self) -> EnvSnapshot {
        self.environment
            .clone()
            .unwrap_or_else(EnvSnapshot::from_process)
    }

    fn log_summary(&self, config: &Config) {
        let prefix = format!("akka.remote.{}.tcp", self.transport);
        let describe = |path: &str| match config.get_value(path) {
            Some(ConfigValue::String(s)) => s,
            Some(other) => other.kind().to_string(),
            None => "<unset>".to_string(),
        };
        let seeds = config
            .get_string_list("akka.cluster.seed-nodes")
            .unwrap_or_default()
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect::<Vec<_>>()
            .join(",");

        log::info!("IP={}", describe(&format!("{prefix}.public-hostname")));
        log::info!("PORT={}", describe(&format!("{prefix}.port")));
        log::info!("SEEDS=[{seeds}]");
    }
}

fn machine_hostname(snapshot: &EnvSnapshot) -> Option<String> {
    ["HOSTNAME", "COMPUTERNAME"]
        .iter()
        .filter_map(|name| snapshot.get(name))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Bootstrap `base` from the process environment with default host names.
///
/// # Errors
///
/// Returns [`Error::ListSyntax`](crate::Error::ListSyntax) for a malformed
/// list variable.
///
/// # Examples
///
/// ```no_run
/// use envboot::config::{bootstrap_from_environment, Config};
///
/// let config = bootstrap_from_environment(&Config::empty()).unwrap();
/// println!("{:?}", config.get_string("akka.remote.dot-netty.tcp.public-hostname"));
/// ```
pub fn bootstrap_from_environment(base: &Config) -> Result<Config> {
    Bootstrap::new().apply(base)
}

/// Build only the environment-derived layer from `snapshot`.
///
/// Returns [`Config::empty`] when no variable is relevant.
///
/// # Errors
///
/// Returns [`Error::ListSyntax`](crate::Error::ListSyntax) for a malformed
/// list variable.
pub fn config_from_environment(snapshot: &EnvSnapshot) -> Result<Config> {
    Bootstrap::new()
        .with_environment(snapshot.clone())
        .environment_config()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_precedence_env_over_defaults_over_base() {
        let base = Config::parse_str(
            "akka.remote.dot-netty.tcp.hostname = base\n\
             akka.remote.dot-netty.tcp.public-hostname = base\n\
             akka.loglevel = WARNING\n",
        )
        .unwrap();

        let config = Bootstrap::new()
            .with_environment(env(&[("CLUSTER_IP", "10.0.0.1")]))
            .with_default_hostname("machine")
            .apply(&base)
            .unwrap();

        assert_eq!(config.layer_count(), 3);
        assert_eq!(
            config.get_string("akka.remote.dot-netty.tcp.public-hostname").unwrap(),
            "10.0.0.1"
        );
        assert_eq!(
            config.get_string("akka.remote.dot-netty.tcp.hostname").unwrap(),
            "0.0.0.0"
        );
        assert_eq!(config.get_string("akka.loglevel").unwrap(), "WARNING");
    }

    #[test]
    fn test_without_default_hostname() {
        let base = Config::empty();
        let config = Bootstrap::new()
            .with_environment(EnvSnapshot::default())
            .assign_default_hostname(false)
            .apply(&base)
            .unwrap();
        assert!(config.is_empty());
        assert!(!config.has_path("akka.remote.dot-netty.tcp.public-hostname"));
    }

    #[test]
    fn test_default_hostname_from_environment() {
        let config = Bootstrap::new()
            .with_environment(env(&[("HOSTNAME", "container-42")]))
            .apply(&Config::empty())
            .unwrap();
        assert_eq!(
            config.get_string("akka.remote.dot-netty.tcp.public-hostname").unwrap(),
            "container-42"
        );
    }

    #[test]
    fn test_default_hostname_fallback() {
        let config = Bootstrap::new()
            .with_environment(EnvSnapshot::default())
            .apply(&Config::empty())
            .unwrap();
        assert_eq!(
            config.get_string("akka.remote.dot-netty.tcp.public-hostname").unwrap(),
            FALLBACK_HOSTNAME
        );
    }

    #[test]
    fn test_transport_changes_paths() {
        let config = Bootstrap::new()
            .with_environment(env(&[("CLUSTER_PORT", "9000")]))
            .with_transport("helios")
            .with_default_hostname("h")
            .apply(&Config::empty())
            .unwrap();
        assert_eq!(config.get_int("akka.remote.helios.tcp.port").unwrap(), 9000);
        assert!(config.has_path("akka.remote.helios.tcp.public-hostname"));
        assert!(!config.has_path("akka.remote.dot-netty"));
    }

    #[test]
    fn test_base_is_not_modified() {
        let base = Config::parse_str("akka.loglevel = INFO").unwrap();
        let _ = Bootstrap::new()
            .with_environment(env(&[("AKKA__LOGLEVEL", "DEBUG")]))
            .apply(&base)
            .unwrap();
        assert_eq!(base.get_string("akka.loglevel").unwrap(), "INFO");
        assert_eq!(base.layer_count(), 1);
    }

    #[test]
    fn test_syntax_error_aborts() {
        let result = Bootstrap::new()
            .with_environment(env(&[("CLUSTER_SEEDS", "[a,]")]))
            .apply(&Config::empty());
        assert!(matches!(result, Err(crate::Error::ListSyntax { .. })));
    }

    #[test]
    fn test_config_from_environment_empty() {
        let config = config_from_environment(&env(&[("PATH", "/bin")])).unwrap();
        assert!(config.is_empty());
        assert_eq!(config.layer_count(), 0);
    }
}
