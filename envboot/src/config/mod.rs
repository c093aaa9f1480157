//! Configuration system for envboot.
//!
//! This module turns process environment variables into a layered
//! configuration, with support for:
//! - `AKKA__*` variables mapped onto nested keys
//! - Indexed variables (`…__0`, `…__1`) collected into lists
//! - Legacy `CLUSTER_IP`, `CLUSTER_PORT` and `CLUSTER_SEEDS` aliases
//! - Base configuration files in YAML, JSON or `key=value` text
//!
//! # Configuration Precedence
//!
//! Lookup walks the layers in this order (highest to lowest):
//!
//! 1. Environment variables
//! 2. Default values (bind address, public host name)
//! 3. Base configuration supplied by the caller
//!
//! # Examples
//!
//! Bootstrapping from an explicit environment snapshot:
//!
//! ```
//! use envboot::config::{Bootstrap, Config, EnvSnapshot};
//!
//! let env = EnvSnapshot::from_pairs([
//!     ("AKKA__CLUSTER__SEED_NODES__0", "akka.tcp://Sys@a:4053"),
//!     ("AKKA__CLUSTER__SEED_NODES__1", "akka.tcp://Sys@b:4053"),
//! ]);
//!
//! let config = Bootstrap::new()
//!     .with_environment(env)
//!     .assign_default_hostname(false)
//!     .apply(&Config::empty())
//!     .unwrap();
//!
//! assert_eq!(
//!     config.get_string_list("akka.cluster.seed-nodes").unwrap(),
//!     vec!["akka.tcp://Sys@a:4053", "akka.tcp://Sys@b:4053"]
//! );
//! ```
//!
//! Loading a base file and bootstrapping from the process environment:
//!
//! ```no_run
//! use envboot::config::{bootstrap_from_environment, ConfigLoader};
//! use std::path::Path;
//!
//! let base = ConfigLoader::load_file(Path::new("app.yaml")).unwrap();
//! let config = bootstrap_from_environment(&base).unwrap();
//! ```

pub mod builder;
pub mod entry;
pub mod environment;
pub mod layered;
pub mod loader;
pub mod merger;
pub mod parser;
pub mod value;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::{bootstrap_from_environment, config_from_environment, Bootstrap};
pub use entry::ConfigEntrySource;
pub use environment::{EnvSnapshot, Inclusion, KeyPathResolver, LegacyAlias};
pub use layered::Config;
pub use loader::{ConfigFormat, ConfigLoader};
pub use merger::{ConfigEntryAggregator, EntryGroup};
pub use parser::parse_config_text;
pub use value::ConfigValue;
