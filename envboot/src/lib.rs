#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # envboot
//!
//! A library for bootstrapping layered cluster configuration from
//! environment variables.
//!
//! Variables carrying the `AKKA__` prefix are translated into configuration
//! paths (`AKKA__CLUSTER__ROLES__0=web` becomes element 0 of
//! `akka.cluster.roles`), and a few legacy aliases (`CLUSTER_IP`,
//! `CLUSTER_PORT`, `CLUSTER_SEEDS`) map onto well-known paths. The result is
//! layered over a caller-supplied base configuration so the environment
//! always wins.
//!
//! ## Core Types
//!
//! - [`Bootstrap`]: Builder that layers the environment over a base config
//! - [`Config`] and [`ConfigValue`]: Layered configuration and its values
//! - [`EnvSnapshot`]: A captured set of environment variables
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use envboot::{Bootstrap, Config, EnvSnapshot};
//!
//! let base = Config::parse_str("akka.loglevel = INFO").unwrap();
//! let env = EnvSnapshot::from_pairs([
//!     ("AKKA__LOGLEVEL", "DEBUG"),
//!     ("CLUSTER_SEEDS", "akka.tcp://Sys@a:4053, akka.tcp://Sys@b:4053"),
//! ]);
//!
//! let config = Bootstrap::new()
//!     .with_environment(env)
//!     .assign_default_hostname(false)
//!     .apply(&base)
//!     .unwrap();
//!
//! assert_eq!(config.get_string("akka.loglevel").unwrap(), "DEBUG");
//! assert_eq!(config.get_string_list("akka.cluster.seed-nodes").unwrap().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod list_parser;
pub mod logging;
pub mod output;
pub mod quoting;

// Re-export key types at crate root for convenience
pub use config::{
    bootstrap_from_environment, config_from_environment, Bootstrap, Config, ConfigValue,
    EnvSnapshot,
};
pub use error::{Error, Result};
pub use list_parser::{tokenize, ListSyntaxError};
pub use logging::{init_logger, LogLevel, Logger};
