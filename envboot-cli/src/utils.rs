//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! loading the base configuration and building the bootstrap from the
//! global options.

use crate::error::CliError;
use envboot::config::ConfigLoader;
use envboot::{Bootstrap, Config};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Base configuration file.
    pub config: Option<PathBuf>,

    /// Remoting transport name.
    pub transport: String,

    /// Skip the default-values layer.
    pub no_default_hostname: bool,

    /// Resolve every environment variable.
    pub include_all: bool,
}

/// Load the base configuration named by `--config`.
///
/// Without `--config` the base is empty.
pub fn load_base_config(global: &GlobalOptions) -> Result<Config, CliError> {
    match &global.config {
        Some(path) => {
            log::debug!("loading base configuration from {}", path.display());
            Ok(ConfigLoader::load_file(path)?)
        }
        None => Ok(Config::empty()),
    }
}

/// Build a bootstrap over the process environment from the global options.
pub fn bootstrap(global: &GlobalOptions) -> Bootstrap {
    let bootstrap = Bootstrap::new()
        .with_transport(&global.transport)
        .assign_default_hostname(!global.no_default_hostname);

    if global.include_all {
        bootstrap.include_all()
    } else {
        bootstrap
    }
}

/// Load the base configuration and layer the environment over it.
pub fn bootstrapped_config(global: &GlobalOptions) -> Result<Config, CliError> {
    let base = load_base_config(global)?;
    Ok(bootstrap(global).apply(&base)?)
}
