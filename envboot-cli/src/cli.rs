//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, EntriesCommand, GetCommand, RenderCommand, TokenizeCommand,
};
use clap::{Parser, Subcommand};
use envboot::config::environment::DEFAULT_TRANSPORT;
use std::path::PathBuf;

/// Command-line tool for bootstrapping cluster configuration from the environment.
#[derive(Parser)]
#[command(name = "envboot")]
#[command(
    version,
    about = "Bootstrap cluster configuration from environment variables",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Base configuration file (YAML, JSON or key=value text)
    #[arg(long, value_name = "PATH", global = true, env = "ENVBOOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remoting transport name used in host and port paths
    #[arg(long, value_name = "NAME", global = true, default_value = DEFAULT_TRANSPORT)]
    pub transport: String,

    /// Do not add the default bind address and public host name
    #[arg(long, global = true)]
    pub no_default_hostname: bool,

    /// Resolve every environment variable, not only AKKA__ ones
    #[arg(long, global = true)]
    pub include_all: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the bootstrapped configuration
    Render(RenderCommand),

    /// Print one configuration value
    Get(GetCommand),

    /// List the entries resolved from the environment
    Entries(EntriesCommand),

    /// Split a raw list value into its items
    Tokenize(TokenizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["envboot", "render"]).unwrap();
        assert_eq!(cli.transport, "dot-netty");
        assert!(!cli.no_default_hostname);
        assert!(!cli.include_all);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "envboot",
            "get",
            "akka.loglevel",
            "--transport",
            "helios",
            "--include-all",
        ])
        .unwrap();
        assert_eq!(cli.transport, "helios");
        assert!(cli.include_all);
        assert!(matches!(cli.command, Command::Get(_)));
    }
}
