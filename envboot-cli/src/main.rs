//! Main entry point for the envboot CLI.
//!
//! This is the command-line interface for bootstrapping cluster
//! configuration from environment variables. It provides commands for:
//! - `render`: Print the bootstrapped configuration
//! - `get`: Print one configuration value
//! - `entries`: List the entries resolved from the environment
//! - `tokenize`: Split a raw list value into its items
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use envboot_cli::cli::{Cli, Command};
use envboot_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics through the stderr logger
    envboot::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        transport: cli.transport,
        no_default_hostname: cli.no_default_hostname,
        include_all: cli.include_all,
    };

    // Execute the command
    let result = match cli.command {
        Command::Render(cmd) => cmd.execute(&global),
        Command::Get(cmd) => cmd.execute(&global),
        Command::Entries(cmd) => cmd.execute(&global),
        Command::Tokenize(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
