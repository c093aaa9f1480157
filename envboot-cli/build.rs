//! Build script for envboot-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("envboot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bootstrap cluster configuration from environment variables")
        .long_about(
            "Layer AKKA__* and CLUSTER_* environment variables over a base configuration file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Base configuration file (YAML, JSON or key=value text)")
                .value_name("PATH")
                .global(true)
                .env("ENVBOOT_CONFIG"),
        )
        .arg(
            Arg::new("transport")
                .long("transport")
                .help("Remoting transport name used in host and port paths")
                .value_name("NAME")
                .global(true)
                .default_value("dot-netty"),
        )
        .arg(
            Arg::new("no-default-hostname")
                .long("no-default-hostname")
                .help("Do not add the default bind address and public host name")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include-all")
                .long("include-all")
                .help("Resolve every environment variable, not only AKKA__ ones")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("render")
                .about("Print the bootstrapped configuration")
                .long_about("Bootstrap the base configuration from the environment and print the merged tree"),
            Command::new("get")
                .about("Print one configuration value")
                .long_about("Print the value at a dotted path; exits 1 when the path is absent"),
            Command::new("entries")
                .about("List the entries resolved from the environment")
                .long_about("Show each resolved variable with its key, index and emitted value"),
            Command::new("tokenize")
                .about("Split a raw list value into its items")
                .long_about("Run the list tokenizer on a value and print one item per line"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("envboot.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
