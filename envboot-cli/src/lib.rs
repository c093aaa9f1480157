//! Library exports for envboot-cli.
//!
//! This module exports the CLI structure and commands so the binary and
//! the benchmarks share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
