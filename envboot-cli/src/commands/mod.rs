//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `render`: Print the bootstrapped configuration
//! - `get`: Print one configuration value
//! - `entries`: List the entries resolved from the environment
//! - `tokenize`: Split a raw list value into its items
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod entries;
pub mod get;
pub mod render;
pub mod tokenize;

pub use completions::CompletionsCommand;
pub use entries::EntriesCommand;
pub use get::GetCommand;
pub use render::RenderCommand;
pub use tokenize::TokenizeCommand;
