//! Command to print the bootstrapped configuration.

use crate::error::CliError;
use crate::utils::{bootstrapped_config, GlobalOptions};
use clap::{Args, ValueEnum};
use envboot::output::OutputFormat;

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
    /// Flattened key=value lines
    Text,
}

impl From<RenderFormat> for OutputFormat {
    fn from(format: RenderFormat) -> Self {
        match format {
            RenderFormat::Yaml => Self::Yaml,
            RenderFormat::Json => Self::Json,
            RenderFormat::Text => Self::Text,
        }
    }
}

/// Bootstrap the base configuration from the environment and print it.
#[derive(Args)]
pub struct RenderCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: RenderFormat,
}

impl RenderCommand {
    /// Execute the render command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = bootstrapped_config(global)?;
        let output = OutputFormat::from(self.format).format(&config.to_value())?;
        print!("{output}");
        Ok(())
    }
}
