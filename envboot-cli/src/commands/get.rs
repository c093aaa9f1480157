//! Command to print a single configuration value.

use crate::error::CliError;
use crate::utils::{bootstrapped_config, GlobalOptions};
use clap::Args;
use envboot::output::OutputFormat;
use envboot::ConfigValue;

/// Print the value at a dotted configuration path.
///
/// Exits with status 1 when the path is absent.
#[derive(Args)]
pub struct GetCommand {
    /// Dotted configuration path (e.g. akka.cluster.seed-nodes)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Require a list and print one item per line
    #[arg(long)]
    pub list: bool,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = bootstrapped_config(global)?;

        if self.list {
            for item in config.get_string_list(&self.path)? {
                println!("{item}");
            }
            return Ok(());
        }

        match config.get_value(&self.path) {
            None => Err(CliError::SemanticFailure(format!(
                "configuration path not found: {}",
                self.path
            ))),
            Some(ConfigValue::String(value)) => {
                println!("{value}");
                Ok(())
            }
            Some(ConfigValue::List(items)) => {
                let rendered = serde_json::to_string(&items).map_err(envboot::Error::from)?;
                println!("{rendered}");
                Ok(())
            }
            Some(object) => {
                print!("{}", OutputFormat::Text.format(&object)?);
                Ok(())
            }
        }
    }
}
