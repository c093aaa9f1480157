//! Command to run the list tokenizer on a raw value.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Split a raw list value into items, one per line.
///
/// Syntax errors exit with status 7 and report the character position.
#[derive(Args)]
pub struct TokenizeCommand {
    /// Raw value, e.g. "a, b" or '["a", "b"]'
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

impl TokenizeCommand {
    /// Execute the tokenize command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let tokens = envboot::tokenize(&self.value).map_err(|e| CliError::Config(e.to_string()))?;
        for token in tokens {
            println!("{token}");
        }
        Ok(())
    }
}
