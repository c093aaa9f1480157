//! Command to list the entries resolved from the environment.

use crate::error::CliError;
use crate::utils::{bootstrap, GlobalOptions};
use clap::Args;
use envboot::config::ConfigEntryAggregator;

/// List every resolved environment entry in aggregation order.
///
/// Each line holds the variable, the dotted key, the index and the value
/// that is emitted for it, separated by tabs.
#[derive(Args)]
pub struct EntriesCommand {
    /// Print the generated configuration text instead of the entry table
    #[arg(long)]
    pub text: bool,
}

impl EntriesCommand {
    /// Execute the entries command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let entries = bootstrap(global).entries()?;

        if self.text {
            print!("{}", ConfigEntryAggregator::render(entries));
            return Ok(());
        }

        for group in ConfigEntryAggregator::group(entries) {
            for entry in group.members() {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.variable(),
                    group.key(),
                    entry.index(),
                    entry.value()
                );
            }
        }

        Ok(())
    }
}
