//! Command to print the built-in default configuration.

use crate::error::CliError;
use crate::utils::{render, DocumentFormat, GlobalOptions};
use clap::Args;

/// Print the built-in default configuration.
#[derive(Args)]
pub struct DefaultsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "json", ignore_case = true)]
    pub format: DocumentFormat,
}

impl DefaultsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", render(&styleguide::get_default_config(), self.format)?);
        Ok(())
    }
}
