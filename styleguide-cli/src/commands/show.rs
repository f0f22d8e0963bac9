//! Show command implementation.
//!
//! Resolves the configuration exactly as a lint run would and prints it.
//! Validation warnings go to stderr.

use crate::error::CliError;
use crate::utils::{build_loader, render, DocumentFormat, GlobalOptions};
use clap::Args;

/// Print the resolved configuration.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "json", ignore_case = true)]
    pub format: DocumentFormat,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = build_loader(global)?.load(global.config.as_deref())?;
        println!("{}", render(&config, self.format)?);
        Ok(())
    }
}
