//! Command to validate a styleguide configuration.

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use styleguide::logging::format_config_warning;

/// Check a configuration for problems.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to --config, then discovery)
    #[arg(value_name = "CONFIG_PATH")]
    pub path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let explicit = self.path.or_else(|| global.config.clone());
        let resolved = build_loader(global)?.resolve(explicit.as_deref())?;

        if resolved.source.is_none() {
            global
                .logger
                .debug("No configuration file found, validating built-in defaults");
        }

        if resolved.warnings.is_empty() {
            println!("Configuration is valid");
            return Ok(());
        }

        // printed even with --quiet
        for warning in &resolved.warnings {
            eprintln!("{}", format_config_warning(warning));
        }

        Err(CliError::SemanticFailure(format!(
            "Configuration has {} warning(s)",
            resolved.warnings.len()
        )))
    }
}
