//! Detect command implementation.
//!
//! Reports which project types the working directory looks like, based on
//! the presence of sentinel files.

use crate::error::CliError;
use crate::utils::{resolve_working_dir, GlobalOptions};
use clap::{Args, ValueEnum};
use styleguide::ProjectType;

/// Report which project types the directory looks like.
#[derive(Args)]
pub struct DetectCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: DetectFormat,
}

/// Output format for the detect command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DetectFormat {
    /// One `name: yes|no` line per project type
    Human,
    /// JSON object with camelCase flags
    Json,
}

impl DetectCommand {
    /// Execute the detect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = resolve_working_dir(global)?;
        global
            .logger
            .debug(&format!("Detecting project type in {}", dir.display()));

        let detected = ProjectType::detect(&dir);
        match self.format {
            DetectFormat::Json => println!("{}", serde_json::to_string_pretty(&detected)?),
            DetectFormat::Human => print!("{}", format_human(&detected)),
        }
        Ok(())
    }
}

fn format_human(detected: &ProjectType) -> String {
    detected
        .flags()
        .iter()
        .map(|(name, present)| format!("{name}: {}\n", if *present { "yes" } else { "no" }))
        .collect()
}
