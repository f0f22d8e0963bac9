//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DefaultsCommand, DetectCommand, ShowCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting styleguide linter configuration.
#[derive(Parser)]
#[command(name = "styleguide")]
#[command(version, about = "Inspect and validate styleguide configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file instead of searching for one
    #[arg(long, value_name = "PATH", global = true, env = "STYLEGUIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve configuration as if run from this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved configuration
    Show(ShowCommand),

    /// Check a configuration for problems
    Validate(ValidateCommand),

    /// Print the built-in default configuration
    Defaults(DefaultsCommand),

    /// Report which project types the directory looks like
    Detect(DetectCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
