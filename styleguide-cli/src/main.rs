//! Main entry point for the styleguide CLI.
//!
//! This is the command-line interface for inspecting styleguide configuration:
//! - `show`: Print the resolved configuration
//! - `validate`: Report configuration warnings
//! - `defaults`: Print the built-in defaults
//! - `detect`: Report the detected project type
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = styleguide::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
        cwd: cli.cwd,
        logger,
    };

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Defaults(cmd) => cmd.execute(&global),
        cli::Command::Detect(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
