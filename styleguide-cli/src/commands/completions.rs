//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "styleguide";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");

    match shell {
        Shell::Bash => {
            eprintln!("# Run the following command to enable completions:");
            eprintln!(
                "#   styleguide completions bash > ~/.local/share/bash-completion/completions/styleguide"
            );
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(styleguide completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("# Run the following command to enable completions:");
            eprintln!("#   styleguide completions zsh > ~/.zsh/completions/_styleguide");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("# Run the following command to enable completions:");
            eprintln!(
                "#   styleguide completions fish > ~/.config/fish/completions/styleguide.fish"
            );
        }
        Shell::PowerShell => {
            eprintln!("# Run:");
            eprintln!("#   styleguide completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
