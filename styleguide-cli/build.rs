//! Build script for styleguide-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("styleguide")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and validate styleguide configuration")
        .long_about(
            "Command-line tool for resolving, inspecting and validating the configuration \
             used by the styleguide linter front end",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file instead of searching for one")
                .value_name("PATH")
                .global(true)
                .env("STYLEGUIDE_CONFIG"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Resolve configuration as if run from this directory")
                .value_name("DIR")
                .global(true),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print the resolved configuration")
                .long_about("Discover or load a configuration, merge it over the defaults and print it"),
            Command::new("validate")
                .about("Check a configuration for problems")
                .long_about("Print every validation warning and exit with status 1 if there are any"),
            Command::new("defaults")
                .about("Print the built-in default configuration")
                .long_about("Print the configuration used when no configuration file is found"),
            Command::new("detect")
                .about("Report which project types the directory looks like")
                .long_about("Check the directory for sentinel files such as package.json or main.tf"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("styleguide.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
