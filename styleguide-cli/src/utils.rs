//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including working directory resolution, loader construction and output
//! rendering.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use styleguide::{ConfigLoader, Logger};

/// Global CLI options shared across all commands.
///
/// Verbosity is carried by `logger`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Directory to resolve configuration from.
    pub cwd: Option<PathBuf>,

    /// Logger built from the verbosity flags.
    pub logger: Logger,
}

/// Serialization format for configuration documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Resolve the working directory, using CWD if `--cwd` was not given.
///
/// A relative `--cwd` is taken relative to the current directory.
pub fn resolve_working_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let current = env::current_dir()?;
    let dir = match &global.cwd {
        Some(dir) => current.join(dir),
        None => current,
    };

    if !dir.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }
    Ok(dir)
}

/// Build a configuration loader for the resolved working directory.
///
/// Environment overrides are always enabled on the command line.
pub fn build_loader(global: &GlobalOptions) -> Result<ConfigLoader, CliError> {
    let working_dir = resolve_working_dir(global)?;
    Ok(ConfigLoader::new(working_dir)
        .with_env_overrides(true)
        .with_logger(global.logger))
}

/// Render a value as a document in the requested format.
pub fn render<T: Serialize>(value: &T, format: DocumentFormat) -> Result<String, CliError> {
    let rendered = match format {
        DocumentFormat::Json => serde_json::to_string_pretty(value)?,
        DocumentFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleguide::LogLevel;

    fn global(cwd: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            quiet: true,
            config: None,
            cwd,
            logger: Logger::new(LogLevel::Quiet),
        }
    }

    #[test]
    fn test_resolve_working_dir_defaults_to_current() {
        let dir = resolve_working_dir(&global(None)).unwrap();
        assert_eq!(dir, env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_working_dir_rejects_missing_directory() {
        let missing = env::temp_dir().join("styleguide-definitely-missing-dir");
        let err = resolve_working_dir(&global(Some(missing))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_render_formats() {
        let value = serde_json::json!({ "cache": true });

        let json = render(&value, DocumentFormat::Json).unwrap();
        assert!(json.contains("\"cache\": true"));

        let yaml = render(&value, DocumentFormat::Yaml).unwrap();
        assert_eq!(yaml, "cache: true");
    }
}
