//! Error types for the styleguide library.
//!
//! This module provides the error hierarchy for configuration loading,
//! using `thiserror` for ergonomic error handling.
//!
//! Only explicit-path loading surfaces these errors. Auto-discovery swallows
//! them and falls back to the built-in defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a styleguide error.
///
/// # Examples
///
/// ```
/// use styleguide::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the styleguide library.
#[derive(Debug, Error)]
pub enum Error {
    /// No file exists at an explicitly requested configuration path.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The explicit configuration path has an extension with no registered parser.
    #[error(
        "unsupported configuration format \"{}\" for {} (supported: .json, .yaml, .yml, .toml)",
        display_extension(extension),
        path.display()
    )]
    UnsupportedFormat {
        /// The offending configuration path.
        path: PathBuf,
        /// The extension, without the leading dot. Empty if the file has none.
        extension: String,
    },

    /// JSON parse error, propagated with the parser's own message.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parse error, propagated with the parser's own message.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error, propagated with the parser's own message.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// The document parsed, but its root is not a mapping.
    #[error("invalid configuration document {}: {reason}", path.display())]
    InvalidDocument {
        /// The file the document was read from.
        path: PathBuf,
        /// Why the document was rejected.
        reason: String,
    },

    /// An environment variable override held an unusable value.
    #[error("invalid value for {variable}: {value:?}")]
    InvalidEnvironment {
        /// The variable name.
        variable: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_extension(extension: &str) -> String {
    if extension.is_empty() {
        "(none)".to_string()
    } else {
        format!(".{extension}")
    }
}

impl Error {
    /// Check if error indicates a missing configuration file.
    ///
    /// # Examples
    ///
    /// ```
    /// use styleguide::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigNotFound { path: PathBuf::from("/nonexistent.json") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// Check if error was raised by one of the document parsers.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::Yaml(_) | Self::Toml(_) | Self::InvalidDocument { .. }
        )
    }
}
