//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use styleguide::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Output serialization error.
    Serialization(String),

    /// Semantic failure (e.g., validation warnings) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., validation warnings)
    /// - 3: Configuration file not found
    /// - 4: Invalid arguments or unsupported configuration format
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration parse error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::ConfigNotFound { .. } => 3,
                LibError::UnsupportedFormat { .. } => 4,
                LibError::Io(_) => 5,
                e if e.is_parse_error() => 7,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Serialization(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Serialization(msg) => write!(f, "Failed to render output: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_for_library_errors() {
        let not_found = CliError::from(LibError::ConfigNotFound {
            path: PathBuf::from("missing.json"),
        });
        assert_eq!(not_found.exit_code(), 3);

        let unsupported = CliError::from(LibError::UnsupportedFormat {
            path: PathBuf::from("config.js"),
            extension: "js".to_string(),
        });
        assert_eq!(unsupported.exit_code(), 4);

        let parse: LibError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(CliError::from(parse).exit_code(), 7);

        let io = CliError::from(LibError::Io(std::io::Error::other("boom")));
        assert_eq!(io.exit_code(), 5);

        let env = CliError::from(LibError::InvalidEnvironment {
            variable: "STYLEGUIDE_CACHE".to_string(),
            value: "maybe".to_string(),
        });
        assert_eq!(env.exit_code(), 6);
    }

    #[test]
    fn test_exit_codes_for_cli_errors() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::Io(std::io::Error::other("x")).exit_code(),
            5
        );
    }

    #[test]
    fn test_display_passes_library_message_through() {
        let err = CliError::from(LibError::ConfigNotFound {
            path: PathBuf::from("missing.json"),
        });
        assert!(err.to_string().contains("not found"));
    }
}
