//! Warning and diagnostic output.
//!
//! Configuration problems are never fatal. They are written to stderr as
//! `[config] Warning: <message>` lines, which downstream tooling matches on.
//! Verbosity comes from the `--verbose`/`--quiet` flags or from
//! `STYLEGUIDE_LOG_MODE`.

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Environment variable selecting the default verbosity.
pub const LOG_MODE_ENV: &str = "STYLEGUIDE_LOG_MODE";

/// Prefix of every configuration warning line.
pub const CONFIG_WARNING_PREFIX: &str = "[config] Warning:";

/// How much is written to stderr.
///
/// ```
/// use styleguide::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>(), Ok(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing but command output.
    Quiet,
    /// Configuration warnings.
    #[default]
    Normal,
    /// Warnings plus diagnostics such as which file was loaded.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Writes configuration warnings and diagnostics to stderr.
///
/// # Examples
///
/// ```
/// use styleguide::{LogLevel, Logger};
///
/// let mut out = Vec::new();
/// Logger::new(LogLevel::Normal)
///     .write_config_warnings(&mut out, &["\"cache\" must be a boolean".to_string()])
///     .unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "[config] Warning: \"cache\" must be a boolean\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Emit every warning in `warnings` on stderr, in order. Suppressed at `Quiet`.
    pub fn config_warnings(&self, warnings: &[String]) {
        if let Err(e) = self.write_config_warnings(&mut io::stderr().lock(), warnings) {
            log::debug!("failed to write configuration warnings: {e}");
        }
    }

    /// Write `warnings` to `out`, one line each, unless the level is `Quiet`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_config_warnings<W: Write>(&self, out: &mut W, warnings: &[String]) -> io::Result<()> {
        if self.level < LogLevel::Normal {
            return Ok(());
        }
        for warning in warnings {
            writeln!(out, "{}", format_config_warning(warning))?;
        }
        Ok(())
    }

    /// Diagnostic line, shown only at `Verbose`.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

/// The line written for a configuration warning.
///
/// ```
/// use styleguide::logging::format_config_warning;
///
/// assert_eq!(format_config_warning("oops"), "[config] Warning: oops");
/// ```
#[must_use]
pub fn format_config_warning(message: &str) -> String {
    format!("{CONFIG_WARNING_PREFIX} {message}")
}

/// Build a logger from the command-line flags, then `STYLEGUIDE_LOG_MODE`.
///
/// `verbose` wins over `quiet`. An unrecognized `STYLEGUIDE_LOG_MODE` is
/// ignored.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}
