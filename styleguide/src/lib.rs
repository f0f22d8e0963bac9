#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # styleguide
//!
//! Configuration resolution for the styleguide linter front end.
//!
//! This library discovers a user configuration file (or loads an explicit
//! one), merges it over built-in defaults without discarding unspecified
//! settings, and reports malformed or unrecognized entries as non-fatal
//! warnings.
//!
//! ## Core Types
//!
//! - [`Configuration`]: the resolved configuration
//! - [`ConfigLoader`]: discovery, parsing, merging and validation
//! - [`ProjectType`]: sentinel-file project detection
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use styleguide::config::{ConfigMerger, ConfigValidator, Configuration, RawConfig};
//! use serde_json::json;
//!
//! let defaults = RawConfig::from(&Configuration::default());
//! let user = RawConfig::from_value(json!({
//!     "ignore": ["vendor/**"],
//!     "languages": { "rust": { "enabled": true, "extensions": [".rs"] } }
//! }))
//! .unwrap();
//!
//! let merged = ConfigMerger::merge(&defaults, &user);
//! let warnings = ConfigValidator::validate(&merged);
//! assert_eq!(warnings.len(), 1); // "rust" is not a known language
//!
//! let config = Configuration::from_raw(&merged);
//! assert_eq!(config.ignore.last().map(String::as_str), Some("vendor/**"));
//! assert!(config.languages.contains_key("python"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod project;

// Re-export key types at crate root for convenience
pub use config::{
    get_default_config, load_config, validate_config, ConfigLoader, Configuration, RawConfig,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use project::{detect_project_type, ProjectType};
