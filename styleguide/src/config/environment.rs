//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `STYLEGUIDE_*` environment variables that
//! override values from the configuration file. Overrides are applied to the
//! merged document, before validation.

use crate::config::schema::{RawConfig, CACHE_KEY, CACHE_LOCATION_KEY, IGNORE_KEY};
use crate::error::{Error, Result};
use serde_json::Value;
use std::env;

/// Overrides the `cache` flag.
pub const ENV_CACHE: &str = "STYLEGUIDE_CACHE";
/// Overrides `cacheLocation`.
pub const ENV_CACHE_LOCATION: &str = "STYLEGUIDE_CACHE_LOCATION";
/// Comma-separated patterns appended to `ignore`.
pub const ENV_IGNORE: &str = "STYLEGUIDE_IGNORE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use styleguide::config::{EnvironmentConfig, RawConfig};
///
/// let mut doc = RawConfig::new();
/// EnvironmentConfig::apply_overrides(&mut doc).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if `STYLEGUIDE_CACHE` is not a recognized boolean.
    pub fn apply_overrides(config: &mut RawConfig) -> Result<()> {
        if let Ok(val) = env::var(ENV_CACHE) {
            let cache = Self::parse_bool(ENV_CACHE, &val)?;
            config.insert(CACHE_KEY, Value::Bool(cache));
        }

        if let Ok(location) = env::var(ENV_CACHE_LOCATION) {
            if !location.trim().is_empty() {
                config.insert(CACHE_LOCATION_KEY, Value::String(location));
            }
        }

        if let Ok(patterns) = env::var(ENV_IGNORE) {
            let extra = Self::parse_patterns(&patterns);
            if !extra.is_empty() {
                Self::append_ignore(config, extra);
            }
        }

        Ok(())
    }

    /// Whether any override variable is set.
    #[must_use]
    pub fn has_overrides() -> bool {
        [ENV_CACHE, ENV_CACHE_LOCATION, ENV_IGNORE]
            .iter()
            .any(|key| env::var_os(key).is_some())
    }

    fn append_ignore(config: &mut RawConfig, extra: Vec<String>) {
        let extra = extra.into_iter().map(Value::String);
        match config.as_map_mut().get_mut(IGNORE_KEY) {
            Some(Value::Array(existing)) => existing.extend(extra),
            // A malformed `ignore` stays as-is for the validator to report.
            Some(_) => {}
            None => {
                config.insert(IGNORE_KEY, Value::Array(extra.collect()));
            }
        }
    }

    /// Parse boolean from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(variable: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::InvalidEnvironment {
                variable: variable.into(),
                value: s.into(),
            }),
        }
    }

    /// Split a comma-separated pattern list, dropping empty entries.
    fn parse_patterns(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}
