//! Configuration validation.
//!
//! Validation never fails and never mutates its input. Every problem found is
//! returned as a human-readable warning, and all checks run independently so
//! that a document with three problems yields three warnings.

use crate::config::defaults::{is_known_language, KNOWN_LANGUAGES};
use crate::config::schema::{
    is_valid_linter_name, value_kind, Configuration, RawConfig, CACHE_KEY, CACHE_LOCATION_KEY,
    IGNORE_KEY, LANGUAGES_KEY, LINTERS_KEY, PLUGINS_KEY,
};
use serde_json::{Map, Value};

/// Validates merged configuration documents.
///
/// # Examples
///
/// ```
/// use styleguide::config::{ConfigValidator, RawConfig};
/// use serde_json::json;
///
/// let doc = RawConfig::from_value(json!({ "cache": "yes", "plugins": 1 })).unwrap();
/// let warnings = ConfigValidator::validate(&doc);
/// assert_eq!(warnings.len(), 2);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a merged configuration document.
    #[must_use]
    pub fn validate(config: &RawConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(languages) = config.get(LANGUAGES_KEY) {
            Self::validate_languages(languages, &mut warnings);
        }

        if let Some(ignore) = config.get(IGNORE_KEY) {
            Self::validate_ignore(ignore, &mut warnings);
        }

        if let Some(cache) = config.get(CACHE_KEY) {
            if !cache.is_boolean() {
                warnings.push(format!(
                    "\"{CACHE_KEY}\" must be a boolean, found {}",
                    to_json(cache)
                ));
            }
        }

        if let Some(location) = config.get(CACHE_LOCATION_KEY) {
            if !(location.is_string() || location.is_null()) {
                warnings.push(format!(
                    "\"{CACHE_LOCATION_KEY}\" must be a string, found {}",
                    to_json(location)
                ));
            }
        }

        if let Some(plugins) = config.get(PLUGINS_KEY) {
            if !plugins.is_array() {
                warnings.push(format!(
                    "\"{PLUGINS_KEY}\" must be an array, found {}",
                    value_kind(plugins)
                ));
            }
        }

        warnings
    }

    /// Validate a typed configuration.
    ///
    /// Typed values cannot hold structurally wrong fields, so only the
    /// language whitelist and linter names are checked in practice.
    #[must_use]
    pub fn validate_typed(config: &Configuration) -> Vec<String> {
        Self::validate(&RawConfig::from(config))
    }

    fn validate_languages(languages: &Value, warnings: &mut Vec<String>) {
        let Value::Object(languages) = languages else {
            warnings.push(format!(
                "\"{LANGUAGES_KEY}\" must be an object, found {}",
                value_kind(languages)
            ));
            return;
        };

        for (name, language) in languages {
            if !is_known_language(name) {
                warnings.push(format!(
                    "Unknown language \"{name}\". Known languages: {}",
                    KNOWN_LANGUAGES.join(", ")
                ));
            }

            match language {
                Value::Object(language) => {
                    Self::validate_language_fields(name, language, warnings);
                    Self::validate_linters(name, language, warnings);
                }
                other => warnings.push(format!(
                    "Language \"{name}\" must be an object, found {}",
                    value_kind(other)
                )),
            }
        }
    }

    fn validate_language_fields(
        language: &str,
        config: &Map<String, Value>,
        warnings: &mut Vec<String>,
    ) {
        if let Some(enabled) = config.get("enabled") {
            if !enabled.is_boolean() {
                warnings.push(format!(
                    "\"enabled\" of language \"{language}\" must be a boolean, found {}",
                    to_json(enabled)
                ));
            }
        }

        for field in ["extensions", "formatters"] {
            let Some(value) = config.get(field) else {
                continue;
            };
            let Value::Array(items) = value else {
                warnings.push(format!(
                    "\"{field}\" of language \"{language}\" must be an array of strings, found {}",
                    value_kind(value)
                ));
                continue;
            };
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    warnings.push(format!(
                        "Invalid entry in \"{field}\" of language \"{language}\" at index {i}: {} (expected a string)",
                        to_json(item)
                    ));
                }
            }
        }
    }

    fn validate_linters(language: &str, config: &Map<String, Value>, warnings: &mut Vec<String>) {
        let Some(linters) = config.get(LINTERS_KEY) else {
            return;
        };

        let Value::Object(linters) = linters else {
            warnings.push(format!(
                "\"{LINTERS_KEY}\" of language \"{language}\" must be an object, found {}",
                value_kind(linters)
            ));
            return;
        };

        for (name, settings) in linters {
            if !is_valid_linter_name(name) {
                warnings.push(format!(
                    "Invalid linter name in language \"{language}\": names must be non-empty strings"
                ));
            }

            match settings.get("enabled") {
                _ if !settings.is_object() => warnings.push(format!(
                    "Invalid config for linter \"{name}\" in language \"{language}\": expected an object, found {}",
                    value_kind(settings)
                )),
                Some(enabled) if !enabled.is_boolean() => warnings.push(format!(
                    "\"enabled\" of linter \"{name}\" in language \"{language}\" must be a boolean, found {}",
                    to_json(enabled)
                )),
                _ => {}
            }
        }
    }

    fn validate_ignore(ignore: &Value, warnings: &mut Vec<String>) {
        let Value::Array(patterns) = ignore else {
            warnings.push(format!(
                "\"{IGNORE_KEY}\" must be an array of strings, found {}",
                value_kind(ignore)
            ));
            return;
        };

        for (i, pattern) in patterns.iter().enumerate() {
            if !pattern.is_string() {
                warnings.push(format!(
                    "Invalid ignore pattern at index {i}: {} (expected a string)",
                    to_json(pattern)
                ));
            }
        }
    }
}

/// Validate a merged configuration document.
///
/// Convenience wrapper around [`ConfigValidator::validate`].
#[must_use]
pub fn validate_config(config: &RawConfig) -> Vec<String> {
    ConfigValidator::validate(config)
}

fn to_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value_kind(value).to_string())
}
