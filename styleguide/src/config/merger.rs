//! Configuration merging.
//!
//! A partial user document is merged over the defaults with these rules:
//!
//! - `languages`: union of both tables. For a language present in both, the
//!   language's fields are shallow-overridden, except `linters`, which is
//!   merged key by key.
//! - `ignore`: default patterns followed by user patterns (no dedup).
//! - Every other key: the user value replaces the default.
//!
//! When the user supplies a wrong type for `languages`, a language entry,
//! `linters` or `ignore`, the user value replaces the default as-is so that
//! the validator can report it.

use crate::config::schema::{RawConfig, IGNORE_KEY, LANGUAGES_KEY, LINTERS_KEY};
use serde_json::{Map, Value};

/// Merges configuration documents.
///
/// # Examples
///
/// ```
/// use styleguide::config::{ConfigMerger, RawConfig};
/// use serde_json::json;
///
/// let defaults = RawConfig::from_value(json!({ "ignore": ["a"], "cache": true })).unwrap();
/// let user = RawConfig::from_value(json!({ "ignore": ["b"], "cache": false })).unwrap();
///
/// let merged = ConfigMerger::merge(&defaults, &user);
/// assert_eq!(merged.get("ignore"), Some(&json!(["a", "b"])));
/// assert_eq!(merged.get("cache"), Some(&json!(false)));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `user` over `defaults`, returning a new document.
    #[must_use]
    pub fn merge(defaults: &RawConfig, user: &RawConfig) -> RawConfig {
        let mut result = defaults.clone();
        Self::merge_into(&mut result, user);
        result
    }

    /// Merge source document into target (source wins).
    pub fn merge_into(target: &mut RawConfig, source: &RawConfig) {
        let target = target.as_map_mut();

        for (key, source_value) in source.as_map() {
            match key.as_str() {
                LANGUAGES_KEY => Self::merge_languages(target, source_value),
                IGNORE_KEY => Self::merge_ignore(target, source_value),
                _ => {
                    target.insert(key.clone(), source_value.clone());
                }
            }
        }
    }

    fn merge_languages(target: &mut Map<String, Value>, source: &Value) {
        let (Some(Value::Object(target_languages)), Value::Object(source_languages)) =
            (target.get_mut(LANGUAGES_KEY), source)
        else {
            target.insert(LANGUAGES_KEY.to_string(), source.clone());
            return;
        };

        for (name, source_language) in source_languages {
            match (target_languages.get_mut(name), source_language) {
                (Some(Value::Object(target_language)), Value::Object(source_language)) => {
                    Self::merge_language(target_language, source_language);
                }
                _ => {
                    target_languages.insert(name.clone(), source_language.clone());
                }
            }
        }
    }

    /// Shallow override of one language, with a key-by-key merge of `linters`.
    fn merge_language(target: &mut Map<String, Value>, source: &Map<String, Value>) {
        for (key, source_value) in source {
            if key == LINTERS_KEY {
                if let (Some(Value::Object(target_linters)), Value::Object(source_linters)) =
                    (target.get_mut(LINTERS_KEY), source_value)
                {
                    for (linter, settings) in source_linters {
                        target_linters.insert(linter.clone(), settings.clone());
                    }
                    continue;
                }
            }
            target.insert(key.clone(), source_value.clone());
        }
    }

    fn merge_ignore(target: &mut Map<String, Value>, source: &Value) {
        match (target.get_mut(IGNORE_KEY), source) {
            (Some(Value::Array(target_patterns)), Value::Array(source_patterns)) => {
                target_patterns.extend(source_patterns.iter().cloned());
            }
            _ => {
                target.insert(IGNORE_KEY.to_string(), source.clone());
            }
        }
    }
}
