//! Configuration schema definitions.
//!
//! Two representations are used:
//!
//! - [`RawConfig`]: an untyped document tree, as parsed from a user file.
//!   Every field is optional and may hold a structurally wrong value.
//! - [`Configuration`]: the typed, fully-resolved configuration handed to
//!   linter dispatch, the file walker and the cache layer.
//!
//! Merging and validation operate on `RawConfig` so that malformed input can
//! be reported as warnings instead of failing deserialization. The typed
//! value is produced afterwards with [`Configuration::from_raw`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level key holding the language table.
pub const LANGUAGES_KEY: &str = "languages";
/// Top-level key holding the ignore patterns.
pub const IGNORE_KEY: &str = "ignore";
/// Top-level key holding the cache flag.
pub const CACHE_KEY: &str = "cache";
/// Top-level key holding the cache directory.
pub const CACHE_LOCATION_KEY: &str = "cacheLocation";
/// Top-level key holding plugin descriptors.
pub const PLUGINS_KEY: &str = "plugins";
/// Per-language key holding the linter table.
pub const LINTERS_KEY: &str = "linters";

/// Fully-resolved configuration.
///
/// # Examples
///
/// ```
/// use styleguide::config::Configuration;
///
/// let config = Configuration::default();
/// assert!(config.cache);
/// assert!(config.languages.contains_key("python"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Per-language settings keyed by language identifier.
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageConfig>,

    /// Glob patterns excluded from linting.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Whether lint results may be cached.
    #[serde(default = "default_cache")]
    pub cache: bool,

    /// Directory for cached lint results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_location: Option<String>,

    /// Plugin descriptors. Opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Value>>,
}

fn default_cache() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        super::defaults::default_config()
    }
}

/// Settings for a single language.
///
/// # Examples
///
/// ```
/// use styleguide::config::{LanguageConfig, LinterSettings};
///
/// let mut bash = LanguageConfig::new(vec![".sh".to_string()]);
/// bash.linters.insert("shellcheck".to_string(), LinterSettings::enabled());
/// assert!(bash.enabled);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct LanguageConfig {
    /// Whether files of this language are linted at all.
    #[serde(default)]
    pub enabled: bool,

    /// File extensions (".py") or file names ("Dockerfile") matched by this language.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Linter settings keyed by linter name.
    #[serde(default)]
    pub linters: BTreeMap<String, LinterSettings>,

    /// Formatter names, in invocation order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatters: Option<Vec<String>>,
}

impl LanguageConfig {
    /// Creates an enabled language with the given extensions and no linters.
    #[must_use]
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            enabled: true,
            extensions,
            linters: BTreeMap::new(),
            formatters: None,
        }
    }
}

/// Settings for a single linter.
///
/// Only `enabled` is interpreted here. Every other key is carried verbatim in
/// `options` so that plugin-registered linters keep their own settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct LinterSettings {
    /// Whether the linter runs.
    #[serde(default)]
    pub enabled: bool,

    /// Linter-specific options.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl LinterSettings {
    /// An enabled linter with no options.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            options: Map::new(),
        }
    }

    /// A disabled linter with no options.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Adds an option, builder style.
    #[must_use]
    pub fn with_option(mut self, key: &str, value: Value) -> Self {
        self.options.insert(key.to_string(), value);
        self
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut options = map.clone();
        let enabled = options
            .remove("enabled")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        Self { enabled, options }
    }
}

/// Untyped configuration document.
///
/// Wraps the root mapping of a parsed configuration file. Used both for
/// partial user documents and for merged documents awaiting validation.
///
/// # Examples
///
/// ```
/// use styleguide::config::RawConfig;
/// use serde_json::json;
///
/// let raw = RawConfig::from_value(json!({ "cache": false })).unwrap();
/// assert_eq!(raw.get("cache"), Some(&json!(false)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig(Map<String, Value>);

impl RawConfig {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a parsed value.
    ///
    /// `null` (an empty YAML file, for instance) becomes an empty document.
    ///
    /// # Errors
    ///
    /// Returns a description of the value's type if it is not a mapping.
    pub fn from_value(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(format!(
                "expected a mapping at the document root, found {}",
                value_kind(&other)
            )),
        }
    }

    /// Whether the document has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a top-level key, returning the previous value.
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.0.insert(key.to_string(), value)
    }

    /// The root mapping.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Mutable access to the root mapping.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Consumes the document, returning it as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RawConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<&Configuration> for RawConfig {
    fn from(config: &Configuration) -> Self {
        // Serializing plain structs, string-keyed maps and JSON values cannot fail.
        match serde_json::to_value(config) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::new(),
        }
    }
}

impl Configuration {
    /// Converts a merged document into a typed configuration.
    ///
    /// Malformed fields fall back to the built-in default for that field.
    /// Malformed entries inside lists and tables (non-string ignore patterns,
    /// non-object linters, blank linter names) are dropped. Each of these
    /// has a matching warning in [`ConfigValidator`](super::ConfigValidator).
    #[must_use]
    pub fn from_raw(raw: &RawConfig) -> Self {
        let defaults = super::defaults::default_config();

        let languages = match raw.get(LANGUAGES_KEY) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(name, value)| {
                    value.as_object().map(|entry| {
                        (
                            name.clone(),
                            language_from_map(entry, defaults.languages.get(name)),
                        )
                    })
                })
                .collect(),
            _ => defaults.languages,
        };

        let ignore = match raw.get(IGNORE_KEY) {
            Some(Value::Array(items)) => string_items(items),
            _ => defaults.ignore,
        };

        let cache = raw
            .get(CACHE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(defaults.cache);

        let cache_location = match raw.get(CACHE_LOCATION_KEY) {
            Some(Value::String(location)) => Some(location.clone()),
            _ => defaults.cache_location,
        };

        let plugins = match raw.get(PLUGINS_KEY) {
            Some(Value::Array(items)) => Some(items.clone()),
            _ => defaults.plugins,
        };

        Self {
            languages,
            ignore,
            cache,
            cache_location,
            plugins,
        }
    }

    /// Names of the enabled languages, sorted.
    #[must_use]
    pub fn enabled_languages(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|(_, language)| language.enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

fn language_from_map(map: &Map<String, Value>, fallback: Option<&LanguageConfig>) -> LanguageConfig {
    let enabled = map
        .get("enabled")
        .and_then(Value::as_bool)
        .or_else(|| fallback.map(|f| f.enabled))
        .unwrap_or(false);

    let extensions = match map.get("extensions") {
        Some(Value::Array(items)) => string_items(items),
        _ => fallback.map(|f| f.extensions.clone()).unwrap_or_default(),
    };

    let linters = match map.get(LINTERS_KEY) {
        Some(Value::Object(linters)) => linters
            .iter()
            .filter(|(name, _)| is_valid_linter_name(name))
            .filter_map(|(name, value)| {
                value
                    .as_object()
                    .map(|settings| (name.clone(), LinterSettings::from_map(settings)))
            })
            .collect(),
        _ => fallback.map(|f| f.linters.clone()).unwrap_or_default(),
    };

    let formatters = match map.get("formatters") {
        Some(Value::Array(items)) => Some(string_items(items)),
        _ => fallback.and_then(|f| f.formatters.clone()),
    };

    LanguageConfig {
        enabled,
        extensions,
        linters,
        formatters,
    }
}

/// Linter names must contain something other than whitespace.
pub(crate) fn is_valid_linter_name(name: &str) -> bool {
    !name.trim().is_empty()
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Short, human-readable name for a JSON value's type.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
