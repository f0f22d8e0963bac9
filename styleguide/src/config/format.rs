//! Configuration file formats.
//!
//! Each supported format implements [`ConfigFormat`] and is registered in a
//! [`FormatRegistry`] under its file extensions. The loader looks formats up
//! by extension instead of branching on extension strings.
//!
//! Executable configuration modules (`.js`, `.cjs`, `.mjs`) are deliberately
//! absent: configuration is declarative only.

use crate::config::schema::RawConfig;
use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// A declarative configuration file format.
pub trait ConfigFormat: Send + Sync {
    /// Human-readable format name.
    fn name(&self) -> &'static str;

    /// Lower-case file extensions handled by this format, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Parse file contents into a configuration document.
    ///
    /// # Errors
    ///
    /// Returns the underlying parser's error if the contents are malformed.
    fn parse_value(&self, contents: &str) -> Result<Value>;

    /// Parse file contents and require a mapping at the root.
    ///
    /// # Errors
    ///
    /// Returns the parser's error, or [`Error::InvalidDocument`] if the root
    /// is not a mapping.
    fn parse(&self, path: &Path, contents: &str) -> Result<RawConfig> {
        let value = self.parse_value(contents)?;
        RawConfig::from_value(value).map_err(|reason| Error::InvalidDocument {
            path: path.to_path_buf(),
            reason,
        })
    }
}

/// JSON configuration files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ConfigFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn parse_value(&self, contents: &str) -> Result<Value> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// YAML configuration files. Also used for extension-less rc files, since
/// YAML accepts JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl ConfigFormat for YamlFormat {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn parse_value(&self, contents: &str) -> Result<Value> {
        // serde_yaml rejects a document with no content; treat it as null.
        if contents.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}

/// TOML configuration files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

impl ConfigFormat for TomlFormat {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["toml"]
    }

    fn parse_value(&self, contents: &str) -> Result<Value> {
        Ok(toml::from_str(contents)?)
    }
}

/// Lookup table from file extension to format.
///
/// # Examples
///
/// ```
/// use styleguide::config::FormatRegistry;
/// use std::path::Path;
///
/// let registry = FormatRegistry::default();
/// assert_eq!(registry.for_extension("YML").unwrap().name(), "yaml");
/// assert!(registry.for_path(Path::new("styleguide.config.js")).is_none());
/// ```
pub struct FormatRegistry {
    formats: Vec<Box<dyn ConfigFormat>>,
}

impl FormatRegistry {
    /// A registry with no formats.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Registers a format. Later registrations win on extension clashes.
    pub fn register(&mut self, format: Box<dyn ConfigFormat>) {
        self.formats.insert(0, format);
    }

    /// Looks a format up by extension (case-insensitive, without the dot).
    #[must_use]
    pub fn for_extension(&self, extension: &str) -> Option<&dyn ConfigFormat> {
        let extension = extension.to_ascii_lowercase();
        self.formats
            .iter()
            .find(|format| format.extensions().contains(&extension.as_str()))
            .map(|format| &**format)
    }

    /// Looks a format up by a path's extension.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<&dyn ConfigFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.for_extension(ext))
    }

    /// Every registered extension.
    #[must_use]
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = self
            .formats
            .iter()
            .flat_map(|format| format.extensions().iter().copied())
            .collect();
        extensions.sort_unstable();
        extensions.dedup();
        extensions
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TomlFormat));
        registry.register(Box::new(YamlFormat));
        registry.register(Box::new(JsonFormat));
        registry
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("extensions", &self.supported_extensions())
            .finish()
    }
}
