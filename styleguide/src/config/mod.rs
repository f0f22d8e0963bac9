//! Configuration system for styleguide.
//!
//! This module resolves the configuration used by the linter front end:
//! - Explicit configuration files (JSON, YAML, TOML)
//! - Auto-discovery of conventional file names (`.styleguiderc*`,
//!   `styleguide.config.*`, the `"styleguide"` key of `package.json`)
//! - Merging over built-in defaults
//! - Non-fatal validation warnings
//! - Optional environment variable overrides
//!
//! # Merge Rules
//!
//! 1. `languages`: union of defaults and user entries; a language present in
//!    both has its `linters` merged key by key and its other fields overridden
//! 2. `ignore`: default patterns followed by user patterns
//! 3. Everything else: the user value replaces the default
//!
//! # Examples
//!
//! Loading with auto-discovery from a project directory:
//!
//! ```no_run
//! use styleguide::config::ConfigLoader;
//!
//! let config = ConfigLoader::new("/path/to/project").load(None).unwrap();
//! println!("ignoring {:?}", config.ignore);
//! ```
//!
//! Validating a document directly:
//!
//! ```
//! use styleguide::config::{validate_config, RawConfig};
//! use serde_json::json;
//!
//! let doc = RawConfig::from_value(json!({ "ignore": "not-an-array" })).unwrap();
//! assert_eq!(validate_config(&doc).len(), 1);
//! ```

pub mod defaults;
pub mod environment;
pub mod format;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use defaults::{default_config, is_known_language, DEFAULT_IGNORE, KNOWN_LANGUAGES};
pub use environment::EnvironmentConfig;
pub use format::{ConfigFormat, FormatRegistry, JsonFormat, TomlFormat, YamlFormat};
pub use loader::{
    get_default_config, load_config, ConfigLoader, ConfigSource, ResolvedConfig, SearchStrategy,
    SEARCH_PLACES,
};
pub use merger::ConfigMerger;
pub use schema::{Configuration, LanguageConfig, LinterSettings, RawConfig};
pub use validator::{validate_config, ConfigValidator};
