//! Configuration file discovery and loading.
//!
//! A configuration comes from one of two places:
//!
//! - an explicit path, which must exist and have a supported extension, or
//! - auto-discovery over a fixed list of conventional file names.
//!
//! Explicit loading reports every problem as an error. Auto-discovery never
//! fails: anything that goes wrong while searching is logged at debug level
//! and treated as "no configuration found".

use crate::config::defaults::default_config;
use crate::config::environment::EnvironmentConfig;
use crate::config::format::{ConfigFormat, FormatRegistry, YamlFormat};
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Configuration, RawConfig};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::logging::Logger;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name used to derive the conventional configuration file names.
pub const MODULE_NAME: &str = "styleguide";

/// Package manifest whose `"styleguide"` key may hold the configuration.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Candidate locations probed in each searched directory, in order.
pub const SEARCH_PLACES: &[&str] = &[
    "package.json",
    ".styleguiderc",
    ".styleguiderc.json",
    ".styleguiderc.yaml",
    ".styleguiderc.yml",
    ".styleguiderc.toml",
    ".config/styleguiderc",
    ".config/styleguiderc.json",
    ".config/styleguiderc.yaml",
    ".config/styleguiderc.yml",
    "styleguide.config.json",
    "styleguide.config.yaml",
    "styleguide.config.yml",
    "styleguide.config.toml",
];

/// Which directories auto-discovery visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Only the working directory.
    CurrentDir,
    /// The working directory and its ancestors, up to the stop directory.
    #[default]
    Ancestors,
}

/// A configuration document together with where it came from.
///
/// # Examples
///
/// ```
/// use styleguide::config::{ConfigSource, RawConfig};
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from(".styleguiderc.yaml"),
///     format: "yaml",
///     config: RawConfig::new(),
/// };
/// assert_eq!(source.format, "yaml");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    /// Path of the file the document was read from.
    pub path: PathBuf,
    /// Name of the format used to parse it.
    pub format: &'static str,
    /// The parsed, unmerged document.
    pub config: RawConfig,
}

/// The outcome of resolving a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// The merged, typed configuration.
    pub config: Configuration,
    /// Validation warnings for the merged document.
    pub warnings: Vec<String>,
    /// The user document that was merged, if any.
    pub source: Option<ConfigSource>,
}

impl ResolvedConfig {
    fn defaults() -> Self {
        Self {
            config: default_config(),
            warnings: Vec::new(),
            source: None,
        }
    }
}

/// Loads configuration from an explicit path or by auto-discovery.
///
/// # Examples
///
/// ```no_run
/// use styleguide::config::{ConfigLoader, SearchStrategy};
///
/// let config = ConfigLoader::new("/path/to/project")
///     .with_search_strategy(SearchStrategy::CurrentDir)
///     .load(None)
///     .unwrap();
/// println!("{} languages configured", config.languages.len());
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    working_dir: PathBuf,
    strategy: SearchStrategy,
    stop_dir: Option<PathBuf>,
    formats: FormatRegistry,
    env_overrides: bool,
    logger: Logger,
}

impl ConfigLoader {
    /// Creates a loader rooted at `working_dir`.
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            strategy: SearchStrategy::default(),
            stop_dir: None,
            formats: FormatRegistry::default(),
            env_overrides: false,
            logger: Logger::default(),
        }
    }

    /// Creates a loader rooted at the process's current directory.
    ///
    /// An unreadable current directory degrades to `.`; explicit absolute
    /// paths still load and discovery simply finds nothing.
    #[must_use]
    pub fn from_current_dir() -> Self {
        let working_dir = env::current_dir().unwrap_or_else(|e| {
            log::debug!("cannot read current directory ({e}), searching '.'");
            PathBuf::from(".")
        });
        Self::new(working_dir)
    }

    /// Sets which directories auto-discovery visits.
    #[must_use]
    pub fn with_search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the last directory visited by [`SearchStrategy::Ancestors`].
    ///
    /// Defaults to the home directory when the working directory is inside
    /// it, and to the filesystem root otherwise.
    #[must_use]
    pub fn with_stop_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stop_dir = Some(dir.into());
        self
    }

    /// Enables `STYLEGUIDE_*` environment overrides.
    #[must_use]
    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    /// Sets the logger used for the warning channel.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Replaces the format registry.
    #[must_use]
    pub fn with_formats(mut self, formats: FormatRegistry) -> Self {
        self.formats = formats;
        self
    }

    /// The directory discovery starts from and relative paths resolve against.
    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve, emit warnings on the warning channel, and return the configuration.
    ///
    /// At verbose level the loaded file (or the fallback to defaults) is
    /// reported as well.
    ///
    /// # Errors
    ///
    /// Only fails for an explicit path: see [`ConfigLoader::load_explicit`].
    /// Also fails if an enabled environment override is malformed.
    pub fn load(&self, explicit_path: Option<&Path>) -> Result<Configuration> {
        let resolved = self.resolve(explicit_path)?;
        match &resolved.source {
            Some(source) => self.logger.debug(&format!(
                "Loaded {} configuration from {}",
                source.format,
                source.path.display()
            )),
            None => self
                .logger
                .debug("No configuration file found, using defaults"),
        }
        self.logger.config_warnings(&resolved.warnings);
        Ok(resolved.config)
    }

    /// Resolve the configuration without emitting warnings.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`].
    pub fn resolve(&self, explicit_path: Option<&Path>) -> Result<ResolvedConfig> {
        let source = match explicit_path {
            Some(path) => Some(self.load_explicit(path)?),
            None => self.search().filter(|source| {
                if source.config.is_empty() {
                    log::debug!(
                        "ignoring empty configuration at {}",
                        source.path.display()
                    );
                }
                !source.config.is_empty()
            }),
        };

        let apply_env = self.env_overrides && EnvironmentConfig::has_overrides();
        if source.is_none() && !apply_env {
            log::debug!("no configuration found, using defaults");
            return Ok(ResolvedConfig::defaults());
        }

        let defaults = RawConfig::from(&default_config());
        let mut merged = match &source {
            Some(source) => ConfigMerger::merge(&defaults, &source.config),
            None => defaults,
        };

        if apply_env {
            EnvironmentConfig::apply_overrides(&mut merged)?;
        }

        let warnings = ConfigValidator::validate(&merged);
        Ok(ResolvedConfig {
            config: Configuration::from_raw(&merged),
            warnings,
            source,
        })
    }

    /// Load and parse an explicitly requested configuration file.
    ///
    /// Relative paths resolve against the working directory.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if no file exists at the path.
    /// - [`Error::UnsupportedFormat`] if no registered format handles its extension.
    /// - The parser's own error if the contents are malformed.
    /// - [`Error::Io`] if the file cannot be read.
    pub fn load_explicit(&self, path: &Path) -> Result<ConfigSource> {
        let path = if path.is_relative() {
            self.working_dir.join(path)
        } else {
            path.to_path_buf()
        };

        if !path.is_file() {
            return Err(Error::ConfigNotFound { path });
        }

        let Some(format) = self.formats.for_path(&path) else {
            let extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            return Err(Error::UnsupportedFormat { path, extension });
        };

        Self::read_with(format, path)
    }

    /// Run auto-discovery, swallowing any error.
    #[must_use]
    pub fn search(&self) -> Option<ConfigSource> {
        match self.try_search() {
            Ok(found) => found,
            Err(e) => {
                log::debug!("configuration discovery failed, using defaults: {e}");
                None
            }
        }
    }

    /// Run auto-discovery, surfacing the first error encountered.
    ///
    /// # Errors
    ///
    /// Returns an error if the first candidate found cannot be read or parsed.
    pub fn try_search(&self) -> Result<Option<ConfigSource>> {
        for dir in self.search_dirs() {
            if let Some(source) = self.search_directory(&dir)? {
                log::debug!("found configuration at {}", source.path.display());
                return Ok(Some(source));
            }
        }
        Ok(None)
    }

    fn search_directory(&self, dir: &Path) -> Result<Option<ConfigSource>> {
        for place in SEARCH_PLACES {
            let candidate = dir.join(place);
            if !candidate.is_file() {
                continue;
            }

            if *place == PACKAGE_MANIFEST {
                match Self::read_manifest(&candidate)? {
                    Some(source) => return Ok(Some(source)),
                    None => continue,
                }
            }

            let format: &dyn ConfigFormat = match self.formats.for_path(&candidate) {
                Some(format) => format,
                None if candidate.extension().is_none() => &YamlFormat,
                None => {
                    log::debug!("no format registered for {}", candidate.display());
                    continue;
                }
            };

            return Self::read_with(format, candidate).map(Some);
        }
        Ok(None)
    }

    /// Reads the `"styleguide"` key of a package manifest.
    ///
    /// A manifest without the key is not a configuration source.
    fn read_manifest(path: &Path) -> Result<Option<ConfigSource>> {
        let contents = fs::read_to_string(path)?;
        let manifest: serde_json::Value = serde_json::from_str(&contents)?;

        let Some(value) = manifest.get(MODULE_NAME) else {
            log::debug!("{} has no \"{MODULE_NAME}\" key", path.display());
            return Ok(None);
        };

        let config = RawConfig::from_value(value.clone()).map_err(|reason| {
            Error::InvalidDocument {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        Ok(Some(ConfigSource {
            path: path.to_path_buf(),
            format: "json",
            config,
        }))
    }

    fn read_with(format: &dyn ConfigFormat, path: PathBuf) -> Result<ConfigSource> {
        let contents = fs::read_to_string(&path)?;
        let config = format.parse(&path, &contents)?;
        Ok(ConfigSource {
            path,
            format: format.name(),
            config,
        })
    }

    fn search_dirs(&self) -> Vec<PathBuf> {
        match self.strategy {
            SearchStrategy::CurrentDir => vec![self.working_dir.clone()],
            SearchStrategy::Ancestors => {
                let stop = self
                    .stop_dir
                    .clone()
                    .or_else(home::home_dir)
                    .filter(|stop| self.working_dir.starts_with(stop));

                let mut dirs = Vec::new();
                for dir in self.working_dir.ancestors() {
                    dirs.push(dir.to_path_buf());
                    if stop.as_deref() == Some(dir) {
                        break;
                    }
                }
                dirs
            }
        }
    }
}

/// Load the configuration for the current directory.
///
/// With `explicit_path`, that file is loaded. Otherwise auto-discovery runs
/// and falls back to the defaults. Warnings are written to stderr.
///
/// # Errors
///
/// Only fails for an explicit path that is missing, has an unsupported
/// extension, or cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use styleguide::config::load_config;
/// use std::path::Path;
///
/// let config = load_config(Some(Path::new(".styleguiderc.yaml"))).unwrap();
/// assert!(!config.languages.is_empty());
/// ```
pub fn load_config(explicit_path: Option<&Path>) -> Result<Configuration> {
    ConfigLoader::from_current_dir().load(explicit_path)
}

/// Returns a fresh, independent copy of the built-in defaults.
#[must_use]
pub fn get_default_config() -> Configuration {
    default_config()
}
