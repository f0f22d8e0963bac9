//! Built-in default configuration.
//!
//! The defaults are rebuilt on every call to [`default_config`]. There is no
//! shared instance, so a caller mutating its copy can never affect another
//! load.

use super::schema::{Configuration, LanguageConfig, LinterSettings};
use std::collections::BTreeMap;

/// Language identifiers recognized without a warning.
///
/// Other identifiers are accepted (plugins may register them) but the
/// validator reports them.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "python",
    "typescript",
    "javascript",
    "bash",
    "powershell",
    "terraform",
    "terragrunt",
    "hcl",
    "ansible",
    "yaml",
    "json",
    "docker",
    "kubernetes",
    "sql",
    "markdown",
    "makefile",
    "groovy",
];

/// Ignore patterns applied before any user-supplied pattern.
pub const DEFAULT_IGNORE: &[&str] = &[
    "node_modules/**",
    ".git/**",
    "dist/**",
    "build/**",
    "coverage/**",
    "__pycache__/**",
    ".venv/**",
    "venv/**",
    ".terraform/**",
];

/// Whether `name` is in [`KNOWN_LANGUAGES`].
#[must_use]
pub fn is_known_language(name: &str) -> bool {
    KNOWN_LANGUAGES.contains(&name)
}

/// Returns a fresh copy of the built-in default configuration.
///
/// # Examples
///
/// ```
/// use styleguide::config::default_config;
///
/// let mut a = default_config();
/// let b = default_config();
/// a.ignore.clear();
/// assert!(!b.ignore.is_empty());
/// ```
#[must_use]
pub fn default_config() -> Configuration {
    let languages = [
        (
            "python",
            language(
                &[".py", ".pyi"],
                &[
                    ("black", true),
                    ("flake8", true),
                    ("pylint", false),
                    ("mypy", false),
                ],
                Some(&["black"]),
            ),
        ),
        (
            "typescript",
            language(
                &[".ts", ".tsx"],
                &[("eslint", true)],
                Some(&["prettier"]),
            ),
        ),
        (
            "javascript",
            language(
                &[".js", ".jsx", ".mjs", ".cjs"],
                &[("eslint", true)],
                Some(&["prettier"]),
            ),
        ),
        (
            "bash",
            language(
                &[".sh", ".bash"],
                &[("shellcheck", true)],
                Some(&["shfmt"]),
            ),
        ),
        (
            "terraform",
            language(
                &[".tf", ".tfvars"],
                &[("tflint", true), ("terraform-validate", true)],
                Some(&["terraform-fmt"]),
            ),
        ),
        (
            "yaml",
            language(&[".yml", ".yaml"], &[("yamllint", true)], None),
        ),
        (
            "json",
            language(&[".json"], &[], Some(&["prettier"])),
        ),
        (
            "docker",
            language(
                &["Dockerfile", ".dockerfile"],
                &[("hadolint", true)],
                None,
            ),
        ),
        (
            "markdown",
            language(&[".md"], &[("markdownlint", true)], None),
        ),
    ]
    .into_iter()
    .map(|(name, config)| (name.to_string(), config))
    .collect();

    Configuration {
        languages,
        ignore: DEFAULT_IGNORE.iter().map(|p| (*p).to_string()).collect(),
        cache: true,
        cache_location: None,
        plugins: None,
    }
}

fn language(
    extensions: &[&str],
    linters: &[(&str, bool)],
    formatters: Option<&[&str]>,
) -> LanguageConfig {
    let linters: BTreeMap<String, LinterSettings> = linters
        .iter()
        .map(|(name, enabled)| {
            let settings = if *enabled {
                LinterSettings::enabled()
            } else {
                LinterSettings::disabled()
            };
            ((*name).to_string(), settings)
        })
        .collect();

    LanguageConfig {
        enabled: true,
        extensions: extensions.iter().map(|e| (*e).to_string()).collect(),
        linters,
        formatters: formatters.map(|names| names.iter().map(|n| (*n).to_string()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_languages_are_known() {
        let config = default_config();
        for name in config.languages.keys() {
            assert!(is_known_language(name), "{name} missing from KNOWN_LANGUAGES");
        }
    }

    #[test]
    fn test_default_config_values() {
        let config = default_config();
        assert!(config.cache);
        assert_eq!(config.cache_location, None);
        assert_eq!(config.plugins, None);
        assert_eq!(config.ignore.len(), DEFAULT_IGNORE.len());
        assert_eq!(config.ignore[0], "node_modules/**");
    }

    #[test]
    fn test_python_defaults() {
        let config = default_config();
        let python = &config.languages["python"];
        assert!(python.enabled);
        assert!(python.extensions.contains(&".py".to_string()));
        assert!(python.linters["black"].enabled);
        assert!(!python.linters["pylint"].enabled);
        assert_eq!(python.formatters, Some(vec!["black".to_string()]));
    }

    #[test]
    fn test_copies_are_independent() {
        let mut first = default_config();
        first
            .languages
            .get_mut("python")
            .unwrap()
            .linters
            .remove("black");
        first.cache = false;

        let second = default_config();
        assert!(second.cache);
        assert!(second.languages["python"].linters.contains_key("black"));
    }

    #[test]
    fn test_unknown_language() {
        assert!(!is_known_language("rust"));
        assert!(is_known_language("python"));
    }
}
