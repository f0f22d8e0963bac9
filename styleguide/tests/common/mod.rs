//! Common test utilities for integration tests.
//!
//! This module provides helpers for writing configuration files into
//! temporary directories and for safely mutating process-global state
//! (current directory, environment variables) inside `#[serial]` tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `content` to `dir/relative`, creating parent directories.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard that changes the current directory and restores it on drop.
///
/// The current directory is process-global, so tests using this guard must
/// be marked `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    previous: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// RAII guard for setting and restoring environment variables.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the env var (useful for cleanup).
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears all `STYLEGUIDE_*` override variables for the guard's lifetime.
#[allow(dead_code)]
pub fn clear_styleguide_env_vars() -> Vec<EnvGuard> {
    [
        "STYLEGUIDE_CACHE",
        "STYLEGUIDE_CACHE_LOCATION",
        "STYLEGUIDE_IGNORE",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}
