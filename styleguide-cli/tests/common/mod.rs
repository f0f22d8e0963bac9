//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate tests from the caller's environment
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that change CLI behavior.
const STYLEGUIDE_ENV_VARS: &[&str] = &[
    "STYLEGUIDE_CONFIG",
    "STYLEGUIDE_CACHE",
    "STYLEGUIDE_CACHE_LOCATION",
    "STYLEGUIDE_IGNORE",
    "STYLEGUIDE_LOG_MODE",
];

/// Test environment with an isolated project directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the project directory.
    ///
    /// All `STYLEGUIDE_*` variables are removed so the caller's shell cannot
    /// leak configuration into the test.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("styleguide").expect("Failed to find styleguide binary");
        cmd.current_dir(&self.temp_path);
        for var in STYLEGUIDE_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the project directory.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `styleguide show --format json` and parse its output.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid JSON.
    pub fn show_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["show", "--format", "json"])
            .output()
            .expect("Failed to run show command");

        assert!(
            output.status.success(),
            "show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("show output is not valid JSON")
    }
}
