//! Integration tests for sentinel-file project detection.

mod common;

use common::{create_temp_config, CwdGuard};
use serial_test::serial;
use styleguide::{detect_project_type, ProjectType};
use tempfile::TempDir;

#[test]
#[serial]
fn test_detects_python_in_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    create_temp_config(temp_dir.path(), "pyproject.toml", "[project]\nname = \"demo\"\n");

    let _cwd = CwdGuard::enter(temp_dir.path());
    let detected = detect_project_type();

    assert!(detected.has_python);
    assert!(!detected.has_node);
    assert!(!detected.has_terraform);
    assert!(!detected.has_docker);
    assert!(!detected.has_ansible);
}

#[test]
#[serial]
fn test_empty_current_directory_detects_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(temp_dir.path());

    assert_eq!(detect_project_type(), ProjectType::default());
}

#[test]
fn test_sentinel_contents_are_irrelevant() {
    let temp_dir = TempDir::new().unwrap();
    create_temp_config(temp_dir.path(), "package.json", "this is not json");
    create_temp_config(temp_dir.path(), "Dockerfile", "");

    let detected = ProjectType::detect(temp_dir.path());
    assert!(detected.has_node);
    assert!(detected.has_docker);
    assert!(detected.any());
}

#[test]
fn test_sentinels_in_subdirectories_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    create_temp_config(temp_dir.path(), "infra/main.tf", "");
    create_temp_config(temp_dir.path(), "deploy/playbook.yml", "");

    let detected = ProjectType::detect(temp_dir.path());
    assert!(!detected.has_terraform);
    assert!(!detected.has_ansible);
}

#[test]
fn test_sentinel_directory_counts_as_present() {
    // existence is all that matters, even for a directory named like a sentinel
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("ansible.cfg")).unwrap();

    assert!(ProjectType::detect(temp_dir.path()).has_ansible);
}
