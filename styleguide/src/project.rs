//! Project type detection.
//!
//! Probes a directory for sentinel files whose presence suggests which
//! language configurations are worth enabling. Only existence is checked;
//! file contents are never read.

use serde::Serialize;
use std::env;
use std::path::Path;

/// Sentinels for Node.js projects.
pub const NODE_SENTINELS: &[&str] = &["package.json", "tsconfig.json"];
/// Sentinels for Python projects.
pub const PYTHON_SENTINELS: &[&str] = &["pyproject.toml", "setup.py", "requirements.txt"];
/// Sentinels for Terraform root modules.
pub const TERRAFORM_SENTINELS: &[&str] = &["main.tf"];
/// Sentinels for containerized projects.
pub const DOCKER_SENTINELS: &[&str] = &["Dockerfile", "docker-compose.yml"];
/// Sentinels for Ansible projects.
pub const ANSIBLE_SENTINELS: &[&str] = &["ansible.cfg", "playbook.yml"];

/// Which kinds of project a directory looks like.
///
/// # Examples
///
/// ```
/// use styleguide::ProjectType;
///
/// let none = ProjectType::default();
/// assert!(!none.any());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectType {
    /// A Node.js manifest or TypeScript config is present.
    pub has_node: bool,
    /// A Python project marker is present.
    pub has_python: bool,
    /// A Terraform root file is present.
    pub has_terraform: bool,
    /// A Dockerfile or compose file is present.
    pub has_docker: bool,
    /// An Ansible config or playbook is present.
    pub has_ansible: bool,
}

impl ProjectType {
    /// Probe `dir` for sentinel files.
    ///
    /// A missing or unreadable directory yields all flags `false`.
    #[must_use]
    pub fn detect(dir: &Path) -> Self {
        let any_exists = |sentinels: &[&str]| sentinels.iter().any(|name| dir.join(name).exists());

        Self {
            has_node: any_exists(NODE_SENTINELS),
            has_python: any_exists(PYTHON_SENTINELS),
            has_terraform: any_exists(TERRAFORM_SENTINELS),
            has_docker: any_exists(DOCKER_SENTINELS),
            has_ansible: any_exists(ANSIBLE_SENTINELS),
        }
    }

    /// Whether any flag is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.has_node || self.has_python || self.has_terraform || self.has_docker || self.has_ansible
    }

    /// `(name, flag)` pairs in a fixed order, for display.
    #[must_use]
    pub fn flags(&self) -> [(&'static str, bool); 5] {
        [
            ("node", self.has_node),
            ("python", self.has_python),
            ("terraform", self.has_terraform),
            ("docker", self.has_docker),
            ("ansible", self.has_ansible),
        ]
    }
}

/// Probe the current working directory for sentinel files.
///
/// Returns all flags `false` if the current directory cannot be determined.
#[must_use]
pub fn detect_project_type() -> ProjectType {
    match env::current_dir() {
        Ok(dir) => ProjectType::detect(&dir),
        Err(e) => {
            log::debug!("cannot read current directory for project detection: {e}");
            ProjectType::default()
        }
    }
}
