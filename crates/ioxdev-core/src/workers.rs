//! Worker scripts and their invocation contract
//!
//! The actual generation, registration, and deployment work is done by the
//! bundled Python scripts; this layer only knows their argument and
//! exit-code contract. Exit code 0 means success, anything else is surfaced
//! to the user verbatim.

use std::path::{Path, PathBuf};

/// Interpreter used to launch worker scripts. Not configurable; the
/// configurable interpreter override applies to dependency checks only.
pub const WORKER_INTERPRETER: &str = "python3";

/// The external workers this tool orchestrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerKind {
    /// `new_project.py (destination, install_root)`
    NewProject,
    /// `plugin.py (workspace_root, descriptor_path)`
    GenerateCode,
    /// `local_store.py (workspace_root, descriptor_path, email, dev_user)`
    LocalRegistration,
    /// `install_on_iox.py (workspace_root, descriptor_path)`
    Deploy,
}

impl WorkerKind {
    /// Script file name under the install root's `code/` directory
    pub fn script_name(self) -> &'static str {
        match self {
            WorkerKind::NewProject => "new_project.py",
            WorkerKind::GenerateCode => "plugin.py",
            WorkerKind::LocalRegistration => "local_store.py",
            WorkerKind::Deploy => "install_on_iox.py",
        }
    }

    /// Human-readable name used in notifications
    pub fn describe(self) -> &'static str {
        match self {
            WorkerKind::NewProject => "IoX plugin project generation",
            WorkerKind::GenerateCode => "IoX plugin code generation",
            WorkerKind::LocalRegistration => "Local store registration",
            WorkerKind::Deploy => "Deployment to IoX",
        }
    }

    /// Full path of the worker script for a given install root
    pub fn script_path(self, install_root: &Path) -> PathBuf {
        install_root.join("code").join(self.script_name())
    }
}
