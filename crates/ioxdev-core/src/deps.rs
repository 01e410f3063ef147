//! Best-effort Python module presence checks
//!
//! The worker scripts import a handful of Python modules; this module checks
//! that they import cleanly and can attempt a pip install for missing ones.
//! Checks run fire-and-forget at startup and on demand via `ioxdev doctor`.
//! A failed check only produces a notification; no command is ever blocked
//! on it.

use crate::reporter::Reporter;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Python modules the worker scripts import
pub const REQUIRED_MODULES: &[&str] = &["astor", "ioxplugin", "fastjsonschema"];

/// Checks are advisory, so they get a bounded wait unlike workers.
const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Availability of one required module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatus {
    pub module: &'static str,
    pub available: bool,
}

/// Is `interpreter` resolvable on PATH at all?
pub fn interpreter_available(interpreter: &str) -> bool {
    which::which(interpreter).is_ok()
}

/// Check that `module` imports cleanly under `interpreter`.
async fn module_available(interpreter: &str, module: &str) -> bool {
    let check = tokio::time::timeout(
        CHECK_TIMEOUT,
        Command::new(interpreter)
            .arg("-c")
            .arg(format!("import {}", module))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status(),
    )
    .await;

    matches!(check, Ok(Ok(status)) if status.success())
}

/// Check every required module without attempting installs.
pub async fn scan(interpreter: &str) -> Vec<ModuleStatus> {
    let mut statuses = Vec::with_capacity(REQUIRED_MODULES.len());
    for &module in REQUIRED_MODULES {
        let available = module_available(interpreter, module).await;
        debug!("python module {}: available={}", module, available);
        statuses.push(ModuleStatus { module, available });
    }
    statuses
}

/// Check every required module and attempt a pip install for missing ones,
/// reporting the result of each attempt.
pub async fn ensure(interpreter: &str, reporter: &dyn Reporter) -> Vec<ModuleStatus> {
    let mut statuses = Vec::with_capacity(REQUIRED_MODULES.len());
    for &module in REQUIRED_MODULES {
        if module_available(interpreter, module).await {
            statuses.push(ModuleStatus {
                module,
                available: true,
            });
            continue;
        }

        reporter.info(&format!("{} is not installed. Installing...", module));
        let installed = install_module(module).await;
        if installed {
            reporter.info(&format!("{} installed successfully.", module));
        } else {
            reporter.error(&format!(
                "Failed to install {}. Install it manually with `pip3 install {}`.",
                module, module
            ));
        }
        statuses.push(ModuleStatus {
            module,
            available: installed,
        });
    }
    statuses
}

async fn install_module(module: &str) -> bool {
    let result = Command::new("pip3")
        .args(["install", module])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    matches!(result, Ok(status) if status.success())
}
