//! Shared fixtures for dispatch flow tests

use ioxdev_core::dispatch::CommandContext;
use ioxdev_core::Reporter;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Reporter that records every notification for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    refreshes: AtomicUsize,
}

impl RecordingReporter {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    pub fn saw_info(&self, needle: &str) -> bool {
        self.infos().iter().any(|m| m.contains(needle))
    }

    pub fn saw_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|m| m.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, text: &str) {
        self.infos.lock().unwrap().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.errors.lock().unwrap().push(text.to_string());
    }

    fn request_refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Drop a fake worker script under `<install_root>/code/`.
///
/// Workers are launched through `sh` in these tests, so the body is plain
/// shell regardless of the `.py` name the dispatcher expects.
pub fn write_worker(install_root: &Path, script_name: &str, body: &str) {
    let code_dir = install_root.join("code");
    std::fs::create_dir_all(&code_dir).unwrap();
    std::fs::write(code_dir.join(script_name), body).unwrap();
}

/// Context wired to the recording reporter, with workers launched via `sh`.
pub fn test_context(
    workspace_root: Option<PathBuf>,
    install_root: PathBuf,
) -> (CommandContext, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let mut ctx = CommandContext::new(workspace_root, install_root, reporter.clone());
    ctx.worker_program = "sh".to_string();
    (ctx, reporter)
}
