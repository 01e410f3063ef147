//! Command flows composing descriptor resolution, templates, and workers
//!
//! Each flow follows the same protocol: validate the workspace, resolve the
//! descriptor when the worker needs one, build the invocation, stream the
//! worker's output to the reporter, and translate the terminal outcome into
//! a notification. Flows receive everything through an explicit
//! [`CommandContext`]; nothing is read from ambient state. A flow that fails
//! its preconditions never spawns a worker, and it reports through the sink
//! rather than surfacing a fault to the caller.
//!
//! Concurrent flows against the same descriptor are not serialized; there is
//! no de-duplication or cancellation of an in-flight worker. Output already
//! handed to the reporter is never retracted.

use crate::config::DEFAULT_INTERPRETER;
use crate::descriptor::{self, DescriptorRef, Resolution};
use crate::reporter::Reporter;
use crate::runner::{self, Outcome, OutputEvent};
use crate::templates::{TemplateCatalog, TemplateOption};
use crate::workers::{WorkerKind, WORKER_INTERPRETER};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Everything a command flow needs, passed explicitly.
#[derive(Clone)]
pub struct CommandContext {
    /// Workspace root, if one is open. `None` means no workspace.
    pub workspace_root: Option<PathBuf>,
    /// Where the bundled Python package and worker scripts live
    pub install_root: PathBuf,
    /// Program used to launch worker scripts
    pub worker_program: String,
    /// Interpreter for dependency checks; the one knob `ioxdev.yaml` offers
    pub check_interpreter: String,
    /// Sink for user-facing notifications
    pub reporter: Arc<dyn Reporter>,
}

impl CommandContext {
    pub fn new(
        workspace_root: Option<PathBuf>,
        install_root: PathBuf,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            workspace_root,
            install_root,
            worker_program: WORKER_INTERPRETER.to_string(),
            check_interpreter: DEFAULT_INTERPRETER.to_string(),
            reporter,
        }
    }
}

/// Why a flow stopped before doing any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// No workspace root is open
    NoWorkspace,
    /// The workspace holds no plugin descriptor
    DescriptorMissing,
    /// The user cancelled an input prompt
    Cancelled,
}

/// How a flow ended. Mirrors what was already reported through the sink so
/// the caller only has to pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    /// Stopped before any worker was spawned
    Aborted(AbortReason),
    /// A local operation (template copy) failed
    Failed,
    /// The worker ran and exited non-zero; the code is preserved verbatim
    WorkerFailed(i32),
    /// The worker could not be spawned
    LaunchFailed,
}

impl CommandStatus {
    pub fn is_success(self) -> bool {
        matches!(self, CommandStatus::Succeeded)
    }
}

const NO_WORKSPACE_MSG: &str = "No open workspace. Open a project directory first.";

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Scaffold a new plugin project at `destination`.
///
/// No descriptor is required. `None` means the destination prompt was
/// cancelled; the flow reports the cancellation and spawns nothing.
pub async fn create_project(ctx: &CommandContext, destination: Option<String>) -> CommandStatus {
    let Some(destination) = destination else {
        ctx.reporter.error("Project creation cancelled.");
        return CommandStatus::Aborted(AbortReason::Cancelled);
    };

    let args = vec![destination, path_arg(&ctx.install_root)];
    run_worker(ctx, WorkerKind::NewProject, args).await
}

/// Copy a descriptor template into the workspace root.
///
/// Interactive selection happens at the caller; `None` means the picker was
/// cancelled. No worker process is involved.
pub async fn author_descriptor(
    ctx: &CommandContext,
    catalog: &TemplateCatalog,
    selection: Option<&TemplateOption>,
) -> CommandStatus {
    let Some(root) = ctx.workspace_root.as_deref() else {
        ctx.reporter.error(NO_WORKSPACE_MSG);
        return CommandStatus::Aborted(AbortReason::NoWorkspace);
    };

    let Some(option) = selection else {
        ctx.reporter.info("Template selection cancelled.");
        return CommandStatus::Aborted(AbortReason::Cancelled);
    };

    match catalog.install(option, root) {
        Ok(dest) => {
            ctx.reporter
                .info(&format!("Template copied to {}", dest.display()));
            ctx.reporter.request_refresh();
            CommandStatus::Succeeded
        }
        Err(e) => {
            ctx.reporter.error(&format!("Failed to copy template: {}", e));
            CommandStatus::Failed
        }
    }
}

/// Run the code generator against the workspace descriptor.
pub async fn generate_code(ctx: &CommandContext) -> CommandStatus {
    let (root, descriptor) = match require_descriptor(ctx) {
        Ok(found) => found,
        Err(status) => return status,
    };

    ctx.reporter.info(&format!(
        "Generating plugin code for {}.",
        descriptor.path.display()
    ));
    let args = vec![path_arg(&root), path_arg(&descriptor.path)];
    run_worker(ctx, WorkerKind::GenerateCode, args).await
}

/// Register the plugin with the local IoX store.
pub async fn register_locally(
    ctx: &CommandContext,
    email: &str,
    dev_user: &str,
) -> CommandStatus {
    let (root, descriptor) = match require_descriptor(ctx) {
        Ok(found) => found,
        Err(status) => return status,
    };

    let args = vec![
        path_arg(&root),
        path_arg(&descriptor.path),
        email.to_string(),
        dev_user.to_string(),
    ];
    run_worker(ctx, WorkerKind::LocalRegistration, args).await
}

/// Deploy the plugin to the IoX device.
pub async fn deploy(ctx: &CommandContext) -> CommandStatus {
    let (root, descriptor) = match require_descriptor(ctx) {
        Ok(found) => found,
        Err(status) => return status,
    };

    let args = vec![path_arg(&root), path_arg(&descriptor.path)];
    run_worker(ctx, WorkerKind::Deploy, args).await
}

/// Resolve the descriptor a worker-backed flow depends on.
///
/// Resolution is fresh per flow run. On `NotFound` the user is pointed at
/// the creation path and the flow aborts; commands never auto-chain past
/// descriptor creation in the same run.
fn require_descriptor(
    ctx: &CommandContext,
) -> std::result::Result<(PathBuf, DescriptorRef), CommandStatus> {
    let Some(root) = ctx.workspace_root.clone() else {
        ctx.reporter.error(NO_WORKSPACE_MSG);
        return Err(CommandStatus::Aborted(AbortReason::NoWorkspace));
    };

    match descriptor::resolve(Some(&root)) {
        Resolution::Found(descriptor) => Ok((root, descriptor)),
        Resolution::NotFound => {
            ctx.reporter.error(
                "You don't have any IoX plugin descriptor files. Run `ioxdev init` to create one.",
            );
            Err(CommandStatus::Aborted(AbortReason::DescriptorMissing))
        }
        Resolution::NoWorkspace => {
            ctx.reporter.error(NO_WORKSPACE_MSG);
            Err(CommandStatus::Aborted(AbortReason::NoWorkspace))
        }
    }
}

/// Shared invoke-and-report skeleton for every worker-backed flow.
///
/// Streams each output line to the reporter as it arrives, then translates
/// the single terminal outcome: success gets a notification plus a
/// workspace-refresh request, failures get an error notification carrying
/// the exit code or launch error verbatim.
async fn run_worker(ctx: &CommandContext, kind: WorkerKind, extra_args: Vec<String>) -> CommandStatus {
    let script = kind.script_path(&ctx.install_root);
    let mut args = vec![path_arg(&script)];
    args.extend(extra_args);
    debug!("{}: {} {}", kind.describe(), ctx.worker_program, args.join(" "));

    let mut events = runner::spawn_worker(&ctx.worker_program, &args);
    while let Some(event) = events.recv().await {
        match event {
            OutputEvent::Stdout(line) => ctx.reporter.info(&line),
            OutputEvent::Stderr(line) => ctx.reporter.error(&line),
            OutputEvent::Done(outcome) => {
                return match outcome {
                    Outcome::Success => {
                        ctx.reporter
                            .info(&format!("{} completed successfully.", kind.describe()));
                        ctx.reporter.request_refresh();
                        CommandStatus::Succeeded
                    }
                    Outcome::NonZeroExit(code) => {
                        ctx.reporter
                            .error(&format!("{} exited with code {}.", kind.describe(), code));
                        CommandStatus::WorkerFailed(code)
                    }
                    Outcome::LaunchFailure(reason) => {
                        ctx.reporter
                            .error(&format!("Failed to launch {}: {}", kind.describe(), reason));
                        CommandStatus::LaunchFailed
                    }
                };
            }
        }
    }

    // The stream closed without a terminal event; treat it as a launch
    // failure so the invariant of one reported outcome per run holds.
    ctx.reporter
        .error(&format!("{} ended without an exit status.", kind.describe()));
    CommandStatus::LaunchFailed
}
