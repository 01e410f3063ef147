//! CLI command implementations

pub mod deploy;
pub mod doctor;
pub mod generate;
pub mod init;
pub mod new;
pub mod register;

use anyhow::{Context, Result};
use camino::Utf8Path;
use ioxdev_core::{CommandContext, CommandStatus, IoxConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use crate::cli::Cli;
use crate::output::ConsoleReporter;

/// Build the explicit context every flow receives.
pub fn build_context(cli: &Cli) -> Result<CommandContext> {
    let workspace_root = resolve_workspace_root(cli.workspace.as_deref());

    // A broken config file must not block commands; fall back to defaults.
    let config = match IoxConfig::load(workspace_root.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable ioxdev.yaml: {}", e);
            IoxConfig::default()
        }
    };

    let install_root =
        ioxdev_core::utils::install_root().context("Failed to locate the ioxdev install root")?;

    let mut ctx = CommandContext::new(
        workspace_root,
        install_root,
        Arc::new(ConsoleReporter::default()),
    );
    ctx.check_interpreter = config.interpreter().to_string();
    Ok(ctx)
}

/// The workspace root is the `--workspace` flag or the current directory;
/// either way it must exist, otherwise commands see "no workspace".
fn resolve_workspace_root(flag: Option<&Utf8Path>) -> Option<PathBuf> {
    let root = match flag {
        Some(path) => path.as_std_path().to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    root.is_dir().then_some(root)
}

/// Map a flow status onto the process exit code. Everything user-facing was
/// already reported by the flow itself.
pub fn finish(status: CommandStatus) -> Result<()> {
    match status {
        CommandStatus::Succeeded => Ok(()),
        // Preserve the worker's exit code where the platform allows it.
        CommandStatus::WorkerFailed(code) if (1..=255).contains(&code) => std::process::exit(code),
        CommandStatus::WorkerFailed(_)
        | CommandStatus::Aborted(_)
        | CommandStatus::Failed
        | CommandStatus::LaunchFailed => std::process::exit(1),
    }
}
