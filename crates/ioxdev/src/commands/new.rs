//! `ioxdev new` - scaffold a plugin project via the new-project worker

use anyhow::Result;
use dialoguer::Input;
use ioxdev_core::{dispatch, CommandContext};

use crate::cli::NewArgs;
use crate::commands::finish;

pub async fn run(ctx: &CommandContext, args: NewArgs) -> Result<()> {
    let destination = match args.path {
        Some(path) => Some(path.to_string()),
        None => prompt_destination(ctx),
    };

    let status = dispatch::create_project(ctx, destination).await;
    finish(status)
}

/// Ask where the project should be created, defaulting to the open
/// workspace. A cancelled prompt yields `None`, which the flow reports.
fn prompt_destination(ctx: &CommandContext) -> Option<String> {
    let mut input = Input::<String>::new().with_prompt("Path for the new IoX plugin project");
    if let Some(root) = &ctx.workspace_root {
        input = input.default(root.display().to_string());
    }
    input.interact_text().ok()
}
