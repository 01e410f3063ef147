//! `ioxdev register` - add the plugin to the local IoX store

use anyhow::Result;
use ioxdev_core::{dispatch, CommandContext};

use crate::cli::RegisterArgs;
use crate::commands::finish;

pub async fn run(ctx: &CommandContext, args: RegisterArgs) -> Result<()> {
    let status = dispatch::register_locally(ctx, &args.email, &args.dev_user).await;
    finish(status)
}
