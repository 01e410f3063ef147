//! `ioxdev deploy` - push the plugin to the IoX device

use anyhow::Result;
use dialoguer::Confirm;
use ioxdev_core::{dispatch, CommandContext};

use crate::cli::DeployArgs;
use crate::commands::finish;
use crate::output;

pub async fn run(ctx: &CommandContext, args: DeployArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Deploy the plugin to the IoX device?")
            .default(true)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            output::info("Deployment cancelled.");
            return Ok(());
        }
    }

    let status = dispatch::deploy(ctx).await;
    finish(status)
}
