//! `ioxdev generate` - run the code generator against the descriptor

use anyhow::Result;
use dialoguer::Confirm;
use ioxdev_core::templates::TemplateCatalog;
use ioxdev_core::{dispatch, AbortReason, CommandContext, CommandStatus};

use crate::cli::GenerateArgs;
use crate::commands::finish;

pub async fn run(ctx: &CommandContext, args: GenerateArgs) -> Result<()> {
    let status = dispatch::generate_code(ctx).await;

    // Recovery path: offer to create a descriptor, then stop. The user
    // fills it in and re-runs generate; the two steps never chain.
    if status == CommandStatus::Aborted(AbortReason::DescriptorMissing)
        && offer_creation(args.yes)
    {
        let catalog = TemplateCatalog::load()?;
        let selection = crate::commands::init::pick_template(&catalog)?;
        let created = dispatch::author_descriptor(ctx, &catalog, selection.as_ref()).await;
        if created.is_success() {
            ctx.reporter
                .info("Fill in the descriptor, then re-run `ioxdev generate`.");
        }
        return finish(created);
    }

    finish(status)
}

fn offer_creation(yes: bool) -> bool {
    if yes {
        return true;
    }
    Confirm::new()
        .with_prompt("Create a descriptor now?")
        .default(true)
        .interact()
        .unwrap_or(false)
}
