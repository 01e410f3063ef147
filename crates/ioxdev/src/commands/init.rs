//! `ioxdev init` - copy a descriptor template into the workspace

use anyhow::{bail, Result};
use dialoguer::Select;
use ioxdev_core::templates::{TemplateCatalog, TemplateOption};
use ioxdev_core::{dispatch, CommandContext};

use crate::cli::InitArgs;
use crate::commands::finish;

pub async fn run(ctx: &CommandContext, args: InitArgs) -> Result<()> {
    let catalog = TemplateCatalog::load()?;

    let selection = match args.template {
        Some(label) => match catalog.find(&label) {
            Some(option) => Some(option.clone()),
            None => bail!(
                "Unknown template '{}'. Run `ioxdev init` without --template to pick one.",
                label
            ),
        },
        None => pick_template(&catalog)?,
    };

    let status = dispatch::author_descriptor(ctx, &catalog, selection.as_ref()).await;
    finish(status)
}

/// Interactive template quick-pick. Esc yields `None` (cancelled).
pub(crate) fn pick_template(catalog: &TemplateCatalog) -> Result<Option<TemplateOption>> {
    let labels: Vec<&str> = catalog.options().iter().map(|o| o.label.as_str()).collect();

    let picked = Select::new()
        .with_prompt("Please choose a template")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(picked.map(|index| catalog.options()[index].clone()))
}
