//! `ioxdev doctor` - check for the Python tooling the workers need

use anyhow::Result;
use ioxdev_core::deps;
use ioxdev_core::workers::WORKER_INTERPRETER;
use ioxdev_core::CommandContext;
use owo_colors::OwoColorize;

use crate::cli::DoctorArgs;
use crate::output;

pub async fn run(ctx: &CommandContext, args: DoctorArgs) -> Result<()> {
    println!("{}", "Python prerequisites".bold());
    println!("{}", "─".repeat(40));

    if deps::interpreter_available(WORKER_INTERPRETER) {
        output::success(&format!("{} found on PATH", WORKER_INTERPRETER));
    } else {
        output::error(&format!(
            "{} not found on PATH; worker scripts cannot run",
            WORKER_INTERPRETER
        ));
    }
    if ctx.check_interpreter != WORKER_INTERPRETER {
        output::info(&format!(
            "Module checks use the configured interpreter: {}",
            ctx.check_interpreter
        ));
    }

    let spinner = output::spinner("Checking Python modules...");
    let statuses = deps::scan(&ctx.check_interpreter).await;
    spinner.finish_and_clear();

    for status in &statuses {
        let icon = if status.available {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        println!("  {} {}", icon, status.module);
    }
    println!();

    let missing = statuses.iter().filter(|s| !s.available).count();
    if missing == 0 {
        output::success("All required Python modules are available.");
        return Ok(());
    }

    if args.fix {
        output::info(&format!(
            "Attempting to install {} missing module(s)...",
            missing
        ));
        let after = deps::ensure(&ctx.check_interpreter, ctx.reporter.as_ref()).await;
        let still_missing = after.iter().filter(|s| !s.available).count();
        if still_missing == 0 {
            output::success("All required Python modules are available.");
        } else {
            output::warning(&format!("{} module(s) still missing.", still_missing));
        }
    } else {
        output::warning(&format!(
            "{} module(s) missing. Re-run with --fix, or install them with `pip3 install <module>`.",
            missing
        ));
    }

    Ok(())
}
