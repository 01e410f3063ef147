//! ioxdev - IoX plugin development CLI
//!
//! This is the main entry point: parse arguments, initialize tracing, kick
//! off the advisory Python dependency check, and dispatch to a command.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    let ctx = commands::build_context(&cli)?;

    // Advisory module check, fire-and-forget; it only ever produces
    // notifications and never blocks the command being run. The doctor
    // command does its own reporting instead.
    if !matches!(cli.command, Commands::Doctor(_)) {
        let interpreter = ctx.check_interpreter.clone();
        let reporter = ctx.reporter.clone();
        tokio::spawn(async move {
            ioxdev_core::deps::ensure(&interpreter, reporter.as_ref()).await;
        });
    }

    // Run command
    match cli.command {
        Commands::New(args) => commands::new::run(&ctx, args).await,
        Commands::Init(args) => commands::init::run(&ctx, args).await,
        Commands::Generate(args) => commands::generate::run(&ctx, args).await,
        Commands::Register(args) => commands::register::run(&ctx, args).await,
        Commands::Deploy(args) => commands::deploy::run(&ctx, args).await,
        Commands::Doctor(args) => commands::doctor::run(&ctx, args).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
