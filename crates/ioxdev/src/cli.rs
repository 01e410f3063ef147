//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// ioxdev - author, generate, register, and deploy IoX plugins
#[derive(Parser, Debug)]
#[command(name = "ioxdev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Workspace directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new IoX plugin project
    New(NewArgs),

    /// Create a plugin descriptor from a bundled template
    Init(InitArgs),

    /// Generate plugin code from the workspace descriptor
    Generate(GenerateArgs),

    /// Register the plugin with the local IoX store
    Register(RegisterArgs),

    /// Deploy the plugin to the IoX device
    Deploy(DeployArgs),

    /// Check Python interpreter and module prerequisites
    Doctor(DoctorArgs),
}

// New command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Destination directory for the new project (prompted for if omitted)
    #[arg(short, long)]
    pub path: Option<Utf8PathBuf>,
}

// Init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Template label to use instead of the interactive picker
    #[arg(short, long)]
    pub template: Option<String>,
}

// Generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Create a descriptor without asking when none exists yet
    #[arg(short = 'y', long)]
    pub yes: bool,
}

// Register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Developer account email address recorded in the store entry
    #[arg(long, default_value = "n/a")]
    pub email: String,

    /// Local development-machine user recorded in the store entry
    #[arg(long = "dev-user", default_value = "n/a")]
    pub dev_user: String,
}

// Deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

// Doctor command
#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Attempt to install missing Python modules
    #[arg(long)]
    pub fix: bool,
}
