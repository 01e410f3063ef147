//! # ioxdev-core
//!
//! Core library for the IoX plugin development CLI providing:
//! - Plugin descriptor discovery within a workspace
//! - Worker process execution with streamed output
//! - Bundled descriptor templates
//! - The command flows composing the above
//!
//! The actual generation/registration/deployment logic lives in external
//! Python worker scripts; this crate only knows their invocation contract.

pub mod config;
pub mod deps;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod reporter;
pub mod runner;
pub mod templates;
pub mod utils;
pub mod workers;

pub use config::IoxConfig;
pub use dispatch::{AbortReason, CommandContext, CommandStatus};
pub use error::{Error, Result};
pub use reporter::Reporter;
