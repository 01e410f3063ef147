//! Error types for ioxdev-core
//!
//! Precondition failures (no workspace, missing descriptor) and worker
//! outcomes are modeled as closed enums of their own
//! ([`crate::descriptor::Resolution`], [`crate::runner::Outcome`],
//! [`crate::dispatch::CommandStatus`]); this type covers the fallible
//! operations that return `Result`.

use thiserror::Error;

/// Result type alias using ioxdev-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for ioxdev
#[derive(Error, Debug)]
pub enum Error {
    /// Copying a bundled template into the workspace failed
    #[error("Failed to copy template '{label}': {reason}")]
    TemplateCopy { label: String, reason: String },

    /// Template label with no entry in the bundled manifest
    #[error("Unknown template: {label}")]
    UnknownTemplate { label: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a template copy error
    pub fn template_copy(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TemplateCopy {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
