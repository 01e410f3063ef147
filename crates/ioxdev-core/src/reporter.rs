//! Reporting sink consumed by the command flows
//!
//! The host UI (terminal, editor panel) implements this; the flows in
//! [`crate::dispatch`] only ever talk to the trait. Output already handed to
//! the sink is never retracted, even when the command later fails.

/// User-facing notification sink.
pub trait Reporter: Send + Sync {
    /// Informational notification (worker stdout, progress, success).
    fn info(&self, text: &str);

    /// Error notification (worker stderr, failures).
    fn error(&self, text: &str);

    /// Ask the host to refresh its view of the workspace after a command
    /// changed its contents.
    fn request_refresh(&self);
}
