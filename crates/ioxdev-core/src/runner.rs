//! Worker process execution with streamed output
//!
//! Launches an external worker and forwards its stdout/stderr line by line as
//! they arrive, so callers can surface progress in near-real-time instead of
//! waiting for the process to finish. The event stream is terminated by
//! exactly one [`OutputEvent::Done`].

use std::process::Stdio;
use tokio::io::AsyncBufReadExt;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::debug;

/// Terminal result of one worker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The worker exited with code 0
    Success,
    /// The worker exited with a non-zero code, preserved verbatim
    NonZeroExit(i32),
    /// The worker could not be spawned or waited on
    LaunchFailure(String),
}

/// Events emitted while a worker runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// One line of worker stdout
    Stdout(String),
    /// One line of worker stderr
    Stderr(String),
    /// The terminal outcome; always the last event on the stream
    Done(Outcome),
}

/// Spawn `program args...` and stream its output.
///
/// Single-shot: no retries and no timeout are imposed on the worker. A spawn
/// failure yields a single `Done(LaunchFailure)` carrying the OS error text;
/// the caller never observes a panic. Both output streams are drained before
/// the terminal event is sent, so no chunk ever follows `Done`.
pub fn spawn_worker(program: &str, args: &[String]) -> mpsc::Receiver<OutputEvent> {
    let (tx, rx) = mpsc::channel(64);
    debug!("Running: {} {}", program, args.join(" "));

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            let _ = tx.try_send(OutputEvent::Done(Outcome::LaunchFailure(e.to_string())));
            return rx;
        }
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let out_tx = tx.clone();
    let stdout_task = tokio::spawn(async move {
        let Some(stdout) = stdout else { return };
        let mut lines = tokio::io::BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if out_tx.send(OutputEvent::Stdout(line)).await.is_err() {
                break;
            }
        }
    });

    let err_tx = tx.clone();
    let stderr_task = tokio::spawn(async move {
        let Some(stderr) = stderr else { return };
        let mut lines = tokio::io::BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if err_tx.send(OutputEvent::Stderr(line)).await.is_err() {
                break;
            }
        }
    });

    tokio::spawn(async move {
        // Drain both streams first so the terminal event is last.
        let _ = stdout_task.await;
        let _ = stderr_task.await;

        let outcome = match child.wait().await {
            Ok(status) if status.success() => Outcome::Success,
            Ok(status) => Outcome::NonZeroExit(status.code().unwrap_or(-1)),
            Err(e) => Outcome::LaunchFailure(e.to_string()),
        };
        let _ = tx.send(OutputEvent::Done(outcome)).await;
    });

    rx
}
