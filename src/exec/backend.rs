// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The monitor talks to an `ExecutorBackend` instead of spawning processes
//! itself. This makes it easy to swap in a fake executor in tests.
//!
//! - `RealExecutorBackend` is the implementation used by `pollwatch`. It
//!   spawns the program with `tokio::process::Command`, inherits stdio and
//!   waits for it to exit.
//! - Tests can provide their own `ExecutorBackend` that records which
//!   commands were run.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::command::CommandLine;

/// How a command invocation ended.
///
/// The monitor only logs this; it never retries or stops on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process ran and exited with this code (`None` if killed by a
    /// signal).
    Exited(Option<i32>),
    /// The process could not be started (e.g. program not found).
    FailedToStart,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        matches!(self, CommandOutcome::Exited(Some(0)))
    }
}

/// Trait abstracting how the user command is executed.
///
/// Implementations must not return before the command has finished.
pub trait ExecutorBackend: Send {
    fn run_command<'a>(
        &'a mut self,
        cmd: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}

/// Real executor backend used in production.
#[derive(Debug, Clone, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn run_command<'a>(
        &'a mut self,
        cmd: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(async move {
            info!(cmd = %cmd, "running command");

            // The child handle is owned by this future and awaited before
            // returning; it is not killed if the future is dropped.
            let mut child = match Command::new(cmd.program()).args(cmd.args()).spawn() {
                Ok(child) => child,
                Err(err) => {
                    warn!(cmd = %cmd, error = %err, "failed to start command");
                    return Ok(CommandOutcome::FailedToStart);
                }
            };

            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for command '{cmd}'"))?;

            let outcome = CommandOutcome::Exited(status.code());
            debug!(
                cmd = %cmd,
                exit_code = ?status.code(),
                success = status.success(),
                "command exited"
            );
            Ok(outcome)
        })
    }
}
