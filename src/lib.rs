// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod watch;

use std::sync::Arc;

use tracing::info;

use crate::clock::SystemClock;
use crate::config::MonitorConfig;
use crate::engine::Monitor;
use crate::errors::Result;
use crate::exec::RealExecutorBackend;
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the real filesystem and wall clock
/// - the process executor
/// - the monitor loop
/// - Ctrl-C handling
///
/// Returns `Ok(())` only after an interrupt.
pub async fn run(config: MonitorConfig) -> Result<()> {
    let monitor = Monitor::new(
        config,
        Arc::new(RealFileSystem),
        Arc::new(SystemClock),
        RealExecutorBackend::new(),
    );

    run_until_interrupted(monitor.run(), tokio::signal::ctrl_c()).await
}

/// Drive `work` until it fails or `interrupt` resolves.
///
/// Whatever `work` was doing is dropped on interrupt; a running child
/// process is left to the terminal's own signal.
pub async fn run_until_interrupted<W, I>(work: W, interrupt: I) -> Result<()>
where
    W: std::future::Future<Output = Result<()>>,
    I: std::future::Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        res = work => res,
        sig = interrupt => {
            sig?;
            info!("shutting down...");
            Ok(())
        }
    }
}
