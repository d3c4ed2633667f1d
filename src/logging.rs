// src/logging.rs

//! Logging setup for `pollwatch` using `tracing` + `tracing-subscriber`.
//!
//! The level is chosen once from the `--verbose` flag:
//! - verbose: `debug` (file modified, waiting for next iteration, ...)
//! - otherwise: `warn`, so errors are always reported
//!
//! Logs are sent to STDERR so that stdout belongs to the user command.

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise global logging subscriber.
///
/// Must be called once at startup, before the monitor loop starts.
pub fn init_logging(verbose: bool) -> Result<()> {
    fmt()
        .with_max_level(level_for(verbose))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

/// Maximum log level for the given verbosity flag.
pub fn level_for(verbose: bool) -> tracing::Level {
    if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    }
}
