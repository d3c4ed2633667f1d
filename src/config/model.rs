// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::exec::CommandLine;
use crate::watch::{NamePattern, RecencyWindow};

/// Default polling interval in seconds (`-i`).
pub const DEFAULT_INTERVAL_SECS: u64 = 1;

/// Default file-name pattern (`-p`); matches every name.
pub const DEFAULT_PATTERN: &str = ".*";

/// Validated monitor configuration.
///
/// Built once at startup (see `TryFrom<CliArgs>`) and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Directory whose tree is scanned. `.` when built from the CLI.
    pub root: PathBuf,
    pub command: CommandLine,
    pub pattern: NamePattern,
    pub interval: Duration,
    pub verbose: bool,
}

impl MonitorConfig {
    pub fn new(command: CommandLine, pattern: NamePattern, interval: Duration) -> Self {
        Self {
            root: PathBuf::from("."),
            command,
            pattern,
            interval,
            verbose: false,
        }
    }

    /// Recency window derived from the polling interval.
    pub fn window(&self) -> RecencyWindow {
        RecencyWindow::new(self.interval)
    }
}
