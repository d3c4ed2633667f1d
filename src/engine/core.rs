// src/engine/core.rs

//! Synchronous half of a monitor cycle: scan and decide.
//!
//! Nothing here spawns processes or sleeps, so it can be tested against a
//! `MockFileSystem` and a fixed clock without Tokio.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::clock::Clock;
use crate::config::MonitorConfig;
use crate::fs::FileSystem;
use crate::watch::find_recent_match;

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A matching file changed inside the window; the command should run.
    Changed(PathBuf),
    Unchanged,
}

impl CycleOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, CycleOutcome::Changed(_))
    }
}

/// Scans the configured tree once per call.
///
/// Holds no state between calls: every cycle is judged against "now" only.
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    config: Arc<MonitorConfig>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
}

impl ChangeDetector {
    pub fn new(
        config: Arc<MonitorConfig>,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { config, fs, clock }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Scan the tree and report whether any matching file changed recently.
    pub fn detect(&self) -> CycleOutcome {
        let now = self.clock.now();
        let window = self.config.window();

        match find_recent_match(
            self.fs.as_ref(),
            &self.config.root,
            &self.config.pattern,
            &window,
            now,
        ) {
            Some(path) => {
                info!(path = %path.display(), "file modified");
                CycleOutcome::Changed(path)
            }
            None => CycleOutcome::Unchanged,
        }
    }
}
