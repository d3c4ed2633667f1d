// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::config::MonitorConfig;
use crate::errors::Result;
use crate::exec::ExecutorBackend;
use crate::fs::FileSystem;

use super::core::{ChangeDetector, CycleOutcome};

/// The monitor loop: scan, run the command if something changed, sleep.
///
/// This is the async IO shell around [`ChangeDetector`]. Work never
/// overlaps: the command is awaited to completion before the sleep starts,
/// and the next scan only begins after the sleep.
pub struct Monitor<E: ExecutorBackend> {
    detector: ChangeDetector,
    executor: E,
}

impl<E: ExecutorBackend> fmt::Debug for Monitor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("detector", &self.detector)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend> Monitor<E> {
    pub fn new(
        config: MonitorConfig,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        executor: E,
    ) -> Self {
        Self {
            detector: ChangeDetector::new(Arc::new(config), fs, clock),
            executor,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        self.detector.config()
    }

    /// One cycle without the trailing sleep.
    ///
    /// Runs the command at most once and waits for it to finish. A failing
    /// command does not fail the cycle.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let outcome = self.detector.detect();

        if outcome.is_changed() {
            let cmd = &self.detector.config().command;
            let result = self.executor.run_command(cmd).await?;
            debug!(cmd = %cmd, outcome = ?result, "command finished");
        }

        Ok(outcome)
    }

    /// Main loop. Only returns on a fatal error.
    ///
    /// The sleep is always the full interval, however long the scan and the
    /// command took.
    pub async fn run(mut self) -> Result<()> {
        let interval = self.config().interval;
        debug!(
            root = %self.config().root.display(),
            pattern = self.config().pattern.as_str(),
            interval_secs = interval.as_secs(),
            cmd = %self.config().command,
            "monitor started"
        );

        loop {
            self.run_cycle().await?;
            debug!("waiting for next iteration");
            tokio::time::sleep(interval).await;
        }
    }
}
