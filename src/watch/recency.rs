// src/watch/recency.rs

//! The "recently changed" test.

use std::time::{Duration, SystemTime};

/// Fixed allowance for clock and filesystem timestamp granularity.
///
/// Added on top of the polling interval; it does not scale with it.
pub const GRANULARITY_SLACK: Duration = Duration::from_secs(1);

/// Window of modification times that count as "recent" for one cycle.
///
/// A file modified at `mtime` is recent iff `now < mtime + interval + 1s`.
/// Nothing is remembered between cycles, so one edit can trigger on several
/// consecutive cycles while it stays inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    interval: Duration,
}

impl RecencyWindow {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Full width of the window, interval plus slack.
    pub fn span(&self) -> Duration {
        self.interval.saturating_add(GRANULARITY_SLACK)
    }

    /// Whether a file modified at `mtime` counts as changed at `now`.
    pub fn contains(&self, mtime: SystemTime, now: SystemTime) -> bool {
        match mtime.checked_add(self.span()) {
            Some(deadline) => now < deadline,
            // Unrepresentably far in the future.
            None => true,
        }
    }
}
