#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use pollwatch::config::{MonitorConfig, DEFAULT_INTERVAL_SECS, DEFAULT_PATTERN};
use pollwatch::exec::CommandLine;
use pollwatch::watch::NamePattern;

/// Builder for `MonitorConfig` to simplify test setup.
pub struct MonitorConfigBuilder {
    root: PathBuf,
    cmd: String,
    pattern: String,
    interval: Duration,
    verbose: bool,
}

impl MonitorConfigBuilder {
    pub fn new(cmd: &str) -> Self {
        Self {
            root: PathBuf::from("."),
            cmd: cmd.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            verbose: false,
        }
    }

    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    pub fn interval_secs(mut self, secs: u64) -> Self {
        self.interval = Duration::from_secs(secs);
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.verbose = val;
        self
    }

    pub fn build(self) -> MonitorConfig {
        let command = CommandLine::parse(&self.cmd).expect("builder needs a non-empty command");
        let pattern = NamePattern::new(&self.pattern).expect("builder needs a valid pattern");

        let mut cfg = MonitorConfig::new(command, pattern, self.interval);
        cfg.root = self.root;
        cfg.verbose = self.verbose;
        cfg
    }
}
