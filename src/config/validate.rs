// src/config/validate.rs

use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::MonitorConfig;
use crate::errors::{PollwatchError, Result};
use crate::exec::CommandLine;
use crate::watch::NamePattern;

impl TryFrom<CliArgs> for MonitorConfig {
    type Error = PollwatchError;

    fn try_from(args: CliArgs) -> std::result::Result<Self, Self::Error> {
        let command = validate_command(args.cmd.as_deref())?;
        let pattern = NamePattern::new(&args.pattern)?;
        let interval = validate_interval(args.interval)?;

        let mut cfg = MonitorConfig::new(command, pattern, interval);
        cfg.verbose = args.verbose;
        Ok(cfg)
    }
}

fn validate_command(cmd: Option<&str>) -> Result<CommandLine> {
    cmd.and_then(CommandLine::parse)
        .ok_or(PollwatchError::MissingCommand)
}

fn validate_interval(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(PollwatchError::ConfigError(
            "--interval must be >= 1 second (got 0)".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}
