// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollwatchError {
    #[error("no command given (-c/--cmd is required)")]
    MissingCommand,

    #[error("Invalid file name regex {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PollwatchError {
    /// Process exit status for this error.
    ///
    /// Every failure that reaches `main` is fatal and maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// True for errors caused by bad startup input rather than by the host.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PollwatchError::MissingCommand
                | PollwatchError::InvalidPattern { .. }
                | PollwatchError::ConfigError(_)
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PollwatchError>;
