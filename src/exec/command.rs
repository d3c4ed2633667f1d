// src/exec/command.rs

//! The user command, split into program + arguments.

use std::fmt;
use std::str::FromStr;

use crate::errors::PollwatchError;

/// A command line split on whitespace.
///
/// There is no shell and no quoting: `run "a b"` becomes the three
/// arguments `run`, `"a` and `b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Split `line` on whitespace. Returns `None` if nothing is left.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

impl FromStr for CommandLine {
    type Err = PollwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandLine::parse(s).ok_or(PollwatchError::MissingCommand)
    }
}
