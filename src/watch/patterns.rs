// src/watch/patterns.rs

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::errors::{PollwatchError, Result};

/// Compiled file-name pattern.
///
/// Matching is anchored at the start of the name only: `.*\.tex` matches
/// `main.tex`, `tex` does not match `main.tex`, and `main` matches
/// `main.tex.bak`. Only the base name of a file is ever tested.
#[derive(Clone)]
pub struct NamePattern {
    source: String,
    anchored: Regex,
}

impl fmt::Debug for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamePattern").field(&self.source).finish()
    }
}

impl NamePattern {
    /// Compile `pattern`, failing with [`PollwatchError::InvalidPattern`] if
    /// it is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = |source: regex::Error| PollwatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        // Validate the pattern as written first. Wrapping it in a group
        // would otherwise accept inputs like `a)(b`.
        Regex::new(pattern).map_err(invalid)?;
        let anchored = Regex::new(&format!(r"\A(?:{pattern})")).map_err(invalid)?;

        Ok(Self {
            source: pattern.to_string(),
            anchored,
        })
    }

    /// The pattern as given by the user.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern matches at the start of `file_name`.
    pub fn matches(&self, file_name: &str) -> bool {
        self.anchored.is_match(file_name)
    }
}

impl FromStr for NamePattern {
    type Err = PollwatchError;

    fn from_str(s: &str) -> Result<Self> {
        NamePattern::new(s)
    }
}
