// src/watch/mod.rs

//! Change detection by polling.
//!
//! This module is responsible for:
//! - Compiling the file-name pattern (match at start of the base name).
//! - Deciding whether a modification time is recent enough to count.
//! - Walking the tree and stopping at the first recently changed match.
//!
//! It does **not** run commands or sleep; that is the engine's job.

pub mod patterns;
pub mod recency;
pub mod scan;

pub use patterns::NamePattern;
pub use recency::{RecencyWindow, GRANULARITY_SLACK};
pub use scan::find_recent_match;
