// src/config/mod.rs

//! Monitor configuration: the validated form of the CLI arguments.

pub mod model;
pub mod validate;

pub use model::{MonitorConfig, DEFAULT_INTERVAL_SECS, DEFAULT_PATTERN};
