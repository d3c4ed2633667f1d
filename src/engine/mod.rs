// src/engine/mod.rs

//! The monitor engine.
//!
//! - [`core`] scans the tree once and decides whether anything changed.
//! - [`runtime`] wraps that in the async loop that runs the command and
//!   sleeps between cycles.

pub mod core;
pub mod runtime;

pub use self::core::{ChangeDetector, CycleOutcome};
pub use self::runtime::Monitor;
