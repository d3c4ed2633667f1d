// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] holds [`CommandLine`], the whitespace-split user command.
//! - [`backend`] provides the `ExecutorBackend` trait and the concrete
//!   `RealExecutorBackend` that the monitor uses in production, and which
//!   tests can replace with a fake implementation.

pub mod backend;
pub mod command;

pub use backend::{CommandOutcome, ExecutorBackend, RealExecutorBackend};
pub use command::CommandLine;
