// src/clock.rs

//! Wall-clock abstraction.
//!
//! The recency test compares file modification times against "now"; going
//! through a trait lets tests pin that instant.

use std::fmt::Debug;
use std::time::SystemTime;

pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> SystemTime;
}

/// Clock backed by `SystemTime::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
