//! Injected time source
//!
//! The cache policy and orchestrator never read the system clock directly;
//! they take a [`Clock`] so tests can pin "now" to a fixed instant.

use chrono::{DateTime, Utc};

/// A source of the current time
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
