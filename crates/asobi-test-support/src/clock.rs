//! Test clock — deterministic `Clock` implementation for tests.

use asobi_core::clock::Clock;
use chrono::{DateTime, Utc};

/// A clock pinned to one instant, so `resolved_at` stamps can be asserted
/// exactly.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
