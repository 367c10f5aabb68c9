//! Shared clocks for integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Instant reported by [`FixedClock::default`].
#[must_use]
pub fn submission_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 27, 12, 0, 0)
        .single()
        .expect("hard-coded instant is valid")
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock stuck at `now`.
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(submission_instant())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}
