// tests/support/mocks/time.rs
use chrono::{DateTime, FixedOffset, Utc};
use once_cell::sync::Lazy;
use tzdrift::application::ports::time::Clock;

/// Fixed timestamp shared by the deterministic test clock.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// A clock pinned to [`fixed_now`] and a chosen server offset.
#[derive(Clone)]
pub struct FixedClock {
    offset: FixedOffset,
}

impl FixedClock {
    /// A server running in UTC, the common deployment the demo talks about.
    pub fn utc() -> Self {
        Self::at_minutes_east(0)
    }

    /// A server pinned to an arbitrary offset, in minutes east of UTC.
    pub fn at_minutes_east(minutes: i32) -> Self {
        Self {
            offset: FixedOffset::east_opt(minutes * 60).expect("offset out of range"),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }

    fn local_offset(&self) -> FixedOffset {
        self.offset
    }
}
