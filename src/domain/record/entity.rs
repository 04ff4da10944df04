// src/domain/record/entity.rs
use chrono::{DateTime, Utc};

/// The single record the demo server holds. `server_offset_minutes` is the
/// server's UTC offset in the JavaScript `getTimezoneOffset()` convention,
/// captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub date: DateTime<Utc>,
    pub server_offset_minutes: i32,
}

impl Record {
    pub fn seeded(now: DateTime<Utc>, server_offset_minutes: i32) -> Self {
        Self {
            date: now,
            server_offset_minutes,
        }
    }

    /// Replace the stored date. The offset keeps its startup value.
    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }
}
