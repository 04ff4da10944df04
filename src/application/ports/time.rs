// src/application/ports/time.rs
use chrono::{DateTime, FixedOffset, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The server's current UTC offset; drives `serverOffsetMinutes` and the
    /// locale rendering in update results. Injectable so tests can pin the
    /// server to an arbitrary timezone.
    fn local_offset(&self) -> FixedOffset;
}
