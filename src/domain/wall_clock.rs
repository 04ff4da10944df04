// src/domain/wall_clock.rs
//! Wall-clock adjustment arithmetic.
//!
//! An ISO-8601 round-trip preserves the absolute instant, but the wall-clock
//! fields a reader sees depend on their own UTC offset. The two adjustment
//! functions here compensate: the submitter shifts the instant so the
//! serialized UTC digits equal the locally selected wall-clock digits, and
//! the reader shifts back so the locally displayed digits equal the UTC
//! digits of the string. Together they make every reader see the digits the
//! submitter picked, whatever offsets the two sit in.
//!
//! This is naive minute arithmetic over a fixed offset. It does not account
//! for a DST transition happening between submission and retrieval, and it
//! is not a timezone-aware calendaring facility.

use chrono::{DateTime, Duration, FixedOffset, Utc};

/// UTC offset in the JavaScript `Date.getTimezoneOffset()` convention:
/// minutes to add to local wall-clock time to reach UTC, positive west of
/// Greenwich. UTC-5 yields `300`, UTC+2 yields `-120`.
pub fn timezone_offset_minutes(offset: FixedOffset) -> i32 {
    -(offset.local_minus_utc() / 60)
}

/// Shift a locally selected timestamp so that its ISO-8601 (UTC)
/// serialization carries the selection's local wall-clock digits.
///
/// Selecting `09:00` at UTC-5 yields an instant that serializes as
/// `...T09:00:00.000Z` instead of the unadjusted `...T14:00:00.000Z`.
pub fn adjust_for_submission(selected: DateTime<FixedOffset>) -> DateTime<Utc> {
    let offset_minutes = timezone_offset_minutes(*selected.offset());
    selected.with_timezone(&Utc) - Duration::minutes(i64::from(offset_minutes))
}

/// Shift a retrieved instant so that its display in `local` shows the UTC
/// digits of the ISO string it was parsed from.
///
/// Applied to an instant produced by [`adjust_for_submission`], the local
/// display reproduces the originally selected wall-clock fields regardless
/// of the reader's offset.
pub fn adjust_after_retrieval(instant: DateTime<Utc>, local: FixedOffset) -> DateTime<FixedOffset> {
    let offset_minutes = timezone_offset_minutes(local);
    (instant + Duration::minutes(i64::from(offset_minutes))).with_timezone(&local)
}

/// The demo's `toLocaleString()` shape: `6/1/2024, 2:00:00 PM`.
pub fn locale_string(date: DateTime<FixedOffset>) -> String {
    date.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
