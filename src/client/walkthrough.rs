// src/client/walkthrough.rs
//! The six-step walkthrough from the original web demo, driven over the
//! wire: submit a date (optionally adjusted), then query it back (optionally
//! reverse-adjusted), capturing every intermediate value for display.

use std::fmt;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::client::api::ApiClient;
use crate::domain::wall_clock;

/// Values captured while submitting the date.
#[derive(Debug, Clone)]
pub struct SubmissionInformation {
    /// Step 1: the date as selected, in the submitter's local offset.
    pub selected: DateTime<FixedOffset>,
    /// Step 2: the instant actually handed to the mutation.
    pub submitted: DateTime<Utc>,
    /// Step 3: the ISO string the mutation carried.
    pub iso_string_submitted: String,
    /// Step 4: the server's local rendering of what it parsed.
    pub server_local_string: String,
}

/// Values captured while querying the date back.
#[derive(Debug, Clone)]
pub struct QueriedInformation {
    /// Step 5: the ISO string returned by the query.
    pub iso_date_returned: String,
    pub server_offset_minutes: i32,
    /// Step 6: the date finally shown to the user.
    pub displayed: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
pub struct WalkthroughReport {
    pub adjusted: bool,
    pub submission: SubmissionInformation,
    pub queried: QueriedInformation,
}

/// Run one full submit-and-retrieve cycle against the API.
pub async fn run(
    api: &ApiClient,
    selected: DateTime<FixedOffset>,
    adjust: bool,
) -> Result<WalkthroughReport> {
    let local = *selected.offset();

    let submitted = if adjust {
        wall_clock::adjust_for_submission(selected)
    } else {
        selected.with_timezone(&Utc)
    };
    let iso_string_submitted = submitted.to_rfc3339_opts(SecondsFormat::Millis, true);

    let outcome = api.update_record(iso_string_submitted.clone()).await?;
    let record = api.record().await?;

    let instant = DateTime::parse_from_rfc3339(&record.iso_date)?.with_timezone(&Utc);
    let displayed = if adjust {
        wall_clock::adjust_after_retrieval(instant, local)
    } else {
        instant.with_timezone(&local)
    };

    Ok(WalkthroughReport {
        adjusted: adjust,
        submission: SubmissionInformation {
            selected,
            submitted,
            iso_string_submitted,
            server_local_string: outcome.server_local_string,
        },
        queried: QueriedInformation {
            iso_date_returned: record.iso_date,
            server_offset_minutes: record.server_offset_minutes,
            displayed,
        },
    })
}

impl fmt::Display for WalkthroughReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = *self.submission.selected.offset();
        let mode = if self.adjusted {
            "with adjustments"
        } else {
            "without adjustments"
        };

        writeln!(f, "=== Update date ({mode}) ===")?;
        writeln!(
            f,
            "local timezone offset minutes:  {}",
            wall_clock::timezone_offset_minutes(local)
        )?;
        writeln!(
            f,
            "server timezone offset minutes: {}",
            self.queried.server_offset_minutes
        )?;
        writeln!(
            f,
            "step 1: date selected locally          {}",
            wall_clock::locale_string(self.submission.selected)
        )?;
        writeln!(
            f,
            "step 2: date object for the mutation   {}  ({})",
            wall_clock::locale_string(self.submission.submitted.with_timezone(&local)),
            if self.adjusted {
                "adjusted; differs from the selection"
            } else {
                "unadjusted; matches the selection"
            }
        )?;
        writeln!(
            f,
            "step 3: ISO string submitted           {}  (digits {} the selection)",
            self.submission.iso_string_submitted,
            if self.adjusted { "match" } else { "differ from" }
        )?;
        writeln!(
            f,
            "step 4: server-local parse of step 3   {}",
            self.submission.server_local_string
        )?;
        writeln!(
            f,
            "step 5: ISO string returned by query   {}",
            self.queried.iso_date_returned
        )?;
        writeln!(
            f,
            "step 6: date displayed locally         {}  ({})",
            wall_clock::locale_string(self.queried.displayed),
            if self.adjusted {
                "matches the selection; every timezone sees these digits"
            } else {
                "other timezones see different digits"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report() -> WalkthroughReport {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let selected = offset.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let submitted = wall_clock::adjust_for_submission(selected);
        WalkthroughReport {
            adjusted: true,
            submission: SubmissionInformation {
                selected,
                submitted,
                iso_string_submitted: submitted.to_rfc3339_opts(SecondsFormat::Millis, true),
                server_local_string: "6/1/2024, 9:00:00 AM".into(),
            },
            queried: QueriedInformation {
                iso_date_returned: "2024-06-01T09:00:00.000Z".into(),
                server_offset_minutes: 0,
                displayed: wall_clock::adjust_after_retrieval(submitted, offset),
            },
        }
    }

    #[test]
    fn report_shows_the_selected_digits_at_both_ends() {
        let rendered = sample_report().to_string();
        assert!(rendered.contains("step 1: date selected locally          6/1/2024, 9:00:00 AM"));
        assert!(rendered.contains("step 3: ISO string submitted           2024-06-01T09:00:00.000Z"));
        assert!(rendered.contains("step 6: date displayed locally         6/1/2024, 9:00:00 AM"));
    }

    #[test]
    fn report_shows_the_javascript_convention_offset() {
        let rendered = sample_report().to_string();
        assert!(rendered.contains("local timezone offset minutes:  300"));
    }
}
