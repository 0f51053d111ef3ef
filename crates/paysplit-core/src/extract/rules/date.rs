//! Cheque date extraction and normalization.

use tracing::trace;

use super::FieldRule;
use super::patterns::{CHEQUE_DATE, DATE_DMY2, DATE_DMY4, DATE_MONTH_LONG};
use crate::models::statement::{StatementFields, UNKNOWN_DATE};

/// Extracts the `Cheque Date` label's line and normalizes it.
///
/// A missing label leaves the sentinel and skips normalization entirely.
pub struct DateRule;

impl FieldRule for DateRule {
    fn field(&self) -> &'static str {
        "date"
    }

    fn apply(&self, text: &str, fields: &mut StatementFields) {
        if let Some(caps) = CHEQUE_DATE.captures(text) {
            let raw = caps[1].trim();
            trace!("raw cheque date: {:?}", raw);
            fields.date = normalize_date(raw);
        }
    }
}

/// Normalize a free-text date into canonical `YYYY-MM-DD`.
///
/// Formats are tried in priority order, each against the whole string:
/// day-first `D/M/YYYY` (also `-` separated), then `D/M/YY` with the year
/// prefixed by `"20"` (no century pivot: `"99"` becomes `"2099"`), then
/// `Month D, YYYY` with full English month names where an unrecognized
/// month falls back to `"01"`. Anything else yields [`UNKNOWN_DATE`].
///
/// Values are not checked against a calendar; `31/02/2024` passes through
/// as `2024-02-31`.
pub fn normalize_date(raw: &str) -> String {
    if let Some(caps) = DATE_DMY4.captures(raw) {
        return format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1]);
    }

    if let Some(caps) = DATE_DMY2.captures(raw) {
        return format!("20{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1]);
    }

    if let Some(caps) = DATE_MONTH_LONG.captures(raw) {
        let month = month_number(&caps[1]);
        return format!("{}-{}-{:0>2}", &caps[3], month, &caps[2]);
    }

    UNKNOWN_DATE.to_string()
}

/// Fixed table of full English month names, exact case.
fn month_number(month: &str) -> &'static str {
    match month {
        "January" => "01",
        "February" => "02",
        "March" => "03",
        "April" => "04",
        "May" => "05",
        "June" => "06",
        "July" => "07",
        "August" => "08",
        "September" => "09",
        "October" => "10",
        "November" => "11",
        "December" => "12",
        _ => "01",
    }
}
