//! Date parsing and rendering helpers for the rental contract.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parses a rent date from a request payload.
///
/// Accepts a plain calendar date (`2024-01-01`, taken as midnight UTC) or a
/// full RFC 3339 timestamp. Returns `None` for anything else.
pub fn parse_rent_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight));
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Renders a timestamp as a calendar date string (`YYYY-MM-DD`).
pub fn format_calendar_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Number of billable rental days for a positive span.
///
/// Partial days round up, so any positive span bills at least one day.
/// Callers must ensure `end > start`.
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    seconds.div_ceil(SECONDS_PER_DAY)
}
