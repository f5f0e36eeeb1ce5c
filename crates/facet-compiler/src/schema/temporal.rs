//! Timestamp parsing and the canonical wire format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Naive formats interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Renders a timestamp in the canonical wire format.
///
/// `2024-01-15T09:30:00.000Z`: RFC 3339, UTC, millisecond precision.
/// Sub-millisecond digits are truncated, not rounded, matching the
/// millisecond resolution of the indexed `date` fields.
pub fn canonical_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Converts a calendar day to UTC midnight.
pub fn day_start(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::default()))
}

/// Parses a timestamp from text.
///
/// Accepts RFC 3339 with any offset, a naive date-time (UTC) with `T` or a
/// space separator, or a bare `YYYY-MM-DD` day (UTC midnight).
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let clean = input.trim();
    if clean.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(clean) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(clean, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(clean, "%Y-%m-%d")
        .ok()
        .map(day_start)
}
