//! ISO-8601 parsing for due dates and due-date cutoffs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parses a date (`YYYY-MM-DD`, taken as midnight) or a date-time.
///
/// Date-times carrying a UTC offset (`+05:30`, `Z`) keep their wall-clock
/// time; the offset is dropped so they compare with plain dates.
///
/// Returns `None` for anything else, including empty strings.
pub fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Some(naive) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(naive);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
        })
        .map(|dt| dt.naive_local())
}
