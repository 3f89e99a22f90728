// src/utils/date.rs

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Shown in place of a date the API sent in a form we cannot read.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parses the date formats the ranking API is known to send:
/// RFC 3339 timestamps, naive timestamps and bare `YYYY-MM-DD` dates.
/// Timestamps are read in UTC.
pub fn parse_exam_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Formats an exam date with the locale's short date format.
pub fn format_exam_date(raw: &str, locale: Locale) -> String {
    match parse_exam_date(raw) {
        Some(date) => {
            let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
            midnight.format_localized("%x", locale).to_string()
        }
        None => INVALID_DATE.to_string(),
    }
}
