use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use crate::models::VideoDate;

const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a `publishedAt` value such as `2023-03-15T10:00:00Z` as UTC.
/// Only the exact second-precision `Z` form is accepted.
pub fn parse_published_at(date_str: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(date_str, PUBLISHED_AT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn video_date(published: &DateTime<Utc>) -> VideoDate {
    VideoDate {
        year: published.year(),
        month: published.month(),
        day: published.day(),
        weekday: published.weekday().num_days_from_monday(),
        week_number: published.iso_week().week(),
    }
}
