//! Time utilities: timestamp parsing, event-local "now", UTC offsets.

use crate::errors::{AppError, AppResult};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Storage format of `shifts.start` / `shifts.end`.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_FMTS: [&str; 4] = [
    TIMESTAMP_FMT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    ACCEPTED_FMTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FMT).to_string()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// "+02:00", "-05:30", "Z" or "UTC".
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.to_string()));
    }
    s.parse::<FixedOffset>()
        .map_err(|_| AppError::InvalidOffset(s.to_string()))
}

/// Current wall-clock time at the event venue.
pub fn now_in_offset(offset: &FixedOffset) -> NaiveDateTime {
    Utc::now().with_timezone(offset).naive_local()
}
