//! Shift durations.

use crate::models::shift::Shift;
use chrono::NaiveDateTime;

/// Whole minutes between `start` and `end`, truncated. A shift whose end
/// precedes its start lasts zero minutes.
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes().max(0)
}

pub fn shift_minutes(shift: &Shift) -> i64 {
    duration_minutes(shift.start, shift.end)
}

/// Person-minutes (or plain minutes) expressed as fractional hours.
pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}
