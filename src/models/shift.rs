use chrono::NaiveDateTime;
use serde::Serialize;

pub type ShiftId = i64;
pub type ShiftTypeId = i64;

/// One row of `shifts`, joined with its location and shift type.
///
/// Timestamps are naive: they are expressed in the event's local time
/// (see `Config::event_utc_offset`).
#[derive(Debug, Clone, Serialize)]
pub struct Shift {
    pub id: ShiftId,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime, // ⇔ shifts.start (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end: NaiveDateTime,   // ⇔ shifts.end
    pub shift_type_id: ShiftTypeId,
    pub shift_type_name: String,
    pub location_name: String,
}

impl Shift {
    /// Minimal constructor carrying only what hour accounting needs.
    pub fn new(
        id: ShiftId,
        shift_type_id: ShiftTypeId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            start,
            end,
            shift_type_id,
            shift_type_name: String::new(),
            location_name: String::new(),
        }
    }

    pub fn date_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// "HH:MM – HH:MM"
    pub fn span_str(&self) -> String {
        format!("{} – {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    /// A shift is ongoing while its end lies strictly after `now`.
    pub fn is_ongoing(&self, now: NaiveDateTime) -> bool {
        self.end > now
    }
}
