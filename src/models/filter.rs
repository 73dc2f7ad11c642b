use chrono::{NaiveDate, NaiveDateTime};

/// Which shifts the repository hands to the engine.
#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    /// Keep only shifts ending strictly after `now`.
    pub ongoing: bool,
    /// Event-local current time; only read when `ongoing` is set.
    pub now: Option<NaiveDateTime>,
    /// Keep only these shift types (all when empty).
    pub shift_types: Vec<i64>,
    /// Keep only shifts starting on this day.
    pub day: Option<NaiveDate>,
}

impl ShiftFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn ongoing_at(now: NaiveDateTime) -> Self {
        Self {
            ongoing: true,
            now: Some(now),
            ..Self::default()
        }
    }
}
