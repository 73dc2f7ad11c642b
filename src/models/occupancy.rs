use super::shift::Shift;
use serde::Serialize;

/// Occupancy of one angel type within a shift, as shown on a shift card.
#[derive(Debug, Clone, Serialize)]
pub struct SlotOccupancy {
    pub angel_type_id: i64,
    pub angel_type_name: String,
    pub needs: i64,
    pub count: i64,
    pub users: Vec<String>,
}

impl SlotOccupancy {
    pub fn is_full(&self) -> bool {
        self.count >= self.needs
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftOccupancy {
    pub shift: Shift,
    pub duration_hours: f64,
    pub slots: Vec<SlotOccupancy>,
}
