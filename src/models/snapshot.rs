use super::category::Category;
use super::shift::Shift;
use super::staffing::{Assignment, StaffingRequirement};

/// Fully materialized input of one aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct ShiftSnapshot {
    pub shifts: Vec<Shift>,
    pub requirements: Vec<StaffingRequirement>,
    pub assignments: Vec<Assignment>,
    pub angel_types: Vec<Category>,
    pub shift_types: Vec<Category>,
}
