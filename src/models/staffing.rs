use super::category::AngelTypeId;
use super::shift::ShiftId;
use serde::Serialize;

/// `needed_angel_types` row: how many angels of a type a shift asks for.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StaffingRequirement {
    pub shift_id: ShiftId,
    pub angel_type_id: AngelTypeId,
    pub count: i64,
}

impl StaffingRequirement {
    pub fn new(shift_id: ShiftId, angel_type_id: AngelTypeId, count: i64) -> Self {
        Self {
            shift_id,
            angel_type_id,
            count,
        }
    }
}

/// `shift_entries` row: one filled slot. Duplicates are legal and simply
/// raise the filled count of their `(shift, angel type)` pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Assignment {
    pub id: i64,
    pub shift_id: ShiftId,
    pub angel_type_id: AngelTypeId,
    pub user_id: i64,
    pub user_name: String,
}

impl Assignment {
    pub fn new(shift_id: ShiftId, angel_type_id: AngelTypeId) -> Self {
        Self {
            id: 0,
            shift_id,
            angel_type_id,
            user_id: 0,
            user_name: String::new(),
        }
    }
}
