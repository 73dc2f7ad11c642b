//! Composite-key slot index.
//!
//! A slot is one `(shift, angel type)` pair. The index is built once per
//! aggregation pass from the requirement and assignment rows, so that both
//! groupings read required and filled counts with a single map lookup.

use crate::core::calculator::duration::shift_minutes;
use crate::models::category::AngelTypeId;
use crate::models::shift::{Shift, ShiftId, ShiftTypeId};
use crate::models::staffing::{Assignment, StaffingRequirement};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

pub type SlotKey = (ShiftId, AngelTypeId);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCount {
    pub required: i64,
    pub filled: i64,
}

/// Person-minutes accounted to one slot (or summed over many).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotHours {
    pub needed: i64,
    pub worked: i64,
    pub overbooked: i64,
}

impl SlotHours {
    /// Saturates at `i64::MAX` instead of wrapping.
    pub fn add(&mut self, other: SlotHours) {
        self.needed = self.needed.saturating_add(other.needed);
        self.worked = self.worked.saturating_add(other.worked);
        self.overbooked = self.overbooked.saturating_add(other.overbooked);
    }
}

/// Accounts one slot: worked time is capped at the requirement, everything
/// filled beyond it is overbooked. Negative inputs count as zero, products
/// too large for `i64` saturate.
pub fn slot_hours(required: i64, filled: i64, minutes: i64) -> SlotHours {
    let required = required.max(0);
    let filled = filled.max(0);
    let minutes = minutes.max(0);

    SlotHours {
        needed: required.saturating_mul(minutes),
        worked: required.min(filled).saturating_mul(minutes),
        overbooked: (filled - required).max(0).saturating_mul(minutes),
    }
}

/// Per-shift data the accounting loop needs.
#[derive(Debug, Clone, Copy)]
pub struct ShiftInfo {
    pub minutes: i64,
    pub shift_type_id: ShiftTypeId,
}

#[derive(Debug, Default)]
pub struct SlotIndex {
    shifts: HashMap<ShiftId, ShiftInfo>,
    slots: HashMap<SlotKey, SlotCount>,
}

impl SlotIndex {
    /// Rows referring to shifts outside `shifts` are dropped: the shift list
    /// may be a filtered subset of what the repository holds.
    pub fn build(
        shifts: &[Shift],
        requirements: &[StaffingRequirement],
        assignments: &[Assignment],
    ) -> Self {
        let shifts: HashMap<ShiftId, ShiftInfo> = shifts
            .iter()
            .map(|s| {
                (
                    s.id,
                    ShiftInfo {
                        minutes: shift_minutes(s),
                        shift_type_id: s.shift_type_id,
                    },
                )
            })
            .collect();

        let mut slots: HashMap<SlotKey, SlotCount> = HashMap::new();

        for req in requirements {
            if !shifts.contains_key(&req.shift_id) {
                continue;
            }
            match slots.entry((req.shift_id, req.angel_type_id)) {
                Entry::Vacant(v) => {
                    v.insert(SlotCount {
                        required: req.count.max(0),
                        filled: 0,
                    });
                }
                Entry::Occupied(_) => {
                    log::debug!(
                        "duplicate requirement for shift {} / angel type {} ignored",
                        req.shift_id,
                        req.angel_type_id
                    );
                }
            }
        }

        for a in assignments {
            if !shifts.contains_key(&a.shift_id) {
                continue;
            }
            slots
                .entry((a.shift_id, a.angel_type_id))
                .or_default()
                .filled += 1;
        }

        Self { shifts, slots }
    }

    /// Every slot with its shift info and accounted person-minutes.
    pub fn accounted(&self) -> impl Iterator<Item = (SlotKey, ShiftInfo, SlotHours)> + '_ {
        self.slots.iter().filter_map(|(key, count)| {
            let info = self.shifts.get(&key.0)?;
            Some((
                *key,
                *info,
                slot_hours(count.required, count.filled, info.minutes),
            ))
        })
    }
}
