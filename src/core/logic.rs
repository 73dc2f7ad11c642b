use crate::core::calculator::accounting::{aggregate_by_angel_type, aggregate_by_shift_type};
use crate::core::calculator::duration::{minutes_to_hours, shift_minutes};
use crate::models::category_hours::StatsReport;
use crate::models::occupancy::{ShiftOccupancy, SlotOccupancy};
use crate::models::snapshot::ShiftSnapshot;
use std::collections::{BTreeSet, HashMap};

pub struct Core;

impl Core {
    /// Run both groupings over one snapshot.
    pub fn build_stats(snapshot: &ShiftSnapshot, ongoing_only: bool, generated_at: String) -> StatsReport {
        let by_angel_type = aggregate_by_angel_type(
            &snapshot.shifts,
            &snapshot.requirements,
            &snapshot.assignments,
            &snapshot.angel_types,
        );
        let by_shift_type = aggregate_by_shift_type(
            &snapshot.shifts,
            &snapshot.requirements,
            &snapshot.assignments,
            &snapshot.shift_types,
        );

        StatsReport {
            generated_at,
            ongoing_only,
            shift_count: snapshot.shifts.len(),
            by_angel_type,
            by_shift_type,
        }
    }

    /// Shift cards: every shift with `filled/needed` per angel type and the
    /// names of the assigned users. Angel types that were assigned without
    /// being required are listed after the required ones with `needs = 0`.
    pub fn occupancy(snapshot: &ShiftSnapshot) -> Vec<ShiftOccupancy> {
        let names: HashMap<i64, &str> = snapshot
            .angel_types
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let mut users: HashMap<(i64, i64), Vec<String>> = HashMap::new();
        let mut assigned_types: HashMap<i64, BTreeSet<i64>> = HashMap::new();
        for a in &snapshot.assignments {
            users
                .entry((a.shift_id, a.angel_type_id))
                .or_default()
                .push(a.user_name.clone());
            assigned_types
                .entry(a.shift_id)
                .or_default()
                .insert(a.angel_type_id);
        }

        let mut needs: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for r in &snapshot.requirements {
            let list = needs.entry(r.shift_id).or_default();
            if !list.iter().any(|(at, _)| *at == r.angel_type_id) {
                list.push((r.angel_type_id, r.count.max(0)));
            }
        }

        snapshot
            .shifts
            .iter()
            .map(|shift| {
                let mut order: Vec<(i64, i64)> = needs.get(&shift.id).cloned().unwrap_or_default();

                if let Some(types) = assigned_types.get(&shift.id) {
                    let extra: Vec<(i64, i64)> = types
                        .iter()
                        .filter(|at| !order.iter().any(|(o, _)| o == *at))
                        .map(|at| (*at, 0))
                        .collect();
                    order.extend(extra);
                }

                let slots = order
                    .into_iter()
                    .map(|(angel_type_id, needs)| {
                        let assigned = users
                            .get(&(shift.id, angel_type_id))
                            .cloned()
                            .unwrap_or_default();
                        SlotOccupancy {
                            angel_type_id,
                            angel_type_name: names
                                .get(&angel_type_id)
                                .map(|n| n.to_string())
                                .unwrap_or_else(|| format!("#{angel_type_id}")),
                            needs,
                            count: assigned.len() as i64,
                            users: assigned,
                        }
                    })
                    .collect();

                ShiftOccupancy {
                    shift: shift.clone(),
                    duration_hours: minutes_to_hours(shift_minutes(shift)),
                    slots,
                }
            })
            .collect()
    }
}
