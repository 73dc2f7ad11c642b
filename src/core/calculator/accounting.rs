//! Needed / worked / overbooked hours per category.
//!
//! Both entry points build one [`SlotIndex`] and account every slot with
//! `slot_hours`; they differ only in which key a slot's hours land on.
//! Totals are summed in person-minutes and converted to hours at the end,
//! so the result does not depend on row order.

use crate::core::calculator::duration::minutes_to_hours;
use crate::core::calculator::slots::{SlotHours, SlotIndex};
use crate::models::category::Category;
use crate::models::category_hours::CategoryHours;
use crate::models::shift::Shift;
use crate::models::staffing::{Assignment, StaffingRequirement};
use std::collections::HashMap;

/// Group by angel type: a slot's hours go to its angel type.
pub fn aggregate_by_angel_type(
    shifts: &[Shift],
    requirements: &[StaffingRequirement],
    assignments: &[Assignment],
    angel_types: &[Category],
) -> Vec<CategoryHours> {
    let index = SlotIndex::build(shifts, requirements, assignments);

    let mut totals: HashMap<i64, SlotHours> = HashMap::new();
    for ((_, angel_type_id), _, hours) in index.accounted() {
        totals.entry(angel_type_id).or_default().add(hours);
    }

    collect(angel_types, &totals)
}

/// Group by shift type: shift types partition the shifts, and within each
/// shift every angel-type slot is accounted on its own before being summed
/// under the shift's type.
pub fn aggregate_by_shift_type(
    shifts: &[Shift],
    requirements: &[StaffingRequirement],
    assignments: &[Assignment],
    shift_types: &[Category],
) -> Vec<CategoryHours> {
    let index = SlotIndex::build(shifts, requirements, assignments);

    let mut totals: HashMap<i64, SlotHours> = HashMap::new();
    for (_, info, hours) in index.accounted() {
        totals.entry(info.shift_type_id).or_default().add(hours);
    }

    collect(shift_types, &totals)
}

fn collect(categories: &[Category], totals: &HashMap<i64, SlotHours>) -> Vec<CategoryHours> {
    categories
        .iter()
        .map(|c| match totals.get(&c.id) {
            Some(t) => {
                log::debug!(
                    "{}: needed={}min worked={}min overbooked={}min",
                    c.name,
                    t.needed,
                    t.worked,
                    t.overbooked
                );
                CategoryHours {
                    id: c.id,
                    name: c.name.clone(),
                    needed: minutes_to_hours(t.needed),
                    worked: minutes_to_hours(t.worked),
                    overbooked: minutes_to_hours(t.overbooked),
                }
            }
            None => CategoryHours::zero(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 18)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn shift(id: i64, shift_type: i64, minutes: i64) -> Shift {
        Shift::new(id, shift_type, t0(), t0() + Duration::minutes(minutes))
    }

    fn filled(shift_id: i64, angel_type_id: i64, n: usize) -> Vec<Assignment> {
        (0..n).map(|_| Assignment::new(shift_id, angel_type_id)).collect()
    }

    fn angels() -> Vec<Category> {
        vec![Category::new(1, "Heaven"), Category::new(2, "Bar")]
    }

    fn only(result: &[CategoryHours], id: i64) -> (f64, f64, f64) {
        let c = result.iter().find(|c| c.id == id).unwrap();
        (c.needed, c.worked, c.overbooked)
    }

    #[test]
    fn underbooked_shift() {
        let r = aggregate_by_angel_type(
            &[shift(1, 1, 120)],
            &[StaffingRequirement::new(1, 1, 3)],
            &filled(1, 1, 2),
            &angels(),
        );
        assert_eq!(only(&r, 1), (6.0, 4.0, 0.0));
    }

    #[test]
    fn overbooked_shift() {
        let r = aggregate_by_angel_type(
            &[shift(1, 1, 120)],
            &[StaffingRequirement::new(1, 1, 2)],
            &filled(1, 1, 5),
            &angels(),
        );
        assert_eq!(only(&r, 1), (4.0, 4.0, 6.0));
    }

    #[test]
    fn assignment_without_requirement_is_overbooked() {
        let r = aggregate_by_angel_type(&[shift(1, 1, 90)], &[], &filled(1, 1, 2), &angels());
        assert_eq!(only(&r, 1), (0.0, 0.0, 3.0));
    }

    #[test]
    fn sums_across_shifts() {
        let r = aggregate_by_angel_type(
            &[shift(1, 1, 60), shift(2, 1, 120)],
            &[
                StaffingRequirement::new(1, 1, 1),
                StaffingRequirement::new(2, 1, 1),
            ],
            &[Assignment::new(1, 1), Assignment::new(2, 1)],
            &angels(),
        );
        assert_eq!(only(&r, 1), (3.0, 3.0, 0.0));
    }

    #[test]
    fn empty_shift_list_reports_zeros() {
        let r = aggregate_by_angel_type(
            &[],
            &[StaffingRequirement::new(1, 1, 3)],
            &filled(1, 1, 2),
            &angels(),
        );
        assert_eq!(r.len(), 2);
        for c in &r {
            assert_eq!((c.needed, c.worked, c.overbooked), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn output_follows_category_order() {
        let cats = vec![Category::new(2, "Bar"), Category::new(9, "Unused"), Category::new(1, "Heaven")];
        let r = aggregate_by_angel_type(&[shift(1, 1, 60)], &[], &[], &cats);
        let ids: Vec<i64> = r.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 9, 1]);
        assert_eq!(r[1].name, "Unused");
    }

    #[test]
    fn zero_duration_shift_contributes_nothing() {
        let r = aggregate_by_angel_type(
            &[shift(1, 1, 0)],
            &[StaffingRequirement::new(1, 1, 3)],
            &filled(1, 1, 5),
            &angels(),
        );
        assert_eq!(only(&r, 1), (0.0, 0.0, 0.0));
    }

    #[test]
    fn inverted_shift_is_clamped() {
        let s = Shift::new(1, 1, t0(), t0() - Duration::hours(2));
        let r = aggregate_by_angel_type(
            &[s],
            &[StaffingRequirement::new(1, 1, 3)],
            &filled(1, 1, 1),
            &angels(),
        );
        assert_eq!(only(&r, 1), (0.0, 0.0, 0.0));
    }

    #[test]
    fn huge_requirement_saturates() {
        let reqs = [
            StaffingRequirement::new(1, 1, i64::MAX / 60),
            StaffingRequirement::new(2, 1, i64::MAX / 60),
        ];
        let shifts = [shift(1, 1, 120), shift(2, 2, 120)];
        let assignments = filled(1, 1, 1);

        let r = aggregate_by_angel_type(&shifts, &reqs, &assignments, &angels());
        let (needed, worked, overbooked) = only(&r, 1);
        assert_eq!(needed, i64::MAX as f64 / 60.0);
        assert_eq!((worked, overbooked), (2.0, 0.0));

        let types = [Category::new(1, "Bar"), Category::new(2, "Build-up")];
        let r = aggregate_by_shift_type(&shifts, &reqs, &assignments, &types);
        assert!(r.iter().all(|c| c.needed > 0.0 && c.needed.is_finite()));
    }

    #[test]
    fn shift_types_partition_shifts() {
        // Same angel type required in two shifts of different shift types.
        let shifts = [shift(1, 10, 60), shift(2, 20, 120)];
        let reqs = [
            StaffingRequirement::new(1, 1, 2),
            StaffingRequirement::new(2, 1, 1),
        ];
        let mut entries = filled(1, 1, 1);
        entries.extend(filled(2, 1, 3));
        let types = vec![Category::new(10, "Build-up"), Category::new(20, "Night")];

        let r = aggregate_by_shift_type(&shifts, &reqs, &entries, &types);
        assert_eq!(only(&r, 10), (2.0, 1.0, 0.0));
        assert_eq!(only(&r, 20), (2.0, 2.0, 4.0));
    }

    #[test]
    fn overbooking_is_per_angel_type_within_a_shift() {
        // One shift: Heaven overbooked by one, Bar short by one. The excess
        // of one angel type does not cover the gap of the other.
        let shifts = [shift(1, 10, 60)];
        let reqs = [
            StaffingRequirement::new(1, 1, 1),
            StaffingRequirement::new(1, 2, 1),
        ];
        let entries = filled(1, 1, 2);
        let types = vec![Category::new(10, "Bar shifts")];

        let r = aggregate_by_shift_type(&shifts, &reqs, &entries, &types);
        assert_eq!(only(&r, 10), (2.0, 1.0, 1.0));
    }

    #[test]
    fn groupings_agree_on_totals() {
        let shifts = [shift(1, 10, 45), shift(2, 20, 150), shift(3, 10, 30)];
        let reqs = [
            StaffingRequirement::new(1, 1, 2),
            StaffingRequirement::new(1, 2, 1),
            StaffingRequirement::new(2, 2, 4),
            StaffingRequirement::new(3, 1, 1),
        ];
        let mut entries = filled(1, 1, 3);
        entries.extend(filled(2, 2, 2));
        entries.extend(filled(3, 2, 1));
        let types = vec![Category::new(10, "A"), Category::new(20, "B")];

        let by_angel = aggregate_by_angel_type(&shifts, &reqs, &entries, &angels());
        let by_type = aggregate_by_shift_type(&shifts, &reqs, &entries, &types);

        let mins = |h: f64| (h * 60.0).round() as i64;
        let sum = |v: &[CategoryHours]| {
            v.iter().fold((0, 0, 0), |acc, c| {
                (
                    acc.0 + mins(c.needed),
                    acc.1 + mins(c.worked),
                    acc.2 + mins(c.overbooked),
                )
            })
        };
        assert_eq!(sum(&by_angel), sum(&by_type));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let shifts = [shift(1, 10, 37), shift(2, 10, 71)];
        let reqs = [StaffingRequirement::new(1, 1, 3), StaffingRequirement::new(2, 2, 1)];
        let mut entries = filled(1, 1, 4);
        entries.extend(filled(2, 2, 1));

        let a = aggregate_by_angel_type(&shifts, &reqs, &entries, &angels());
        let b = aggregate_by_angel_type(&shifts, &reqs, &entries, &angels());
        assert_eq!(a, b);
    }
}
