// src/export/model.rs

use crate::models::category_hours::{CategoryHours, StatsReport};
use crate::utils::formatting::coverage_percent;
use serde::Serialize;

/// Flat export row: one category of one grouping.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatsExportRow {
    pub grouping: String,
    pub id: i64,
    pub name: String,
    pub needed_hours: f64,
    pub worked_hours: f64,
    pub overbooked_hours: f64,
    /// Empty when nothing is needed.
    pub coverage_percent: Option<f64>,
}

impl StatsExportRow {
    fn from_hours(grouping: &str, c: &CategoryHours) -> Self {
        Self {
            grouping: grouping.to_string(),
            id: c.id,
            name: c.name.clone(),
            needed_hours: c.needed,
            worked_hours: c.worked,
            overbooked_hours: c.overbooked,
            coverage_percent: coverage_percent(c.worked, c.needed),
        }
    }
}

pub(crate) fn report_to_rows(report: &StatsReport) -> Vec<StatsExportRow> {
    report
        .by_angel_type
        .iter()
        .map(|c| StatsExportRow::from_hours("angel_type", c))
        .chain(
            report
                .by_shift_type
                .iter()
                .map(|c| StatsExportRow::from_hours("shift_type", c)),
        )
        .collect()
}
