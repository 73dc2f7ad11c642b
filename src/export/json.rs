use crate::errors::AppResult;
use crate::models::category_hours::StatsReport;
use std::path::Path;

/// The whole report, pretty-printed.
pub(crate) fn write_json(path: &Path, report: &StatsReport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
