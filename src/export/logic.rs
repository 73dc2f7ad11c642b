// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::report_to_rows;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::category_hours::StatsReport;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write a stats report to `file`.
    ///
    /// - `Csv`: one row per category, both groupings, with a `grouping` column
    /// - `Json`: the report as-is
    pub fn export(report: &StatsReport, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => csv::write_csv(path, &report_to_rows(report))?,
            ExportFormat::Json => json::write_json(path, report)?,
        }

        log::info!("exported {} stats to {}", format.as_str(), path.display());
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
