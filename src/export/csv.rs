use crate::errors::AppResult;
use crate::export::model::StatsExportRow;
use ::csv::Writer;
use std::path::Path;

/// One CSV line per category; serde derives the header from the row type.
pub(crate) fn write_csv(path: &Path, rows: &[StatsExportRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
