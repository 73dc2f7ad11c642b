use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Append a row to `log_entries`. Every new row advances the live-update
/// sequence number.
pub fn write_log_entry(conn: &Connection, level: &str, message: &str) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log_entries (level, message, created_at)
         VALUES (?1, ?2, ?3)",
    )?;

    stmt.execute(params![level, message, now])?;

    Ok(conn.last_insert_rowid())
}
