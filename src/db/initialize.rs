use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let applied = run_pending_migrations(conn)?;
    log::debug!("init_db: {} migration(s) applied", applied.len());
    Ok(())
}
