//! Schema migrations. Each applied migration is recorded by name in the
//! `migrations` table and never applied twice.

use rusqlite::{Connection, OptionalExtension, Result, params};

const MIGRATIONS: &[(&str, &str)] = &[
    (
        "2024_01_01_000001_create_catalog_tables",
        r#"
        CREATE TABLE IF NOT EXISTS shift_types (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS locations (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS angel_types (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "2024_01_01_000002_create_shift_tables",
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            title         TEXT NOT NULL,
            description   TEXT NOT NULL DEFAULT '',
            start         TEXT NOT NULL,
            "end"         TEXT NOT NULL,
            shift_type_id INTEGER NOT NULL REFERENCES shift_types(id),
            location_id   INTEGER NOT NULL REFERENCES locations(id)
        );

        CREATE TABLE IF NOT EXISTS needed_angel_types (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            shift_id      INTEGER REFERENCES shifts(id) ON DELETE CASCADE,
            angel_type_id INTEGER NOT NULL REFERENCES angel_types(id),
            count         INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS shift_entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            shift_id      INTEGER NOT NULL REFERENCES shifts(id) ON DELETE CASCADE,
            angel_type_id INTEGER NOT NULL REFERENCES angel_types(id),
            user_id       INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_shifts_end ON shifts("end");
        CREATE INDEX IF NOT EXISTS idx_needed_shift ON needed_angel_types(shift_id);
        CREATE INDEX IF NOT EXISTS idx_entries_shift ON shift_entries(shift_id, angel_type_id);
        "#,
    ),
    (
        "2024_01_01_000003_create_log_entries",
        r#"
        CREATE TABLE IF NOT EXISTS log_entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            level      TEXT NOT NULL,
            message    TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    ),
];

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS migrations (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            migration TEXT NOT NULL UNIQUE
        );
        "#,
    )
}

fn is_applied(conn: &Connection, name: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM migrations WHERE migration = ?1 LIMIT 1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Apply every migration not yet recorded. Returns the names applied now.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_migrations_table(conn)?;

    let mut applied = Vec::new();
    for (name, sql) in MIGRATIONS {
        if is_applied(conn, name)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO migrations (migration) VALUES (?1)",
            params![name],
        )?;
        tx.commit()?;

        log::info!("migration applied: {name}");
        applied.push(*name);
    }

    Ok(applied)
}

/// Number of known migrations that are not applied yet.
pub fn pending_count(conn: &Connection) -> Result<usize> {
    ensure_migrations_table(conn)?;
    let mut pending = 0;
    for (name, _) in MIGRATIONS {
        if !is_applied(conn, name)? {
            pending += 1;
        }
    }
    Ok(pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once() {
        let conn = Connection::open_in_memory().unwrap();
        let first = run_pending_migrations(&conn).unwrap();
        assert_eq!(first.len(), MIGRATIONS.len());
        assert_eq!(pending_count(&conn).unwrap(), 0);

        let second = run_pending_migrations(&conn).unwrap();
        assert!(second.is_empty());

        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM shifts", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 0);
    }
}
