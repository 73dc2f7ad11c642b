//! Read queries: the dashboard's view of the schedule.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::filter::ShiftFilter;
use crate::models::log_entry::LogEntry;
use crate::models::shift::Shift;
use crate::models::snapshot::ShiftSnapshot;
use crate::models::staffing::{Assignment, StaffingRequirement};
use crate::utils::time::parse_timestamp;
use rusqlite::{Result, Row, ToSql, params, params_from_iter};

pub fn load_shifts(pool: &DbPool, filter: &ShiftFilter) -> AppResult<Vec<Shift>> {
    let mut sql = String::from(
        r#"
        SELECT s.id, s.title, s.description, s.start, s."end",
               st.id AS shift_type_id, st.name AS shift_type_name,
               l.name AS location_name
        FROM shifts s
        INNER JOIN locations l ON l.id = s.location_id
        INNER JOIN shift_types st ON st.id = s.shift_type_id
        WHERE 1 = 1
        "#,
    );

    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    // Stored timestamps use several layouts: compare parsed values.
    let ongoing_at = if filter.ongoing {
        Some(filter.now.ok_or_else(|| {
            AppError::Other("ongoing filter requires the current event time".into())
        })?)
    } else {
        None
    };

    if !filter.shift_types.is_empty() {
        let placeholders = vec!["?"; filter.shift_types.len()].join(",");
        sql.push_str(&format!(" AND s.shift_type_id IN ({placeholders})"));
        for id in &filter.shift_types {
            args.push(Box::new(*id));
        }
    }

    if let Some(day) = filter.day {
        sql.push_str(" AND substr(s.start, 1, 10) = ?");
        args.push(Box::new(day.format("%Y-%m-%d").to_string()));
    }

    sql.push_str(" ORDER BY s.start ASC, s.id ASC");

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter().map(|a| a.as_ref())), map_shift)?;

    let mut out = Vec::new();
    for r in rows {
        let shift = r?;
        if let Some(now) = ongoing_at
            && !shift.is_ongoing(now)
        {
            continue;
        }
        out.push(shift);
    }
    out.sort_by_key(|s| (s.start, s.id));

    log::debug!("load_shifts: {} row(s) (filter: {:?})", out.len(), filter);
    Ok(out)
}

fn map_shift(row: &Row) -> Result<Shift> {
    Ok(Shift {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        start: timestamp_column(row, "start")?,
        end: timestamp_column(row, "end")?,
        shift_type_id: row.get("shift_type_id")?,
        shift_type_name: row.get("shift_type_name")?,
        location_name: row.get("location_name")?,
    })
}

fn timestamp_column(row: &Row, column: &str) -> Result<chrono::NaiveDateTime> {
    let raw: String = row.get(column)?;
    parse_timestamp(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn load_requirements(pool: &DbPool) -> AppResult<Vec<StaffingRequirement>> {
    let mut stmt = pool.conn.prepare(
        "SELECT shift_id, angel_type_id, count
         FROM needed_angel_types
         WHERE shift_id IS NOT NULL
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(StaffingRequirement {
            shift_id: row.get(0)?,
            angel_type_id: row.get(1)?,
            count: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    log::debug!("load_requirements: {} row(s)", out.len());
    Ok(out)
}

pub fn load_assignments(pool: &DbPool) -> AppResult<Vec<Assignment>> {
    let mut stmt = pool.conn.prepare(
        "SELECT e.id, e.shift_id, e.angel_type_id, u.id, u.name
         FROM shift_entries e
         INNER JOIN users u ON u.id = e.user_id
         INNER JOIN angel_types a ON a.id = e.angel_type_id
         ORDER BY e.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Assignment {
            id: row.get(0)?,
            shift_id: row.get(1)?,
            angel_type_id: row.get(2)?,
            user_id: row.get(3)?,
            user_name: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    log::debug!("load_assignments: {} row(s)", out.len());
    Ok(out)
}

fn load_categories(pool: &DbPool, table: &str) -> AppResult<Vec<Category>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("SELECT id, name FROM {table} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_angel_types(pool: &DbPool) -> AppResult<Vec<Category>> {
    load_categories(pool, "angel_types")
}

pub fn load_shift_types(pool: &DbPool) -> AppResult<Vec<Category>> {
    load_categories(pool, "shift_types")
}

/// Everything one aggregation pass needs. Requirement and assignment rows
/// are not filtered here; rows of filtered-out shifts are ignored downstream.
pub fn load_snapshot(pool: &DbPool, filter: &ShiftFilter) -> AppResult<ShiftSnapshot> {
    Ok(ShiftSnapshot {
        shifts: load_shifts(pool, filter)?,
        requirements: load_requirements(pool)?,
        assignments: load_assignments(pool)?,
        angel_types: load_angel_types(pool)?,
        shift_types: load_shift_types(pool)?,
    })
}

/// Live-update counter: the newest `log_entries` id, 0 for an empty log.
pub fn newest_log_sequence_number(pool: &DbPool) -> AppResult<i64> {
    let n: i64 = pool
        .conn
        .query_row("SELECT COALESCE(MAX(id), 0) FROM log_entries", [], |row| {
            row.get(0)
        })?;
    Ok(n)
}

/// Newest entries first.
pub fn load_log_entries(pool: &DbPool, limit: usize) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, level, message, created_at
         FROM log_entries
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            level: row.get(1)?,
            message: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
