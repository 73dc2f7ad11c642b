use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::parse_timestamp;
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Shifts", "shifts"),
        ("Shift types", "shift_types"),
        ("Angel types", "angel_types"),
        ("Requirements", "needed_angel_types"),
        ("Assignments", "shift_entries"),
        ("Log entries", "log_entries"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    //
    // 3) SCHEDULE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(start) FROM shifts", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row(r#"SELECT MAX("end") FROM shifts"#, [], |row| row.get(0))
        .optional()?
        .flatten();

    let fmt = |v: &Option<String>| v.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Schedule:{}", CYAN, RESET);
    println!("    from: {}", fmt(&first));
    println!("    to:   {}", fmt(&last));

    //
    // 4) AVERAGE SHIFTS/DAY
    //
    if let (Some(f), Some(l)) = (&first, &last)
        && let (Ok(d1), Ok(d2)) = (parse_timestamp(f), parse_timestamp(l))
    {
        let days = (d2.date() - d1.date()).num_days().max(1);
        let shifts = count(pool, "shifts")?;
        println!(
            "{}• Average shifts/day:{} {:.2}",
            CYAN,
            RESET,
            shifts as f64 / days as f64
        );
    }

    println!();
    Ok(())
}
