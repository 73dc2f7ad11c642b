use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log_entries;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

fn color_for_level(level: &str) -> Colour {
    match level.to_ascii_lowercase().as_str() {
        "emergency" | "alert" | "critical" | "error" => Colour::Red,
        "warning" => Colour::Yellow,
        "notice" => Colour::Purple,
        "info" => Colour::Green,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true, limit } = cmd {
        let pool = DbPool::read_only(&cfg.database)?;
        let entries = load_log_entries(&pool, *limit)?;

        if entries.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        println!("📜 Log entries (newest first):\n");

        let mut table = Table::new(vec![
            Column::right("id"),
            Column::left("date"),
            Column::left("level"),
            Column::left("message"),
        ]);

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.created_at)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(e.created_at);

            table.add_row(vec![
                e.id.to_string(),
                date,
                color_for_level(&e.level).paint(e.level.as_str()).to_string(),
                e.message,
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
