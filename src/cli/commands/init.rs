use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database schema, through the migration engine
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing shiftboard…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    // Non-blocking: a failed log write must not fail the init.
    if let Err(e) = log::write_log_entry(&conn, "info", &format!("Database initialized at {db_path}")) {
        warning(format!("Failed to write log entry: {e}"));
    }

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
