use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_count, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let applied = run_pending_migrations(&pool.conn)?;
            for name in &applied {
                println!("  • {name}");
            }
            println!(
                "{}✔ Migration completed ({} applied).{}\n",
                GREEN,
                applied.len(),
                RESET
            );
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }

            match pending_count(&pool.conn)? {
                0 => println!("{}✔ Schema is up to date.{}\n", GREEN, RESET),
                n => println!(
                    "{}⚠ {} pending migration(s): run `db --migrate`.{}\n",
                    YELLOW, n, RESET
                ),
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
