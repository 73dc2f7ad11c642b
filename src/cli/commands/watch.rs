use crate::cli::commands::stats::{load_report, print_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::live::SequenceWatcher;
use crate::db::pool::DbPool;
use crate::db::queries::newest_log_sequence_number;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::thread;
use std::time::Duration;

/// Render the stats, then poll the log sequence number and re-render each
/// time it moves.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        ongoing,
        by,
        interval,
        iterations,
    } = cmd
    {
        let secs = interval.unwrap_or(cfg.refresh_interval_secs).max(1);
        let pool = DbPool::read_only(&cfg.database)?;
        let mut watcher = SequenceWatcher::new();

        watcher.observe(newest_log_sequence_number(&pool)?);
        print_report(&load_report(&pool, cfg, *ongoing)?, *by, cfg.progress_width);
        info(format!("Watching for updates every {secs}s (Ctrl+C to stop)"));

        let mut polls: u64 = 0;
        loop {
            if let Some(max) = iterations
                && polls >= *max
            {
                break;
            }

            thread::sleep(Duration::from_secs(secs));
            polls += 1;

            let sequence = newest_log_sequence_number(&pool)?;
            let previous = watcher.last_seen();
            if let Some(n) = watcher.observe(sequence) {
                log::info!("sequence number changed from {previous:?} to {n}, refreshing");
                print_report(&load_report(&pool, cfg, *ongoing)?, *by, cfg.progress_width);
            }
        }
    }
    Ok(())
}
