use crate::cli::commands::stats::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        ongoing,
        force,
    } = cmd
    {
        let pool = DbPool::read_only(&cfg.database)?;
        let report = load_report(&pool, cfg, *ongoing)?;
        ExportLogic::export(&report, *format, file, *force)?;
    }

    Ok(())
}
