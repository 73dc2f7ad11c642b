//! shiftboard library root.
//! Exposes the CLI parser, the high-level run() function, and the hour
//! accounting engine under `core::calculator`.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Shifts { .. } => cli::commands::shifts::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.log_level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command-line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    init_logging(&cfg);
    log::debug!("using database {}", cfg.database);

    dispatch(&cli, &cfg)
}
