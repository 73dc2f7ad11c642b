use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::models::category_hours::{CategoryHours, StatsReport};
use crate::models::filter::ShiftFilter;
use crate::models::grouping::Grouping;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_coverage, colorize_overbooked};
use crate::utils::formatting::{coverage_percent, format_hours, format_percent, progress_bar};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_timestamp, now_in_offset, parse_utc_offset};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { ongoing, by, json } = cmd {
        let pool = DbPool::read_only(&cfg.database)?;
        let report = load_report(&pool, cfg, *ongoing)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, *by, cfg.progress_width);
        }
    }
    Ok(())
}

/// Fetch a snapshot and run the engine over it. With `ongoing`, only
/// shifts that have not ended at the event venue are accounted.
pub(crate) fn load_report(pool: &DbPool, cfg: &Config, ongoing: bool) -> AppResult<StatsReport> {
    let now = now_in_offset(&parse_utc_offset(&cfg.event_utc_offset)?);
    let filter = if ongoing {
        ShiftFilter::ongoing_at(now)
    } else {
        ShiftFilter::all()
    };
    let snapshot = load_snapshot(pool, &filter)?;

    Ok(Core::build_stats(&snapshot, ongoing, format_timestamp(&now)))
}

pub(crate) fn print_report(report: &StatsReport, by: Grouping, bar_width: usize) {
    println!(
        "Stats at {} | {} shift(s){}",
        report.generated_at,
        report.shift_count,
        if report.ongoing_only { " (ongoing only)" } else { "" }
    );

    if by.includes_angel_types() {
        header("By Angel Type");
        print!("{}", render_table(&report.by_angel_type, bar_width));
    }

    if by.includes_shift_types() {
        header("By Shift Type");
        print!("{}", render_table(&report.by_shift_type, bar_width));
    }
}

fn render_table(rows: &[CategoryHours], bar_width: usize) -> String {
    if rows.is_empty() {
        return "  (no categories)\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::left("category"),
        Column::right("worked"),
        Column::right("+ over"),
        Column::right("/ needed"),
        Column::right("coverage"),
        Column::left(""),
    ]);

    for c in rows {
        let percent = coverage_percent(c.worked, c.needed);
        table.add_row(vec![
            c.name.clone(),
            format_hours(c.worked),
            colorize_overbooked(&format!("+ {}", format_hours(c.overbooked)), c.overbooked),
            format!("/ {}", format_hours(c.needed)),
            format!("{}{}{}", color_for_coverage(percent), format_percent(percent), RESET),
            progress_bar(c.worked, c.needed, bar_width),
        ]);
    }

    table.render()
}
