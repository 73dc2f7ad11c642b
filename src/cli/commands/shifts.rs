use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::models::filter::ShiftFilter;
use crate::models::occupancy::ShiftOccupancy;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::{format_hours_precise, progress_bar};
use crate::utils::time::{now_in_offset, parse_date, parse_utc_offset};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts {
        ongoing,
        shift_types,
        date,
    } = cmd
    {
        let mut filter = ShiftFilter {
            shift_types: shift_types.clone(),
            day: date.as_deref().map(parse_date).transpose()?,
            ..ShiftFilter::all()
        };
        if *ongoing {
            let offset = parse_utc_offset(&cfg.event_utc_offset)?;
            filter.ongoing = true;
            filter.now = Some(now_in_offset(&offset));
        }

        let pool = DbPool::read_only(&cfg.database)?;
        let snapshot = load_snapshot(&pool, &filter)?;
        let cards = Core::occupancy(&snapshot);

        if cards.is_empty() {
            println!("No shifts.");
            return Ok(());
        }

        let mut current_day = String::new();
        for card in &cards {
            let day = card.shift.date_str();
            if day != current_day {
                println!(
                    "\n{CYAN}=== {} ==={RESET}",
                    card.shift.start.format("%A, %d %B %Y")
                );
                current_day = day;
            }
            print_card(card, cfg.progress_width);
        }
    }
    Ok(())
}

fn print_card(card: &ShiftOccupancy, bar_width: usize) {
    let s = &card.shift;
    println!();
    println!("[{}] {}", s.shift_type_name, s.title);
    println!(
        "  {} | 📍 {} | ⏱ {}",
        s.span_str(),
        s.location_name,
        format_hours_precise(card.duration_hours)
    );

    if card.slots.is_empty() {
        println!("  {GREY}no angel types needed{RESET}");
    }

    for slot in &card.slots {
        let color = if slot.is_full() { GREEN } else { YELLOW };
        println!(
            "  {}: {color}{}/{}{RESET} {}",
            slot.angel_type_name,
            slot.count,
            slot.needs,
            progress_bar(slot.count as f64, slot.needs as f64, bar_width)
        );
        if !slot.users.is_empty() {
            println!("    🤹 {}", slot.users.join(", "));
        }
    }
}
