//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};

/// Hours rounded to whole hours with an "h" suffix, as on the stats cards.
pub fn format_hours(hours: f64) -> String {
    format!("{:.0}h", hours)
}

/// Hours with two decimals, as on the shift cards.
pub fn format_hours_precise(hours: f64) -> String {
    format!("{:.2}h", hours)
}

/// `worked / needed` in percent. `None` when nothing is needed.
pub fn coverage_percent(worked: f64, needed: f64) -> Option<f64> {
    if needed <= 0.0 {
        None
    } else {
        Some(worked / needed * 100.0)
    }
}

pub fn format_percent(p: Option<f64>) -> String {
    match p {
        Some(v) => format!("{:.0}%", v),
        None => "--".to_string(),
    }
}

/// Text progress bar of `width` cells. Full bars are green, partial ones
/// yellow; a bar without a denominator is drawn grey and empty.
pub fn progress_bar(count: f64, total: f64, width: usize) -> String {
    let Some(percent) = coverage_percent(count, total) else {
        return format!("{GREY}{}{RESET}", "░".repeat(width));
    };

    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let color = if percent >= 100.0 { GREEN } else { YELLOW };

    format!(
        "{color}{}{RESET}{}",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}
