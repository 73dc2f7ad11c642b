/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Coverage color:
/// \>= 100% → green
/// \< 100% → yellow
/// nothing needed → grey
pub fn color_for_coverage(percent: Option<f64>) -> &'static str {
    match percent {
        Some(p) if p >= 100.0 => GREEN,
        Some(_) => YELLOW,
        None => GREY,
    }
}

/// Overbooked hours are highlighted in magenta when non-zero.
pub fn colorize_overbooked(value: &str, hours: f64) -> String {
    if hours > 0.0 {
        format!("{MAGENTA}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
