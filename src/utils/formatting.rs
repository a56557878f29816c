//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours as `HHh MMm`, e.g. `1.5` → `01h 30m`; negative values keep their sign.
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Hours with two decimals, as shown in the chart hover text.
pub fn hours_decimal(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn percent(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Small text bar proportional to `percent` (0..=100), `width` cells wide.
pub fn share_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled.min(width)))
}
