// src/load/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86400.0;

fn excel_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

/// Converte un *seriale Excel* (giorni dal 1899-12-30, frazione = ora del giorno)
/// in data/ora.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let total_secs = (serial * SECONDS_PER_DAY).round();
    if total_secs.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }

    excel_epoch()?.checked_add_signed(Duration::seconds(total_secs as i64))
}

/// Rende una durata espressa in giorni (es. 0.0625 = 1h30m) nello stesso
/// formato testuale dell'export originale: `H:MM:SS`, oppure
/// `N days HH:MM:SS` oltre le 24 ore.
pub(crate) fn excel_days_to_duration_text(days: f64) -> String {
    if !days.is_finite() {
        return String::new();
    }

    let negative = days < 0.0;
    let total_secs = (days.abs() * SECONDS_PER_DAY).round() as u64;

    let d = total_secs / 86400;
    let rem = total_secs % 86400;
    let (h, m, s) = (rem / 3600, (rem % 3600) / 60, rem % 60);

    let sign = if negative { "-" } else { "" };

    if d > 0 {
        format!("{sign}{d} days {h:02}:{m:02}:{s:02}")
    } else {
        format!("{sign}{h}:{m:02}:{s:02}")
    }
}

/// Testo per una cella data/ora: solo data, solo ora, oppure entrambe.
pub(crate) fn excel_serial_to_text(serial: f64) -> String {
    if (0.0..1.0).contains(&serial) {
        return excel_days_to_duration_text(serial);
    }

    match excel_serial_to_datetime(serial) {
        Some(dt) if serial.fract() == 0.0 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}
