use chrono::{NaiveDate, NaiveDateTime};

/// Date-only layouts tried, in order, by [`parse_loose_date`].
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%y"];

/// Date + time layouts; only the date part is kept.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Permissive date parsing used for the "Start date" column.
///
/// Returns `None` instead of an error for anything it cannot read.
pub fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // "09/05/2025 10:00" and similar: retry on the first token
    if let Some((first, _)) = s.split_once(char::is_whitespace) {
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(first, fmt) {
                return Some(d);
            }
        }
    }

    // Excel serial number written out as text
    if let Ok(serial) = s.parse::<f64>()
        && serial >= 1.0
    {
        return crate::load::excel_date::excel_serial_to_datetime(serial).map(|dt| dt.date());
    }

    None
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
