//! Duration parser: turns one raw duration cell into signed minutes.
//!
//! Accepted shapes: `H:M:S`, `H:M`, optionally signed with a leading `-`
//! and optionally carrying a `N days` prefix. The day count is dropped,
//! only the trailing time component is counted.

/// Cell values that stand for "no duration".
pub const PLACEHOLDERS: [&str; 5] = ["-", "", "nan", "#", "@"];

/// Outcome of reading a duration token.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationToken {
    /// Empty cell or one of [`PLACEHOLDERS`].
    Placeholder,
    /// Non-numeric parts or broken structure.
    Garbage,
    Parsed {
        negative: bool,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl DurationToken {
    pub fn minutes(&self) -> f64 {
        match self {
            DurationToken::Placeholder | DurationToken::Garbage => 0.0,
            DurationToken::Parsed {
                negative,
                hours,
                minutes,
                seconds,
            } => {
                let total = *hours as f64 * 60.0 + *minutes as f64 + *seconds as f64 / 60.0;
                if *negative { -total } else { total }
            }
        }
    }
}

/// Classify a raw token without losing which branch was taken.
pub fn classify_duration(token: Option<&str>) -> DurationToken {
    let Some(raw) = token else {
        return DurationToken::Placeholder;
    };

    let trimmed = raw.trim();
    if PLACEHOLDERS.contains(&trimmed) {
        return DurationToken::Placeholder;
    }

    let negative = trimmed.starts_with('-');
    let rest = trimmed.replace('-', "").replace("days", "");
    let rest = rest.trim();

    let time_part = if rest.contains(' ') {
        match rest.split_whitespace().last() {
            Some(t) => t,
            None => return DurationToken::Garbage,
        }
    } else {
        rest
    };

    if !time_part.contains(':') {
        // no time component at all: counts as zero, not as garbage
        return DurationToken::Parsed {
            negative,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
    }

    let parts: Vec<&str> = time_part.split(':').collect();
    let numbers: Option<Vec<i64>> = match parts.len() {
        2 | 3 => parts.iter().map(|p| p.parse::<i64>().ok()).collect(),
        _ => Some(vec![0, 0, 0]),
    };

    match numbers.as_deref() {
        Some([h, m]) => DurationToken::Parsed {
            negative,
            hours: *h,
            minutes: *m,
            seconds: 0,
        },
        Some([h, m, s]) => DurationToken::Parsed {
            negative,
            hours: *h,
            minutes: *m,
            seconds: *s,
        },
        _ => DurationToken::Garbage,
    }
}

/// Signed minutes for a raw duration cell. Never fails: placeholders and
/// garbage both give `0.0`.
pub fn parse_duration(token: Option<&str>) -> f64 {
    let minutes = classify_duration(token).minutes();
    if minutes.is_finite() { minutes } else { 0.0 }
}
