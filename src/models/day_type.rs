use clap::ValueEnum;
use serde::Serialize;

/// Weekday (Mon–Fri) vs Weekend (Sat–Sun). `Both` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum DayType {
    Weekday,
    Weekend,
    Both,
}

impl DayType {
    /// Index counted from Monday = 0; 5 and 6 are the weekend.
    pub fn from_weekday_index(idx: u32) -> Self {
        if idx >= 5 {
            DayType::Weekend
        } else {
            DayType::Weekday
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
            DayType::Both => "both",
        }
    }
}

/// Key used by the main distribution toggle and daily averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum GroupBy {
    Project,
    Tags,
}
