use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::day_type::DayType;
use super::table::FlatRow;

/// One cleaned time entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub description: String,
    pub duration_minutes: f64,
    pub member: String,
    pub project: String, // never empty, see config::Sentinels
    pub tags: String,    // never empty, see config::Sentinels
    pub start_date: Option<NaiveDate>,
    pub start_time: String,
    pub stop_time: String,
}

impl Record {
    pub fn hours(&self) -> f64 {
        self.duration_minutes / 60.0
    }

    /// `None` when the start date could not be parsed.
    pub fn day_type(&self) -> Option<DayType> {
        self.start_date
            .map(|d| DayType::from_weekday_index(d.weekday().num_days_from_monday()))
    }

    pub fn date_str(&self) -> String {
        self.start_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Back to the 8 text columns (dates as ISO `YYYY-MM-DD`, minutes as `H:MM:SS`).
    pub fn to_flat_row(&self) -> FlatRow {
        let secs = (self.duration_minutes.abs() * 60.0).round() as i64;
        let sign = if self.duration_minutes < 0.0 { "-" } else { "" };

        FlatRow {
            description: self.description.clone(),
            duration: format!(
                "{sign}{}:{:02}:{:02}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60
            ),
            member: self.member.clone(),
            project: self.project.clone(),
            tags: self.tags.clone(),
            start_date: self.date_str(),
            start_time: self.start_time.clone(),
            stop_time: self.stop_time.clone(),
        }
    }
}
