//! Aggregation queries over normalized records.
//!
//! Every function here is pure: records are borrowed, never mutated.
//! Grouping is exact string equality on Project/Tags, keys come out sorted.

use crate::models::day_type::{DayType, GroupBy};
use crate::models::record::Record;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Hours and row count of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub hours: f64,
    pub count: usize,
}

/// Result of a grouping query. Empty is a valid outcome ("no data").
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Breakdown {
    pub groups: Vec<GroupTotal>,
}

impl Breakdown {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn total_hours(&self) -> f64 {
        self.groups.iter().map(|g| g.hours).sum()
    }

    pub fn get(&self, key: &str) -> Option<&GroupTotal> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// key → hours
    pub fn hours_by_key(&self) -> BTreeMap<String, f64> {
        self.groups
            .iter()
            .map(|g| (g.key.clone(), g.hours))
            .collect()
    }

    /// key → row count
    pub fn counts_by_key(&self) -> BTreeMap<String, usize> {
        self.groups
            .iter()
            .map(|g| (g.key.clone(), g.count))
            .collect()
    }
}

fn group_key(record: &Record, by: GroupBy) -> &str {
    match by {
        GroupBy::Project => &record.project,
        GroupBy::Tags => &record.tags,
    }
}

fn group<'a, I>(records: I, by: GroupBy) -> Breakdown
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut acc: BTreeMap<&'a str, (f64, usize)> = BTreeMap::new();

    for r in records {
        let entry = acc.entry(group_key(r, by)).or_insert((0.0, 0));
        entry.0 += r.duration_minutes;
        entry.1 += 1;
    }

    Breakdown {
        groups: acc
            .into_iter()
            .map(|(key, (minutes, count))| GroupTotal {
                key: key.to_string(),
                hours: minutes / 60.0,
                count,
            })
            .collect(),
    }
}

/// Hours per project.
pub fn totals_by_project(records: &[Record]) -> Breakdown {
    group(records, GroupBy::Project)
}

/// Hours per tag, optionally restricted to one project first.
pub fn totals_by_tag(records: &[Record], project: Option<&str>) -> Breakdown {
    match project {
        Some(p) => group(records.iter().filter(|r| r.project == p), GroupBy::Tags),
        None => group(records, GroupBy::Tags),
    }
}

/// Hours per project among the rows carrying `tag`.
pub fn totals_by_project_for_tag(records: &[Record], tag: &str) -> Breakdown {
    group(records.iter().filter(|r| r.tags == tag), GroupBy::Project)
}

/// Rows dated within `start..=end`. Undated rows are dropped.
pub fn filter_by_date_range(records: &[Record], start: NaiveDate, end: NaiveDate) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.start_date.is_some_and(|d| d >= start && d <= end))
        .cloned()
        .collect()
}

/// Rows falling on the given kind of day. `Both` keeps every row, the other
/// two drop undated rows.
pub fn filter_by_day_type(records: &[Record], kind: DayType) -> Vec<Record> {
    if kind == DayType::Both {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| r.day_type() == Some(kind))
        .cloned()
        .collect()
}

/// Hours per day for every group, over `max(num_days, 1)` days.
pub fn daily_average(records: &[Record], by: GroupBy, num_days: usize) -> Breakdown {
    let days = num_days.max(1) as f64;
    let mut out = group(records, by);
    for g in &mut out.groups {
        g.hours /= days;
    }
    out
}

pub fn total_hours(records: &[Record]) -> f64 {
    records.iter().map(|r| r.duration_minutes).sum::<f64>() / 60.0
}

/// Distinct calendar days carrying at least one dated row.
pub fn total_days(records: &[Record]) -> usize {
    records
        .iter()
        .filter_map(|r| r.start_date)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Earliest and latest start date, if any row is dated.
pub fn date_bounds(records: &[Record]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = records.iter().filter_map(|r| r.start_date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

/// Distinct projects in first-seen order.
pub fn projects(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.project.as_str()))
        .map(|r| r.project.clone())
        .collect()
}
