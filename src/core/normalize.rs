//! Record normalizer: text grid → typed [`Record`]s.

use crate::config::{Config, Sentinels};
use crate::core::duration::parse_duration;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::models::table::Grid;
use crate::utils::date::parse_loose_date;

/// Words that must all appear in the header row.
const HEADER_MARKERS: [&str; 3] = ["description", "duration", "project"];

pub struct Normalizer {
    pub sentinels: Sentinels,
    pub header_scan_rows: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Column positions resolved from the header row.
struct Columns {
    description: Option<usize>,
    duration: usize,
    member: Option<usize>,
    project: usize,
    tags: usize,
    start_date: usize,
    start_time: Option<usize>,
    stop_time: Option<usize>,
}

impl Columns {
    fn resolve(header: &[String]) -> AppResult<Self> {
        let names: Vec<&str> = header.iter().map(|h| h.trim()).collect();
        let find = |name: &str| names.iter().position(|n| *n == name);
        let require = |name: &str| find(name).ok_or_else(|| AppError::MissingColumn(name.into()));

        Ok(Self {
            description: find("Description"),
            duration: require("Duration")?,
            member: find("Member"),
            project: require("Project")?,
            tags: require("Tags")?,
            start_date: require("Start date")?,
            start_time: find("Start time"),
            stop_time: find("Stop time"),
        })
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn opt_cell(row: &[String], idx: Option<usize>) -> String {
    idx.map(|i| cell(row, i).to_string()).unwrap_or_default()
}

fn or_sentinel(value: &str, sentinel: &str) -> String {
    if value.trim().is_empty() {
        sentinel.to_string()
    } else {
        value.to_string()
    }
}

/// Index of the first row (within `scan_rows`) mentioning description, duration
/// and project; row 0 when none does.
pub fn find_header_row(grid: &Grid, scan_rows: usize) -> usize {
    grid.iter()
        .take(scan_rows)
        .position(|row| {
            let joined = row
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            HEADER_MARKERS.iter().all(|m| joined.contains(m))
        })
        .unwrap_or(0)
}

impl Normalizer {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            sentinels: cfg.sentinels.clone(),
            header_scan_rows: cfg.header_scan_rows,
        }
    }

    pub fn normalize(&self, grid: &Grid) -> AppResult<Vec<Record>> {
        if grid.is_empty() {
            return Ok(Vec::new());
        }

        let header_idx = find_header_row(grid, self.header_scan_rows);
        let cols = Columns::resolve(&grid[header_idx])?;

        let records = grid[header_idx + 1..]
            .iter()
            .filter(|row| row.iter().any(|c| !c.trim().is_empty()))
            .map(|row| self.to_record(row, &cols))
            .collect();

        Ok(records)
    }

    fn to_record(&self, row: &[String], cols: &Columns) -> Record {
        let duration = cell(row, cols.duration);

        Record {
            description: opt_cell(row, cols.description),
            duration_minutes: parse_duration(Some(duration)),
            member: opt_cell(row, cols.member),
            project: or_sentinel(cell(row, cols.project), &self.sentinels.project),
            tags: or_sentinel(cell(row, cols.tags), &self.sentinels.tag),
            start_date: parse_loose_date(cell(row, cols.start_date)),
            start_time: opt_cell(row, cols.start_time),
            stop_time: opt_cell(row, cols.stop_time),
        }
    }
}
