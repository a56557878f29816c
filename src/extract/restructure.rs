//! Stage 2: header-delimited blocks → clean flat rows.

use crate::config::Sentinels;
use crate::errors::{AppError, AppResult};
use crate::models::table::{FlatRow, Grid, RawTable};
use crate::ui::messages::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Header line repeated at the top of every table fragment of the report.
pub const HEADER_LINE: &str = "DESCRIPTION DURATION MEMBER PROJECT TAGS DATE TIME";

/// Labels given to the cells of every block row.
pub const HEADER_COLUMNS: [&str; 7] = [
    "DESCRIPTION",
    "DURATION",
    "MEMBER",
    "PROJECT",
    "TAGS",
    "DATE",
    "TIME",
];

const WIDTH: usize = HEADER_COLUMNS.len();

const DESCRIPTION: usize = 0;
const DURATION: usize = 1;
const MEMBER: usize = 2;
const PROJECT: usize = 3;
const TAGS: usize = 4;
const DATE: usize = 5;
const TIME: usize = 6;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static DASH_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*$").expect("valid dash regex"));

/// Concatenate raw tables into one grid.
///
/// Row 0 holds column names. Report tables (header line on top, or no row
/// wider than the 7 header columns) are stacked by position; any other table
/// is placed under its own header names, unioned in first-seen order.
pub fn concat_tables(tables: &[RawTable]) -> Grid {
    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut placed: Vec<Vec<(usize, String)>> = Vec::new();

    for table in tables.iter().filter(|t| t.rows.len() > 1) {
        let names = header_names(table.header().unwrap_or(&[]));

        if aligns_by_position(table) {
            let width = table.rows.iter().map(Vec::len).max().unwrap_or(0);
            for i in columns.len()..width {
                let name = names.get(i).cloned().unwrap_or_else(|| format!("Column{i}"));
                index.entry(name.clone()).or_insert(i);
                columns.push(name);
            }

            placed.extend(
                table
                    .records()
                    .iter()
                    .map(|r| r.iter().cloned().enumerate().collect()),
            );
            continue;
        }

        let mut positions: Vec<usize> = names
            .iter()
            .map(|name| column_position(name, &mut columns, &mut index))
            .collect();

        for record in table.records() {
            // more cells than header names: positional columns
            while positions.len() < record.len() {
                let name = format!("Column{}", positions.len());
                positions.push(column_position(&name, &mut columns, &mut index));
            }

            let cells = record
                .iter()
                .enumerate()
                .map(|(i, value)| (positions[i], value.clone()))
                .collect();
            placed.push(cells);
        }
    }

    let width = columns.len();
    let mut grid: Grid = Vec::with_capacity(placed.len() + 1);
    grid.push(columns);

    for cells in placed {
        let mut row = vec![String::new(); width];
        for (col, value) in cells {
            row[col] = value;
        }
        grid.push(row);
    }

    grid
}

fn aligns_by_position(table: &RawTable) -> bool {
    table.header().is_some_and(is_header_row) || table.rows.iter().all(|r| r.len() <= WIDTH)
}

fn column_position(
    name: &str,
    columns: &mut Vec<String>,
    index: &mut HashMap<String, usize>,
) -> usize {
    *index.entry(name.to_string()).or_insert_with(|| {
        columns.push(name.to_string());
        columns.len() - 1
    })
}

/// Header names of one table; blanks get a positional name, repeats a `.n` suffix.
fn header_names(header: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let base = if h.trim().is_empty() {
                format!("Column{i}")
            } else {
                h.trim().to_string()
            };
            let n = seen.entry(base.clone()).or_insert(0);
            let name = if *n == 0 {
                base
            } else {
                format!("{base}.{n}")
            };
            *n += 1;
            name
        })
        .collect()
}

fn collapse_ws(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").to_uppercase()
}

/// A block boundary: the first cell, or the non-empty cells among the first
/// 7 joined, spell the header line.
pub fn is_header_row(row: &[String]) -> bool {
    let first = row.first().map(|c| collapse_ws(c)).unwrap_or_default();
    if first == HEADER_LINE {
        return true;
    }

    let joined = row
        .iter()
        .take(WIDTH)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_ws(&joined) == HEADER_LINE
}

/// Cut `grid` into header-delimited blocks and clean every row.
///
/// Fails with [`AppError::NoHeaderBlock`] when the header line never appears,
/// and with [`AppError::MisalignedRow`] when a block row carries cells past
/// the 7 header columns.
pub fn restructure(grid: &Grid, sentinels: &Sentinels) -> AppResult<Vec<FlatRow>> {
    let boundaries: Vec<usize> = grid
        .iter()
        .enumerate()
        .filter(|(_, row)| is_header_row(row))
        .map(|(i, _)| i)
        .collect();

    if boundaries.is_empty() {
        return Err(AppError::NoHeaderBlock);
    }

    info(format!("Found {} header blocks", boundaries.len()));

    let ends = boundaries[1..].iter().copied().chain(std::iter::once(grid.len()));
    let mut rows = Vec::new();

    for (&start, end) in boundaries.iter().zip(ends) {
        for (i, row) in grid.iter().enumerate().take(end).skip(start + 1) {
            if row.iter().skip(WIDTH).any(|c| !c.trim().is_empty()) {
                return Err(AppError::MisalignedRow(i));
            }

            let cells = label_row(row);
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }

            let d = cells[DESCRIPTION].trim().to_uppercase();
            if d == "DESCRIPTION" || d == HEADER_LINE {
                continue;
            }

            rows.push(to_flat_row(&cells, sentinels));
        }
    }

    Ok(rows)
}

/// Fit a row to the header columns.
fn label_row(row: &[String]) -> [String; WIDTH] {
    std::array::from_fn(|i| row.get(i).cloned().unwrap_or_default())
}

/// TIME cell → (start, stop); both empty when there is no `-`.
pub fn split_time(time: &str) -> (String, String) {
    let t = time.replace('\n', " ").replace("  ", " ");
    let t = t.trim();

    match t.split_once('-') {
        Some((start, stop)) => (start.trim().to_string(), stop.trim().to_string()),
        None => (String::new(), String::new()),
    }
}

/// Leading bullet and whitespace removed, newlines flattened.
pub fn clean_project(project: &str) -> String {
    let p = project.strip_prefix('•').unwrap_or(project);
    p.trim_start().replace('\n', " ").trim().to_string()
}

/// `)` removed; for a date range only the first date is kept.
pub fn clean_start_date(date: &str) -> String {
    let d = date.replace(')', "");
    let d = d.trim();
    match d.split_once('-') {
        Some((first, _)) => first.trim().to_string(),
        None => d.to_string(),
    }
}

/// Empty cells, `-`, padded `-` and `nan` become the PDF tag sentinel.
pub fn clean_tags(tags: &str, sentinel: &str) -> String {
    if tags.trim().is_empty() || tags == "nan" || DASH_ONLY.is_match(tags) {
        sentinel.to_string()
    } else {
        tags.to_string()
    }
}

fn to_flat_row(cells: &[String; WIDTH], sentinels: &Sentinels) -> FlatRow {
    let (start_time, stop_time) = split_time(&cells[TIME]);

    FlatRow {
        description: cells[DESCRIPTION].clone(),
        duration: cells[DURATION].clone(),
        member: cells[MEMBER].clone(),
        project: clean_project(&cells[PROJECT]),
        tags: clean_tags(&cells[TAGS], &sentinels.pdf_tag),
        start_date: clean_start_date(cells[DATE].trim()),
        start_time,
        stop_time,
    }
}
