//! Table detection on the text layer of a PDF.
//!
//! A table is a run of consecutive non-blank lines; cells are separated by
//! tabs or by two or more spaces. Rows of two or more cells are fitted to the
//! 7 header columns.

use crate::errors::{AppError, AppResult};
use crate::extract::TableSource;
use crate::extract::restructure::HEADER_COLUMNS;
use crate::models::table::RawTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static CELL_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\t+| {2,}").expect("valid cell separator regex")
});

static DATE_CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\d{1,4}[/.-]\d{1,2}[/.-]\d{1,4}").expect("valid date cell regex")
});

const WIDTH: usize = HEADER_COLUMNS.len();

/// Text of a PDF, one string per page.
pub struct PdfTableReader {
    pages: Vec<String>,
}

impl PdfTableReader {
    pub fn open(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| AppError::Pdf(e.to_string()))?;
        Ok(Self::from_page_texts(pages))
    }

    pub fn from_page_texts(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl TableSource for PdfTableReader {
    fn pages(&self) -> AppResult<Vec<Vec<RawTable>>> {
        Ok(self.pages.iter().map(|p| detect_tables(p)).collect())
    }
}

/// Split one text line into its cells.
pub fn split_cells(line: &str) -> Vec<String> {
    CELL_SEPARATOR
        .split(line.trim())
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Bring a text row to the 7 header columns.
///
/// Extra leading cells are a description split on a double space and are
/// merged back. A short row is anchored on its DATE cell: the cells before it
/// fill DESCRIPTION onwards, so the trailing ones (TAGS first) stay empty.
/// Without a date the row is padded at the end.
pub fn fit_row(mut cells: Vec<String>) -> Vec<String> {
    if cells.len() > WIDTH {
        let rest = cells.split_off(cells.len() - (WIDTH - 1));
        let mut fitted = vec![cells.join(" ")];
        fitted.extend(rest);
        return fitted;
    }

    if cells.len() < WIDTH {
        // DATE is one of the last two cells, TIME may be missing
        let from = cells.len().saturating_sub(2).max(2);
        let date = (from..cells.len()).rev().find(|&i| DATE_CELL.is_match(&cells[i]));
        if let Some(at) = date {
            let tail = cells.split_off(at);
            cells.resize(WIDTH - 2, String::new());
            cells.extend(tail);
        }
        cells.resize(WIDTH, String::new());
    }

    cells
}

/// Every table of one page, in reading order.
pub fn detect_tables(page_text: &str) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in page_text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                tables.push(RawTable::new(std::mem::take(&mut current)));
            }
            continue;
        }
        let cells = split_cells(line);
        if cells.len() >= 2 {
            current.push(fit_row(cells));
        } else {
            current.push(cells);
        }
    }

    if !current.is_empty() {
        tables.push(RawTable::new(current));
    }

    tables
}
