//! PDF report → flat 8-column table.
//!
//! Stage 1 ([`layout`]) finds the raw tables of every page, stage 2
//! ([`restructure`]) cuts the concatenated rows into header-delimited blocks
//! and cleans them up.

pub mod layout;
pub mod restructure;

use crate::config::Sentinels;
use crate::errors::{AppError, AppResult};
use crate::models::table::{FlatRow, RawTable};
use crate::ui::messages::info;
use std::path::Path;

pub use layout::PdfTableReader;
pub use restructure::{HEADER_COLUMNS, concat_tables, restructure};

/// Anything able to hand out the raw tables of a document, page by page.
pub trait TableSource {
    fn pages(&self) -> AppResult<Vec<Vec<RawTable>>>;
}

/// Run both stages over any table source.
pub fn extract_from<S: TableSource>(source: &S, sentinels: &Sentinels) -> AppResult<Vec<FlatRow>> {
    let pages = source.pages()?;

    let tables: Vec<RawTable> = pages
        .into_iter()
        .flatten()
        .filter(|t| t.rows.len() > 1)
        .collect();

    if tables.is_empty() {
        return Err(AppError::NoTables);
    }

    info(format!("Found {} tables", tables.len()));

    let grid = concat_tables(&tables);
    let rows = restructure(&grid, sentinels)?;

    info(format!("Extracted {} rows", rows.len()));
    Ok(rows)
}

/// Extract the flat table of the PDF at `path`.
pub fn extract_pdf(path: &Path, sentinels: &Sentinels) -> AppResult<Vec<FlatRow>> {
    info(format!("Reading PDF: {}", path.display()));
    extract_from(&PdfTableReader::open(path)?, sentinels)
}
