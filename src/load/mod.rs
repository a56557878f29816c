//! Source loading: picks the input file, reads it into a text grid and hands
//! it to the normalizer. PDF reports go through the table extractor first.

mod delimited;
pub(crate) mod excel_date;
mod sheet;

use crate::config::Config;
use crate::core::normalize::Normalizer;
use crate::errors::{AppError, AppResult};
use crate::extract;
use crate::models::record::Record;
use crate::models::table::{Grid, flat_rows_to_grid};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported source kinds, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Spreadsheet,
    Csv,
    Pdf,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(SourceKind::Spreadsheet),
            "csv" => Ok(SourceKind::Csv),
            "pdf" => Ok(SourceKind::Pdf),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// Use `explicit` when given, otherwise the first `.xlsx` (by name) in `cfg.source_dir`.
pub fn resolve_source(explicit: Option<&str>, cfg: &Config) -> AppResult<PathBuf> {
    if let Some(p) = explicit {
        let path = expand_tilde(p);
        if !path.is_file() {
            return Err(AppError::InputNotFound(path.display().to_string()));
        }
        return Ok(path);
    }

    let dir = expand_tilde(&cfg.source_dir);
    let entries = fs::read_dir(&dir)
        .map_err(|_| AppError::InputNotFound(format!("no .xlsx files in {}", dir.display())))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case("xlsx"))
        })
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InputNotFound(format!("no .xlsx files in {}", dir.display())))
}

/// Read `path` into a text grid. PDF sources come back as the 8-column flat table.
pub fn load_grid(path: &Path, cfg: &Config) -> AppResult<Grid> {
    if !path.is_file() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }

    match SourceKind::from_path(path)? {
        SourceKind::Spreadsheet => sheet::read_first_sheet(path),
        SourceKind::Csv => delimited::read_csv_grid(path),
        SourceKind::Pdf => {
            let rows = extract::extract_pdf(path, &cfg.sentinels)?;
            Ok(flat_rows_to_grid(&rows))
        }
    }
}

/// Load and normalize every record of `path`. Called once per process.
pub fn load_records(path: &Path, cfg: &Config) -> AppResult<Vec<Record>> {
    let grid = load_grid(path, cfg)?;
    let records = Normalizer::from_config(cfg).normalize(&grid)?;

    info(format!(
        "Loaded {} records from {}",
        records.len(),
        path.display()
    ));
    Ok(records)
}
