// src/load/sheet.rs

use crate::errors::{AppError, AppResult};
use crate::load::excel_date::{excel_days_to_duration_text, excel_serial_to_text};
use crate::models::table::Grid;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Legge il primo foglio di un file xlsx/xls/ods come griglia di testo.
pub(crate) fn read_first_sheet(path: &Path) -> AppResult<Grid> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::UnsupportedInput(format!("{}: no sheets", path.display())))?;

    let range = workbook.worksheet_range(&sheet_name)?;

    let grid: Grid = range
        .rows()
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();

    Ok(grid)
}

/// Testo di una cella, reso come lo mostrerebbe l'export originale.
pub(crate) fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                excel_days_to_duration_text(dt.as_f64())
            } else {
                excel_serial_to_text(dt.as_f64())
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
