// src/load/delimited.rs

use crate::errors::AppResult;
use crate::models::table::Grid;
use std::path::Path;

/// Legge un CSV senza interpretare l'header: la riga di intestazione
/// viene cercata dopo, come per i fogli di calcolo.
pub(crate) fn read_csv_grid(path: &Path) -> AppResult<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Grid::new();
    for record in rdr.records() {
        let record = record?;
        grid.push(record.iter().map(|c| c.to_string()).collect());
    }

    if let Some(first) = grid.first_mut().and_then(|r| r.first_mut()) {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    Ok(grid)
}
