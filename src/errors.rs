//! Unified application error type.
//! All modules (load, extract, core, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("PDF read error: {0}")]
    Pdf(String),

    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("No input file found: {0}")]
    InputNotFound(String),

    #[error("Unsupported input file: {0}")]
    UnsupportedInput(String),

    #[error("Missing column in source table: {0}")]
    MissingColumn(String),

    // ---------------------------
    // Extraction errors
    // ---------------------------
    #[error("No tables found in the PDF: extraction produced no output")]
    NoTables,

    #[error("No header block found in the extracted tables: extraction produced no output")]
    NoHeaderBlock,

    #[error("Row {0} of the extracted tables has cells past the 7 header columns: extraction produced no output")]
    MisalignedRow(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
