// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::extract::extract_pdf;
use crate::load::SourceKind;
use crate::models::table::FlatRow;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Logica di alto livello per la conversione PDF → tabella piatta.
pub struct ConvertLogic;

impl ConvertLogic {
    /// Converte il report PDF `input` e scrive la tabella a 8 colonne in `file`.
    ///
    /// Se l'estrazione fallisce (nessuna tabella, nessun blocco header) non
    /// viene scritto alcun file.
    pub fn convert(
        cfg: &Config,
        input: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let input_path = expand_tilde(input);
        if !input_path.is_file() {
            return Err(AppError::InputNotFound(input_path.display().to_string()));
        }
        if SourceKind::from_path(&input_path)? != SourceKind::Pdf {
            return Err(AppError::UnsupportedInput(format!(
                "{}: convert expects a PDF report",
                input_path.display()
            )));
        }

        let out = expand_tilde(file);
        ensure_writable(&out, force)?;

        let rows = extract_pdf(&input_path, &cfg.sentinels)?;
        Self::write(&rows, format, &out)?;

        Ok(rows.len())
    }

    /// Scrive la tabella piatta nel formato richiesto.
    pub fn write(rows: &[FlatRow], format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Xlsx => export_xlsx(rows, path),
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
        }
    }
}
