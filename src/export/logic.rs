use crate::core::clock::Clock;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::record::RecordState;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::fs::ensure_writable;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the current roster snapshot as an attendance report.
    ///
    /// - `file` must be an absolute path
    /// - `state` keeps only records in that state
    ///
    /// Returns the number of exported records.
    pub fn export<S: RecordStore, C: Clock>(
        ledger: &mut Ledger<S, C>,
        format: ExportFormat,
        file: &str,
        state: Option<RecordState>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let roster = ledger.snapshot()?;
        let records: Vec<RecordExport> = roster
            .records()
            .iter()
            .filter(|r| state.is_none_or(|s| r.state() == s))
            .map(RecordExport::from)
            .collect();

        if records.is_empty() {
            warning("No records to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
        }

        Ok(records.len())
    }
}
