//! Reports view: spreadsheet export form, CSV download and CSV upload.

use crate::api::SheetsApi;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::sheets::{
    CsvExportQuery, DEFAULT_SHEET_NAME, SheetExportRequest, SheetExportResponse,
};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Export-to-spreadsheet form. Fields survive failed submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportForm {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
    pub worker_ids: Vec<i64>,
    busy: bool,
}

impl Default for ExportForm {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl ExportForm {
    pub fn new(sheet_name: &str) -> Self {
        Self {
            spreadsheet_id: String::new(),
            sheet_name: sheet_name.to_string(),
            date_from: None,
            date_to: None,
            worker_ids: Vec::new(),
            busy: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The export button is enabled whenever no request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.busy
    }

    /// An empty spreadsheet id asks the backend for a new spreadsheet.
    pub fn to_request(&self) -> SheetExportRequest {
        let id = self.spreadsheet_id.trim();
        SheetExportRequest {
            spreadsheet_id: (!id.is_empty()).then(|| id.to_string()),
            sheet_name: self.sheet_name.trim().to_string(),
            date_from: self.date_from,
            date_to: self.date_to,
            worker_ids: (!self.worker_ids.is_empty()).then(|| self.worker_ids.clone()),
        }
    }

    pub async fn submit(&mut self, api: &SheetsApi<'_>) -> AppResult<SheetExportResponse> {
        if self.busy {
            return Err(AppError::Form("an export is already running".into()));
        }
        self.busy = true;
        let outcome = api.export(&self.to_request()).await;
        self.busy = false;
        outcome
    }
}

/// Keep only the final path component of a server-chosen file name.
pub fn safe_file_name(name: &str) -> AppResult<String> {
    Path::new(name.trim())
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty() && n != "..")
        .ok_or_else(|| AppError::Export(format!("invalid download file name '{name}'")))
}

/// Fetch the CSV export and save it as `<dir>/<server filename>`.
pub async fn download_csv(
    api: &SheetsApi<'_>,
    query: &CsvExportQuery,
    dir: &Path,
    force: bool,
) -> AppResult<PathBuf> {
    let export = api.export_csv(query).await?;
    let target = dir.join(safe_file_name(&export.filename)?);

    ensure_writable(&target, force)?;
    fs::create_dir_all(dir)?;
    fs::write(&target, export.csv_data.as_bytes())?;

    info!(file = %target.display(), bytes = export.csv_data.len(), "csv saved");
    Ok(target)
}

/// Uploads must be `.csv` files that exist.
pub fn check_csv_upload(path: &Path) -> AppResult<()> {
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(AppError::Validation(format!(
            "{} is not a .csv file",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(AppError::Validation(format!("{} not found", path.display())));
    }
    Ok(())
}
