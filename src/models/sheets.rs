use crate::errors::{AppError, AppResult};
use crate::utils::time::opt_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SHEET_NAME: &str = "Shifts Data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetExportRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spreadsheet_id: Option<String>,
    pub sheet_name: String,
    #[serde(
        with = "opt_timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub date_from: Option<NaiveDateTime>,
    #[serde(
        with = "opt_timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub date_to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub worker_ids: Option<Vec<i64>>,
}

impl SheetExportRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.sheet_name.trim().is_empty() {
            return Err(AppError::Validation("sheet name is required".into()));
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to)
            && from > to
        {
            return Err(AppError::Validation(
                "export range start is after its end".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetExportResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    #[serde(default)]
    pub sheet_url: Option<String>,
    #[serde(default)]
    pub records_exported: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetImportRequest {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub range_name: Option<String>,
}

impl SheetImportRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(AppError::Validation("spreadsheet id is required".into()));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(AppError::Validation("sheet name is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub imported_count: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Query for `GET /google-sheets/export-csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CsvExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvExport {
    pub csv_data: String,
    pub filename: String,
}
