// src/export/logic.rs

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::time_record::{RecordQuery, TimeRecord};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use tracing::debug;

/// Page size used while walking `/tracking/records`.
const PAGE: u32 = 100;

/// High-level logic for the local export of time records.
pub struct ExportLogic;

impl ExportLogic {
    /// Export time records fetched from the backend.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub async fn export(
        api: &ApiClient,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        worker_id: Option<i64>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        ensure_writable(&path, force)?;

        let records = load_records(api, worker_id).await?;
        let rows = select_rows(&records, date_bounds);

        if rows.is_empty() {
            warning("No time records found for selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

/// Records whose clock-in date falls inside the bounds, oldest first.
pub fn select_rows(
    records: &[TimeRecord],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<RecordExport> {
    let mut selected: Vec<&TimeRecord> = records
        .iter()
        .filter(|r| match bounds {
            None => true,
            Some((from, to)) => {
                let d = r.clock_in.date();
                d >= from && d <= to
            }
        })
        .collect();
    selected.sort_by_key(|r| (r.clock_in, r.id));
    selected.into_iter().map(RecordExport::from).collect()
}

/// Walk the paged records endpoint until a short page comes back.
async fn load_records(api: &ApiClient, worker_id: Option<i64>) -> AppResult<Vec<TimeRecord>> {
    let tracking = api.tracking();
    let mut out = Vec::new();
    let mut skip = 0;

    loop {
        let query = RecordQuery {
            worker_id,
            skip: Some(skip),
            limit: Some(PAGE),
        };
        let page = tracking.records(&query).await?;
        let n = page.len() as u32;
        debug!(skip, n, "records page");
        out.extend(page);
        if n < PAGE {
            break;
        }
        skip += PAGE;
    }

    Ok(out)
}
