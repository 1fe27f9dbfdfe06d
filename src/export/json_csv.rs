// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rows as one pretty-printed JSON array.
pub(crate) fn export_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("JSON write error: {e}")))?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Rows as CSV; the header line is the field names of [`RecordExport`].
pub(crate) fn export_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_error = |e: csv::Error| AppError::Export(format!("CSV write error: {e}"));
    let mut out = csv::Writer::from_writer(BufWriter::new(File::create(path)?));
    rows.iter()
        .try_for_each(|row| out.serialize(row))
        .map_err(csv_error)?;
    out.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
