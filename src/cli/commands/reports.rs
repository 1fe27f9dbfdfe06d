use crate::Context;
use crate::cli::parser::ReportCmd;
use crate::core::refetch::{Mutation, View};
use crate::core::reports::{ExportForm, check_csv_upload, download_csv};
use crate::errors::AppResult;
use crate::models::sheets::{CsvExportQuery, SheetImportRequest};
use crate::ui::messages::{fail, info, success, warning};
use crate::utils::path::expand_tilde;
use chrono::NaiveTime;

use super::{parse_opt_day, refetch};

pub async fn handle(cmd: &ReportCmd, ctx: &Context) -> AppResult<()> {
    let sheets = ctx.api.sheets();

    match cmd {
        ReportCmd::SheetsExport {
            spreadsheet_id,
            sheet_name,
            from,
            to,
            workers,
        } => {
            let mut form = ExportForm::new(&ctx.cfg.default_sheet_name);
            form.spreadsheet_id = spreadsheet_id.clone().unwrap_or_default();
            if let Some(name) = sheet_name {
                form.sheet_name = name.clone();
            }
            form.date_from = parse_opt_day(from)?.map(|d| d.and_time(NaiveTime::MIN));
            form.date_to = parse_opt_day(to)?.and_then(|d| d.and_hms_opt(23, 59, 59));
            form.worker_ids = workers.clone();

            let resp = form
                .submit(&sheets)
                .await
                .map_err(|e| fail("Export failed", e))?;

            success(format!(
                "{} ({} records exported)",
                if resp.message.is_empty() {
                    "Export completed"
                } else {
                    resp.message.as_str()
                },
                resp.records_exported
            ));
            if let Some(url) = resp.sheet_url {
                info(format!("Spreadsheet: {url}"));
            }
            Ok(())
        }

        ReportCmd::SheetsImport {
            spreadsheet_id,
            sheet_name,
            range,
        } => {
            let body = SheetImportRequest {
                spreadsheet_id: spreadsheet_id.trim().to_string(),
                sheet_name: sheet_name
                    .clone()
                    .unwrap_or_else(|| ctx.cfg.default_sheet_name.clone()),
                range_name: range.clone(),
            };
            let resp = sheets
                .import(&body)
                .await
                .map_err(|e| fail("Import failed", e))?;
            report_import(resp.imported_count, &resp.errors);
            refetch(ctx, Mutation::ImportSheet, View::Records).await
        }

        ReportCmd::Csv {
            dir,
            worker,
            from,
            to,
            force,
        } => {
            let query = CsvExportQuery {
                worker_id: *worker,
                date_from: parse_opt_day(from)?,
                date_to: parse_opt_day(to)?,
            };
            let path = download_csv(&sheets, &query, &expand_tilde(dir), *force)
                .await
                .map_err(|e| fail("CSV export failed", e))?;
            success(format!("CSV saved to {}", path.display()));
            Ok(())
        }

        ReportCmd::Upload { file } => {
            let path = expand_tilde(file);
            check_csv_upload(&path).map_err(|e| fail("CSV upload failed", e))?;
            let resp = sheets
                .upload_csv(&path)
                .await
                .map_err(|e| fail("CSV upload failed", e))?;
            report_import(resp.imported_count, &resp.errors);
            Ok(())
        }
    }
}

fn report_import(imported: u64, errors: &[String]) {
    success(format!("Imported {imported} rows"));
    for e in errors {
        warning(e);
    }
}
