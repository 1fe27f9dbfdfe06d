// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{COLUMNS, Cell};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const STAMP_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const HOURS_FORMAT: &str = "0.00";
const STAMP_WIDTH: usize = STAMP_FORMAT.len();

/// Per-kind cell formats for one row band.
struct BandStyles {
    text: Format,
    id: Format,
    stamp: Format,
    hours: Format,
}

impl BandStyles {
    fn new(fill: u32) -> Self {
        let base = Format::new()
            .set_background_color(Color::RGB(fill))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        Self {
            text: base.clone(),
            id: base.clone().set_align(FormatAlign::Right),
            stamp: base.clone().set_num_format(STAMP_FORMAT),
            hours: base.set_align(FormatAlign::Right).set_num_format(HOURS_FORMAT),
        }
    }
}

/// Write the rows to a single-sheet workbook: typed cells, frozen header,
/// banded rows, columns sized to their widest value.
pub(crate) fn export_xlsx(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    for (col, title) in COLUMNS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *title, &header)
            .map_err(xlsx_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    let bands = [BandStyles::new(0xEAF3FB), BandStyles::new(0xFFFFFF)];
    let mut widths: Vec<usize> = COLUMNS.iter().map(|t| t.width()).collect();

    for (i, record) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        let styles = &bands[i % 2];
        for (col, cell) in record.cells().into_iter().enumerate() {
            let used = write_cell(sheet, row, col as u16, cell, styles)?;
            widths[col] = widths[col].max(used);
        }
    }

    for (col, width) in widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *width as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    workbook.save(path).map_err(xlsx_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell and return the display width it needs.
fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: Cell<'_>,
    styles: &BandStyles,
) -> AppResult<usize> {
    let width = match cell {
        Cell::Id(n) => {
            sheet
                .write_number_with_format(row, col, n as f64, &styles.id)
                .map_err(xlsx_error)?;
            n.to_string().len()
        }
        Cell::Text(s) => {
            sheet
                .write_string_with_format(row, col, s, &styles.text)
                .map_err(xlsx_error)?;
            s.width()
        }
        Cell::At(Some(t)) => {
            sheet
                .write_number_with_format(row, col, excel_serial(&t), &styles.stamp)
                .map_err(xlsx_error)?;
            STAMP_WIDTH
        }
        Cell::At(None) => {
            sheet
                .write_blank(row, col, &styles.stamp)
                .map_err(xlsx_error)?;
            0
        }
        Cell::Hours(h) => {
            sheet
                .write_number_with_format(row, col, h, &styles.hours)
                .map_err(xlsx_error)?;
            format!("{h:.2}").len()
        }
    };
    Ok(width)
}

/// Days since the 1900 date system's epoch, time of day as the fraction.
pub(crate) fn excel_serial(t: &NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    (*t - epoch).num_seconds() as f64 / 86_400.0
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
