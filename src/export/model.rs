// src/export/model.rs

use crate::models::time_record::TimeRecord;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

const TS: &str = "%Y-%m-%d %H:%M:%S";

/// Column titles, in the order of [`RecordExport::cells`].
pub const COLUMNS: [&str; 12] = [
    "id",
    "worker_id",
    "worker",
    "position",
    "clock_in",
    "clock_out",
    "break_start",
    "break_end",
    "total_hours",
    "overtime_hours",
    "status",
    "notes",
];

/// Flat row for time-record exports.
///
/// Timestamps stay typed; csv and json render them as `YYYY-MM-DD HH:MM:SS`,
/// missing ones as an empty string.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: i64,
    pub worker_id: i64,
    pub worker: String,
    pub position: String,
    #[serde(serialize_with = "write_ts")]
    pub clock_in: NaiveDateTime,
    #[serde(serialize_with = "write_opt_ts")]
    pub clock_out: Option<NaiveDateTime>,
    #[serde(serialize_with = "write_opt_ts")]
    pub break_start: Option<NaiveDateTime>,
    #[serde(serialize_with = "write_opt_ts")]
    pub break_end: Option<NaiveDateTime>,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub status: String,
    pub notes: String,
}

/// A spreadsheet cell with its kind decided by the column, not the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<'a> {
    Id(i64),
    Text(&'a str),
    At(Option<NaiveDateTime>),
    Hours(f64),
}

impl RecordExport {
    pub fn cells(&self) -> [Cell<'_>; 12] {
        [
            Cell::Id(self.id),
            Cell::Id(self.worker_id),
            Cell::Text(&self.worker),
            Cell::Text(&self.position),
            Cell::At(Some(self.clock_in)),
            Cell::At(self.clock_out),
            Cell::At(self.break_start),
            Cell::At(self.break_end),
            Cell::Hours(self.total_hours),
            Cell::Hours(self.overtime_hours),
            Cell::Text(&self.status),
            Cell::Text(&self.notes),
        ]
    }
}

impl From<&TimeRecord> for RecordExport {
    fn from(r: &TimeRecord) -> Self {
        let two_places = |h: f64| (h * 100.0).round() / 100.0;
        Self {
            id: r.id,
            worker_id: r.worker_id,
            worker: r.worker_name(),
            position: r.worker_position(),
            clock_in: r.clock_in,
            clock_out: r.clock_out,
            break_start: r.break_start,
            break_end: r.break_end,
            total_hours: two_places(r.hours()),
            overtime_hours: two_places(r.overtime()),
            status: r.status.as_str().to_string(),
            notes: r.notes.clone().unwrap_or_default(),
        }
    }
}

fn write_ts<S: Serializer>(t: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&t.format(TS))
}

fn write_opt_ts<S: Serializer>(t: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => write_ts(t, s),
        None => s.serialize_str(""),
    }
}
