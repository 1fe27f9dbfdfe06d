use super::worker::Worker;
use crate::utils::time::{opt_timestamp, timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRecordStatus {
    #[default]
    Active,
    Completed,
}

impl TimeRecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRecordStatus::Active => "active",
            TimeRecordStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub id: i64,
    pub worker_id: i64,
    #[serde(default)]
    pub shift_id: Option<i64>,
    #[serde(with = "timestamp")]
    pub clock_in: NaiveDateTime,
    #[serde(with = "opt_timestamp", default)]
    pub clock_out: Option<NaiveDateTime>,
    #[serde(with = "opt_timestamp", default)]
    pub break_start: Option<NaiveDateTime>,
    #[serde(with = "opt_timestamp", default)]
    pub break_end: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub overtime_hours: Option<f64>,
    #[serde(default)]
    pub status: TimeRecordStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub worker: Option<Worker>,
}

impl TimeRecord {
    /// An active record has no clock-out yet.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn on_break(&self) -> bool {
        self.break_start.is_some() && self.break_end.is_none()
    }

    pub fn hours(&self) -> f64 {
        self.total_hours.unwrap_or(0.0)
    }

    pub fn overtime(&self) -> f64 {
        self.overtime_hours.unwrap_or(0.0)
    }

    pub fn worker_name(&self) -> String {
        self.worker
            .as_ref()
            .map(|w| w.name.clone())
            .unwrap_or_else(|| format!("Worker #{}", self.worker_id))
    }

    pub fn worker_position(&self) -> String {
        self.worker
            .as_ref()
            .and_then(|w| w.position.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockInRequest {
    pub worker_id: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shift_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl ClockInRequest {
    pub fn new(worker_id: i64) -> Self {
        Self {
            worker_id,
            shift_id: None,
            notes: None,
        }
    }
}

/// Query pass-through for `GET /tracking/records`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
