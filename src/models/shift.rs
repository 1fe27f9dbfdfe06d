use super::worker::Worker;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{opt_timestamp, timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Scheduled => "scheduled",
            ShiftStatus::Completed => "completed",
            ShiftStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(ShiftStatus::Scheduled),
            "completed" => Ok(ShiftStatus::Completed),
            "cancelled" | "canceled" => Ok(ShiftStatus::Cancelled),
            other => Err(AppError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
}

impl RecurrencePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "daily",
            RecurrencePattern::Weekly => "weekly",
            RecurrencePattern::Monthly => "monthly",
        }
    }
}

impl FromStr for RecurrencePattern {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurrencePattern::Daily),
            "weekly" => Ok(RecurrencePattern::Weekly),
            "monthly" => Ok(RecurrencePattern::Monthly),
            other => Err(AppError::InvalidRecurrence(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub worker_id: i64,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(default)]
    pub status: ShiftStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub worker: Option<Worker>,
}

impl Shift {
    /// Calendar-date component of the shift (`YYYY-MM-DD`).
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    pub fn worker_name(&self) -> String {
        self.worker
            .as_ref()
            .map(|w| w.name.clone())
            .unwrap_or_else(|| format!("Worker #{}", self.worker_id))
    }
}

fn check_times(
    date: Option<NaiveDateTime>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> AppResult<()> {
    if let (Some(s), Some(e)) = (start, end)
        && s >= e
    {
        return Err(AppError::Validation(
            "shift start must precede its end".into(),
        ));
    }
    if let Some(d) = date {
        for t in [start, end].into_iter().flatten() {
            if t.date() != d.date() {
                return Err(AppError::Validation(format!(
                    "shift times must fall on {}",
                    d.format("%Y-%m-%d")
                )));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub worker_id: i64,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub status: ShiftStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl ShiftCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.worker_id <= 0 {
            return Err(AppError::Validation("a worker must be selected".into()));
        }
        if self.is_recurring && self.recurrence_pattern.is_none() {
            return Err(AppError::Validation(
                "recurring shifts need a recurrence pattern".into(),
            ));
        }
        check_times(Some(self.date), Some(self.start_time), Some(self.end_time))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftUpdate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub worker_id: Option<i64>,
    #[serde(
        with = "opt_timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub date: Option<NaiveDateTime>,
    #[serde(
        with = "opt_timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub start_time: Option<NaiveDateTime>,
    #[serde(
        with = "opt_timestamp",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub end_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_recurring: Option<bool>,
    /// `Some(None)` is sent as `null` and clears the stored pattern.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurrence_pattern: Option<Option<RecurrencePattern>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<ShiftStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl ShiftUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if *self == ShiftUpdate::default() {
            return Err(AppError::Validation("nothing to update".into()));
        }
        check_times(self.date, self.start_time, self.end_time)
    }
}

/// Filters for `GET /shifts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShiftFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShiftStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
