use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Worker {
    /// Label shown in selection lists: `Name - Position`.
    pub fn label(&self) -> String {
        match self.position.as_deref() {
            Some(p) if !p.is_empty() => format!("{} - {}", self.name, p),
            _ => self.name.clone(),
        }
    }
}

fn check_email(email: &str) -> AppResult<()> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("invalid email address '{email}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerCreate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl WorkerCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("worker name is required".into()));
        }
        check_email(&self.email)?;
        if let Some(rate) = self.hourly_rate
            && rate < 0.0
        {
            return Err(AppError::Validation("hourly rate cannot be negative".into()));
        }
        Ok(())
    }
}

/// Partial update; absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl WorkerUpdate {
    pub fn is_empty(&self) -> bool {
        *self == WorkerUpdate::default()
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.is_empty() {
            return Err(AppError::Validation("nothing to update".into()));
        }
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AppError::Validation("worker name cannot be blank".into()));
        }
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerStats {
    pub worker_id: i64,
    pub worker_name: String,
    pub total_hours_week: f64,
    pub total_hours_month: f64,
    pub overtime_hours_week: f64,
    pub overtime_hours_month: f64,
    pub shifts_completed_week: u32,
    pub shifts_completed_month: u32,
}

/// Paging parameters for `GET /workers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
