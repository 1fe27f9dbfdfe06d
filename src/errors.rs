//! Unified application error type.
//! All modules (api, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Transport / API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Unauthorized: the stored token was rejected and has been cleared")]
    Unauthorized,

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid shift status: {0}")]
    InvalidStatus(String),

    #[error("Invalid recurrence pattern: {0}")]
    InvalidRecurrence(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Form error: {0}")]
    Form(String),

    #[error("Worker {0} cannot be clocked in")]
    NotClockable(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // User-facing failure of a console action
    // ---------------------------
    #[error("{action}")]
    ActionFailed {
        action: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wrap any error into the coarse, user-facing action failure.
    pub fn action(action: impl Into<String>, source: AppError) -> Self {
        AppError::ActionFailed {
            action: action.into(),
            source: Box::new(source),
        }
    }

    /// True when the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Api { status: 404, .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
