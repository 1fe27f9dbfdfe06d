//! Create/edit form for shifts.
//!
//! ```text
//! Closed -> Open(Create) -> SubmitPending -> Closed
//! Closed -> Open(Edit)   -> SubmitPending -> Closed
//! ```
//! A failed submission returns to `Open` with the fields untouched.

use crate::api::ShiftApi;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{RecurrencePattern, Shift, ShiftCreate, ShiftStatus, ShiftUpdate};
use crate::utils::time::combine;
use chrono::NaiveDateTime;

/// Raw form inputs; dates and times stay as typed until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftFields {
    pub worker_id: Option<i64>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    pub status: ShiftStatus,
    pub recurrence: Option<RecurrencePattern>,
    pub notes: String,
}

impl ShiftFields {
    /// Pre-populate from an existing shift, splitting the ISO timestamps.
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            worker_id: Some(shift.worker_id),
            date: shift.date_key(),
            start: shift.start_time.format("%H:%M").to_string(),
            end: shift.end_time.format("%H:%M").to_string(),
            status: shift.status,
            recurrence: shift.recurrence_pattern,
            notes: shift.notes.clone().unwrap_or_default(),
        }
    }

    fn timestamps(&self) -> AppResult<(NaiveDateTime, NaiveDateTime, NaiveDateTime)> {
        let date = combine(&self.date, "00:00")?;
        let start = combine(&self.date, &self.start)?;
        let end = combine(&self.date, &self.end)?;
        Ok((date, start, end))
    }

    fn notes(&self) -> Option<String> {
        let n = self.notes.trim();
        if n.is_empty() { None } else { Some(n.to_string()) }
    }

    fn worker(&self) -> AppResult<i64> {
        self.worker_id
            .ok_or_else(|| AppError::Validation("a worker must be selected".into()))
    }

    pub fn to_create(&self) -> AppResult<ShiftCreate> {
        let (date, start_time, end_time) = self.timestamps()?;
        let body = ShiftCreate {
            worker_id: self.worker()?,
            date,
            start_time,
            end_time,
            is_recurring: self.recurrence.is_some(),
            recurrence_pattern: self.recurrence,
            status: self.status,
            notes: self.notes(),
        };
        body.validate()?;
        Ok(body)
    }

    /// Edits resend the whole form, like the browser form did.
    pub fn to_update(&self) -> AppResult<ShiftUpdate> {
        let (date, start_time, end_time) = self.timestamps()?;
        let body = ShiftUpdate {
            worker_id: Some(self.worker()?),
            date: Some(date),
            start_time: Some(start_time),
            end_time: Some(end_time),
            is_recurring: Some(self.recurrence.is_some()),
            recurrence_pattern: Some(self.recurrence),
            status: Some(self.status),
            notes: Some(self.notes.trim().to_string()),
        };
        body.validate()?;
        Ok(body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Closed,
    Open { mode: FormMode, fields: ShiftFields },
    SubmitPending { mode: FormMode, fields: ShiftFields },
}

/// The request a submission turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftSubmission {
    Create(ShiftCreate),
    Update { id: i64, body: ShiftUpdate },
}

#[derive(Debug)]
pub struct ShiftForm {
    state: FormState,
    last_error: Option<String>,
}

impl Default for ShiftForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            last_error: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, FormState::Closed)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Closed => None,
            FormState::Open { mode, .. } | FormState::SubmitPending { mode, .. } => Some(*mode),
        }
    }

    pub fn fields(&self) -> Option<&ShiftFields> {
        match &self.state {
            FormState::Closed => None,
            FormState::Open { fields, .. } | FormState::SubmitPending { fields, .. } => {
                Some(fields)
            }
        }
    }

    /// Fields are editable only while the form is open.
    pub fn fields_mut(&mut self) -> Option<&mut ShiftFields> {
        match &mut self.state {
            FormState::Open { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn open_create(&mut self) -> AppResult<()> {
        self.open(FormMode::Create, ShiftFields::default())
    }

    pub fn open_edit(&mut self, shift: &Shift) -> AppResult<()> {
        self.open(FormMode::Edit(shift.id), ShiftFields::from_shift(shift))
    }

    fn open(&mut self, mode: FormMode, fields: ShiftFields) -> AppResult<()> {
        if !self.is_closed() {
            return Err(AppError::Form("the shift form is already open".into()));
        }
        self.last_error = None;
        self.state = FormState::Open { mode, fields };
        Ok(())
    }

    /// Discard edits without sending anything.
    pub fn cancel(&mut self) -> AppResult<()> {
        match self.state {
            FormState::Open { .. } => {
                self.state = FormState::Closed;
                self.last_error = None;
                Ok(())
            }
            FormState::SubmitPending { .. } => {
                Err(AppError::Form("a submission is in progress".into()))
            }
            FormState::Closed => Ok(()),
        }
    }

    /// Build the request and move to `SubmitPending`.
    /// Invalid input keeps the form open.
    pub fn begin_submit(&mut self) -> AppResult<ShiftSubmission> {
        let FormState::Open { mode, fields } = &self.state else {
            return Err(AppError::Form("the shift form is not open".into()));
        };

        let submission = match mode {
            FormMode::Create => fields.to_create().map(ShiftSubmission::Create),
            FormMode::Edit(id) => fields.to_update().map(|body| ShiftSubmission::Update {
                id: *id,
                body,
            }),
        };

        match submission {
            Ok(s) => {
                let (mode, fields) = (*mode, fields.clone());
                self.state = FormState::SubmitPending { mode, fields };
                Ok(s)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Close on success, reopen with the same fields on failure.
    pub fn finish<T>(&mut self, outcome: &AppResult<T>) {
        let state = std::mem::replace(&mut self.state, FormState::Closed);
        self.state = match (state, outcome) {
            (FormState::SubmitPending { .. }, Ok(_)) => {
                self.last_error = None;
                FormState::Closed
            }
            (FormState::SubmitPending { mode, fields }, Err(e)) => {
                self.last_error = Some(e.to_string());
                FormState::Open { mode, fields }
            }
            (other, _) => other,
        };
    }

    /// Submit through the shift façade: one create or one update request.
    pub async fn submit(&mut self, api: &ShiftApi<'_>) -> AppResult<Shift> {
        let submission = self.begin_submit()?;
        let outcome = match &submission {
            ShiftSubmission::Create(body) => api.create(body).await,
            ShiftSubmission::Update { id, body } => api.update(*id, body).await,
        };
        self.finish(&outcome);
        outcome
    }
}
