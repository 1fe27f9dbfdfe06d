//! Clock-in/out panel state and actions.

use crate::api::{ApiClient, TrackingApi, WorkerApi};
use crate::core::refetch::Mutation;
use crate::errors::{AppError, AppResult};
use crate::models::time_record::{ClockInRequest, TimeRecord};
use crate::models::worker::{Worker, WorkerQuery};
use tracing::debug;

/// Page size used while walking `/workers`.
const WORKER_PAGE: u32 = 100;

/// Active workers that do not already hold an open record.
///
/// The one-open-record-per-worker rule is enforced by the server; this only
/// keeps such workers out of the selection list.
pub fn clock_in_candidates<'a>(workers: &'a [Worker], active: &[TimeRecord]) -> Vec<&'a Worker> {
    workers
        .iter()
        .filter(|w| w.is_active)
        .filter(|w| !active.iter().any(|r| r.worker_id == w.id && r.is_open()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingAction {
    ClockIn(i64),
    ClockOut(i64),
    StartBreak(i64),
    EndBreak(i64),
}

impl TrackingAction {
    /// Start the break, or end it when one is already running.
    pub fn break_toggle(record: &TimeRecord) -> Self {
        if record.on_break() {
            TrackingAction::EndBreak(record.id)
        } else {
            TrackingAction::StartBreak(record.id)
        }
    }

    pub fn mutation(&self) -> Mutation {
        match self {
            TrackingAction::ClockIn(_) => Mutation::ClockIn,
            TrackingAction::ClockOut(_) => Mutation::ClockOut,
            TrackingAction::StartBreak(_) => Mutation::StartBreak,
            TrackingAction::EndBreak(_) => Mutation::EndBreak,
        }
    }

    /// Alert text shown when the request fails.
    pub fn failure_label(&self) -> &'static str {
        match self {
            TrackingAction::ClockIn(_) => "Clock-in failed",
            TrackingAction::ClockOut(_) => "Clock-out failed",
            TrackingAction::StartBreak(_) => "Starting break failed",
            TrackingAction::EndBreak(_) => "Ending break failed",
        }
    }

    pub fn success_label(&self) -> String {
        match self {
            TrackingAction::ClockIn(w) => format!("Worker {w} clocked in"),
            TrackingAction::ClockOut(r) => format!("Record {r} clocked out"),
            TrackingAction::StartBreak(r) => format!("Break started on record {r}"),
            TrackingAction::EndBreak(r) => format!("Break ended on record {r}"),
        }
    }

    pub async fn perform(&self, api: &TrackingApi<'_>) -> AppResult<TimeRecord> {
        debug!(action = ?self, "tracking action");
        match *self {
            TrackingAction::ClockIn(worker_id) => api.clock_in(&ClockInRequest::new(worker_id)).await,
            TrackingAction::ClockOut(id) => api.clock_out(id).await,
            TrackingAction::StartBreak(id) => api.start_break(id).await,
            TrackingAction::EndBreak(id) => api.end_break(id).await,
        }
    }
}

/// Local state of the time-tracking view.
#[derive(Debug, Clone, Default)]
pub struct TrackingPanel {
    pub workers: Vec<Worker>,
    pub active: Vec<TimeRecord>,
}

impl TrackingPanel {
    /// Fetch every worker page and the active records concurrently; both must
    /// succeed.
    pub async fn load(api: &ApiClient) -> AppResult<Self> {
        let workers = api.workers();
        let tracking = api.tracking();
        let (workers, active) = tokio::join!(load_workers(&workers), tracking.active());

        Ok(Self {
            workers: workers?.into_iter().filter(|w| w.is_active).collect(),
            active: active?,
        })
    }

    pub fn candidates(&self) -> Vec<&Worker> {
        clock_in_candidates(&self.workers, &self.active)
    }

    pub fn record(&self, id: i64) -> Option<&TimeRecord> {
        self.active.iter().find(|r| r.id == id)
    }

    /// Refuse a clock-in for a worker that is not offered in the selection list.
    pub fn ensure_clockable(&self, worker_id: i64) -> AppResult<()> {
        if self.candidates().iter().any(|w| w.id == worker_id) {
            Ok(())
        } else {
            Err(AppError::NotClockable(worker_id))
        }
    }
}

/// Check one worker for a clock-in: it must exist, be active and hold no
/// open record.
pub async fn check_clock_in(api: &ApiClient, worker_id: i64) -> AppResult<()> {
    let workers = api.workers();
    let tracking = api.tracking();
    let (worker, open) = tokio::join!(workers.get(worker_id), tracking.worker_active(worker_id));

    let worker = match worker {
        Ok(w) => w,
        Err(e) if e.is_not_found() => return Err(AppError::NotClockable(worker_id)),
        Err(e) => return Err(e),
    };
    let open = open?.filter(TimeRecord::is_open);
    debug!(worker_id, active = worker.is_active, open = open.is_some(), "clock-in check");

    if worker.is_active && open.is_none() {
        Ok(())
    } else {
        Err(AppError::NotClockable(worker_id))
    }
}

/// Walk the paged workers endpoint until a short page comes back.
async fn load_workers(api: &WorkerApi<'_>) -> AppResult<Vec<Worker>> {
    let mut out = Vec::new();
    let mut skip = 0;

    loop {
        let query = WorkerQuery {
            skip: Some(skip),
            limit: Some(WORKER_PAGE),
        };
        let page = api.list(&query).await?;
        let n = page.len() as u32;
        out.extend(page);
        if n < WORKER_PAGE {
            return Ok(out);
        }
        skip += WORKER_PAGE;
    }
}
