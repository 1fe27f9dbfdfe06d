use super::ApiClient;
use crate::errors::AppResult;
use crate::models::dashboard::DashboardStats;
use crate::models::time_record::{ClockInRequest, RecordQuery, TimeRecord};

pub struct TrackingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TrackingApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn clock_in(&self, body: &ClockInRequest) -> AppResult<TimeRecord> {
        self.client.post("/tracking/clock-in", body).await
    }

    pub async fn clock_out(&self, record_id: i64) -> AppResult<TimeRecord> {
        self.client
            .put_empty(&format!("/tracking/clock-out/{record_id}"))
            .await
    }

    pub async fn start_break(&self, record_id: i64) -> AppResult<TimeRecord> {
        self.client
            .put_empty(&format!("/tracking/break-start/{record_id}"))
            .await
    }

    pub async fn end_break(&self, record_id: i64) -> AppResult<TimeRecord> {
        self.client
            .put_empty(&format!("/tracking/break-end/{record_id}"))
            .await
    }

    pub async fn active(&self) -> AppResult<Vec<TimeRecord>> {
        self.client.get("/tracking/active").await
    }

    /// The worker's open record; `None` when the backend answers 404.
    pub async fn worker_active(&self, worker_id: i64) -> AppResult<Option<TimeRecord>> {
        match self
            .client
            .get(&format!("/tracking/worker/{worker_id}/active"))
            .await
        {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn records(&self, query: &RecordQuery) -> AppResult<Vec<TimeRecord>> {
        self.client.get_query("/tracking/records", query).await
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        self.client.get("/tracking/dashboard").await
    }
}
