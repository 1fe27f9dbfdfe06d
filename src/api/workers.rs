use super::ApiClient;
use crate::errors::AppResult;
use crate::models::MessageResponse;
use crate::models::worker::{Worker, WorkerCreate, WorkerQuery, WorkerStats, WorkerUpdate};

pub struct WorkerApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WorkerApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &WorkerQuery) -> AppResult<Vec<Worker>> {
        self.client.get_query("/workers", query).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Worker> {
        self.client.get(&format!("/workers/{id}")).await
    }

    pub async fn create(&self, body: &WorkerCreate) -> AppResult<Worker> {
        body.validate()?;
        self.client.post("/workers", body).await
    }

    pub async fn update(&self, id: i64, body: &WorkerUpdate) -> AppResult<Worker> {
        body.validate()?;
        self.client.put(&format!("/workers/{id}"), body).await
    }

    /// The backend deactivates rather than removes.
    pub async fn delete(&self, id: i64) -> AppResult<MessageResponse> {
        self.client.delete(&format!("/workers/{id}")).await
    }

    pub async fn stats(&self, id: i64) -> AppResult<WorkerStats> {
        self.client.get(&format!("/workers/{id}/stats")).await
    }
}
