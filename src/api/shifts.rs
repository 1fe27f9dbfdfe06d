use super::ApiClient;
use crate::errors::AppResult;
use crate::models::MessageResponse;
use crate::models::shift::{Shift, ShiftCreate, ShiftFilter, ShiftUpdate};
use serde::Serialize;

#[derive(Serialize)]
struct LimitQuery {
    limit: u32,
}

pub struct ShiftApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ShiftApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &ShiftFilter) -> AppResult<Vec<Shift>> {
        self.client.get_query("/shifts", filter).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Shift> {
        self.client.get(&format!("/shifts/{id}")).await
    }

    pub async fn create(&self, body: &ShiftCreate) -> AppResult<Shift> {
        body.validate()?;
        self.client.post("/shifts", body).await
    }

    pub async fn update(&self, id: i64, body: &ShiftUpdate) -> AppResult<Shift> {
        body.validate()?;
        self.client.put(&format!("/shifts/{id}"), body).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<MessageResponse> {
        self.client.delete(&format!("/shifts/{id}")).await
    }

    pub async fn today(&self) -> AppResult<Vec<Shift>> {
        self.client.get("/shifts/today").await
    }

    pub async fn upcoming(&self, worker_id: i64, limit: u32) -> AppResult<Vec<Shift>> {
        self.client
            .get_query(
                &format!("/shifts/worker/{worker_id}/upcoming"),
                &LimitQuery { limit },
            )
            .await
    }
}
