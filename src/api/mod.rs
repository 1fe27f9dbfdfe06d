//! HTTP client wrapper and resource façades.
//!
//! Every façade method maps one console intent to exactly one request.
//! Nothing here batches, retries or caches.

mod sheets;
mod shifts;
mod tracking;
mod workers;

pub use sheets::SheetsApi;
pub use shifts::ShiftApi;
pub use tracking::TrackingApi;
pub use workers::WorkerApi;

use crate::errors::{AppError, AppResult};
use crate::session::Session;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ApiClient {
    http: Client,
    base: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<Session>) -> AppResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| AppError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::InvalidUrl(format!(
                "{trimmed}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = Client::builder()
            .user_agent(concat!("shiftdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base: trimmed.to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn workers(&self) -> WorkerApi<'_> {
        WorkerApi::new(self)
    }

    pub fn shifts(&self) -> ShiftApi<'_> {
        ShiftApi::new(self)
    }

    pub fn tracking(&self) -> TrackingApi<'_> {
        TrackingApi::new(self)
    }

    pub fn sheets(&self) -> SheetsApi<'_> {
        SheetsApi::new(self)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "api request");
        let rb = self.http.request(method, format!("{}{}", self.base, path));
        match self.session.token() {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    async fn send<T: DeserializeOwned>(&self, rb: RequestBuilder) -> AppResult<T> {
        let resp = rb.send().await?;
        self.decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(&self, resp: Response) -> AppResult<T> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(url = %resp.url(), "401 from backend, clearing stored token");
            self.session.clear();
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// PUT without a body (tracking state transitions).
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send(self.request(Method::PUT, path)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        self.send(self.request(Method::POST, path).multipart(form)).await
    }
}

/// Pull the `detail` field out of an error body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(detail) = value.get("detail")
    {
        return match detail.as_str() {
            Some(s) => s.to_string(),
            None => detail.to_string(),
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}
