use super::{Credential, TrackerStore};
use crate::error::StoreError;
use crate::tracker::{Tracker, TrackerDraft};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

/// Header carrying the admin credential on mutating calls.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `TrackerStore` backed by the tracker REST API.
pub struct HttpTrackerStore {
    base_url: String,
    client: reqwest::Client,
}

impl Default for HttpTrackerStore {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl HttpTrackerStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body).unwrap_or_else(|| format!("Failed to {}", what));
        warn!(status = status.as_u16(), %message, "tracker API call failed: {}", what);
        Err(match status {
            StatusCode::UNAUTHORIZED => StoreError::Unauthorized(message),
            StatusCode::NOT_FOUND => StoreError::NotFound(message),
            _ => StoreError::Request {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Pulls the `detail` message out of an API error body, falling back to the raw text.
fn error_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let detail = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
    Some(detail.unwrap_or_else(|| trimmed.to_string()))
}

#[async_trait]
impl TrackerStore for HttpTrackerStore {
    async fn list(&self) -> Result<Vec<Tracker>, StoreError> {
        let request = self.client.get(self.url("/trackers/"));
        let response = self.send(request, "fetch trackers").await?;
        Self::decode(response).await
    }

    async fn get(&self, id: i64) -> Result<Tracker, StoreError> {
        let request = self.client.get(self.url(&format!("/trackers/{}", id)));
        let response = self.send(request, "fetch tracker").await?;
        Self::decode(response).await
    }

    async fn create(
        &self,
        draft: &TrackerDraft,
        credential: &Credential,
    ) -> Result<Tracker, StoreError> {
        info!(name = %draft.name, steps = draft.config.len(), "creating tracker");
        let request = self
            .client
            .post(self.url("/trackers/"))
            .header(ADMIN_KEY_HEADER, credential.expose())
            .json(draft);
        let response = self.send(request, "create tracker").await?;
        Self::decode(response).await
    }

    async fn update(
        &self,
        id: i64,
        draft: &TrackerDraft,
        credential: &Credential,
    ) -> Result<Tracker, StoreError> {
        info!(id, name = %draft.name, steps = draft.config.len(), "updating tracker");
        let request = self
            .client
            .put(self.url(&format!("/trackers/{}", id)))
            .header(ADMIN_KEY_HEADER, credential.expose())
            .json(draft);
        let response = self.send(request, "update tracker").await?;
        Self::decode(response).await
    }

    async fn trigger_run(&self, id: i64, credential: &Credential) -> Result<(), StoreError> {
        info!(id, "triggering tracker run");
        let request = self
            .client
            .post(self.url(&format!("/trackers/{}/run", id)))
            .header(ADMIN_KEY_HEADER, credential.expose());
        self.send(request, "run tracker").await.map(|_| ())
    }
}
