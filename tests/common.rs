//! Common test utilities: step fixtures and an in-memory tracker store.
use async_trait::async_trait;
use std::result::Result;
use std::sync::Mutex;
use trackflow::prelude::*;

/// `open https://a.com` followed by `wait 5`.
#[allow(dead_code)]
pub fn open_wait_steps() -> Vec<Step> {
    vec![
        Step::new("open").with_param("url", "https://a.com"),
        Step::new("wait").with_param("seconds", 5),
    ]
}

/// A longer sequence with distinct actions and mixed parameter types.
#[allow(dead_code)]
pub fn shopping_steps() -> Vec<Step> {
    vec![
        Step::new("open")
            .with_param("url", "https://shop.example.com")
            .with_param("headless", false),
        Step::new("click").with_param("selector", "#accept-cookies"),
        Step::new("type")
            .with_param("selector", "input[name=q]")
            .with_param("text", "mechanical keyboard"),
        Step::new("press_key").with_param("key", "Enter"),
        Step::new("extract_text")
            .with_param("selector", ".price")
            .with_param("variable", "price"),
        Step::new("expect_http_status").with_param("status", 200),
        Step::new("screenshot").with_param("path", "result.png"),
    ]
}

#[allow(dead_code)]
pub fn sample_draft() -> TrackerDraft {
    TrackerDraft {
        name: "Price watch".to_string(),
        description: Some("Checks the keyboard price".to_string()),
        config: open_wait_steps(),
        schedule_cron: Some("0 * * * *".to_string()),
        is_active: true,
    }
}

#[allow(dead_code)]
pub fn tracker_from(id: i64, draft: &TrackerDraft) -> Tracker {
    Tracker {
        id,
        name: draft.name.clone(),
        description: draft.description.clone(),
        config: draft.config.clone(),
        schedule_cron: draft.schedule_cron.clone(),
        is_active: draft.is_active,
        last_run_status: None,
        last_run_at: None,
        last_run_logs: None,
        last_run_info: None,
        created_at: None,
    }
}

/// Server response body for a stored tracker, in the shape the API returns.
#[allow(dead_code)]
pub fn tracker_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Price watch",
        "description": "Checks the keyboard price",
        "config": [
            {"action": "open", "url": "https://a.com"},
            {"action": "wait", "seconds": 5}
        ],
        "schedule_cron": "0 * * * *",
        "last_run_status": "success",
        "last_run_at": "2024-05-01T12:30:00",
        "last_run_logs": "INFO: Starting tracker execution",
        "last_run_info": {"grep_matches": [], "extracted_variables": {}, "network_requests_captured": 3},
        "is_active": true,
        "created_at": "2024-04-30T08:00:00+00:00"
    })
}

/// In-memory `TrackerStore` that checks the credential like the real API.
#[allow(dead_code)]
pub struct MemoryStore {
    secret: String,
    trackers: Mutex<Vec<Tracker>>,
    runs: Mutex<Vec<i64>>,
    failure: Mutex<Option<StoreError>>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            trackers: Mutex::new(Vec::new()),
            runs: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Makes the next mutating call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn trackers(&self) -> Vec<Tracker> {
        self.trackers.lock().unwrap().clone()
    }

    pub fn runs(&self) -> Vec<i64> {
        self.runs.lock().unwrap().clone()
    }

    fn check(&self, credential: &Credential) -> Result<(), StoreError> {
        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }
        if credential.expose() != self.secret {
            return Err(StoreError::Unauthorized("Invalid Admin Key".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Tracker>, StoreError> {
        Ok(self.trackers())
    }

    async fn get(&self, id: i64) -> Result<Tracker, StoreError> {
        self.trackers()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound("Tracker not found".to_string()))
    }

    async fn create(
        &self,
        draft: &TrackerDraft,
        credential: &Credential,
    ) -> Result<Tracker, StoreError> {
        self.check(credential)?;
        let mut trackers = self.trackers.lock().unwrap();
        let tracker = tracker_from(trackers.len() as i64 + 1, draft);
        trackers.push(tracker.clone());
        Ok(tracker)
    }

    async fn update(
        &self,
        id: i64,
        draft: &TrackerDraft,
        credential: &Credential,
    ) -> Result<Tracker, StoreError> {
        self.check(credential)?;
        let mut trackers = self.trackers.lock().unwrap();
        let slot = trackers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound("Tracker not found".to_string()))?;
        *slot = tracker_from(id, draft);
        Ok(slot.clone())
    }

    async fn trigger_run(&self, id: i64, credential: &Credential) -> Result<(), StoreError> {
        self.check(credential)?;
        self.runs.lock().unwrap().push(id);
        Ok(())
    }
}
