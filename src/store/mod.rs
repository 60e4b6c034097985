//! The persistence collaborator: where drafts are stored and runs are triggered.

use crate::error::StoreError;
use crate::tracker::{Tracker, TrackerDraft};
use async_trait::async_trait;
use std::fmt;

mod http;

pub use http::{ADMIN_KEY_HEADER, HttpTrackerStore};

/// Opaque admin secret passed through on every mutating call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Storage and execution backend for trackers.
#[async_trait]
pub trait TrackerStore: Send + Sync {
    /// All trackers, with their last-run status.
    async fn list(&self) -> Result<Vec<Tracker>, StoreError>;

    async fn get(&self, id: i64) -> Result<Tracker, StoreError>;

    async fn create(
        &self,
        draft: &TrackerDraft,
        credential: &Credential,
    ) -> Result<Tracker, StoreError>;

    async fn update(
        &self,
        id: i64,
        draft: &TrackerDraft,
        credential: &Credential,
    ) -> Result<Tracker, StoreError>;

    /// Requests an asynchronous run. Nothing about the run itself is returned.
    async fn trigger_run(&self, id: i64, credential: &Credential) -> Result<(), StoreError>;
}
