use crate::error::DraftError;
use crate::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

mod timestamp;

/// The unit exchanged with the persistence collaborator when creating or updating a tracker.
///
/// `config` is exactly the ordered step sequence produced by the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: Vec<Step>,
    #[serde(default)]
    pub schedule_cron: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TrackerDraft {
    pub fn new(name: impl Into<String>, config: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            description: None,
            config,
            schedule_cron: None,
            is_active: true,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DraftError> {
        serde_json::from_str(json).map_err(|e| DraftError::JsonParse(e.to_string()))
    }

    /// Reads a draft from a JSON file. A full `Tracker` record is accepted as well,
    /// since it carries every draft field.
    pub fn from_file(path: &str) -> Result<Self, DraftError> {
        let content = fs::read_to_string(path).map_err(|e| DraftError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, DraftError> {
        serde_json::to_string_pretty(self).map_err(|e| DraftError::JsonParse(e.to_string()))
    }
}

/// Editable tracker metadata held by an editor session next to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerMeta {
    pub name: String,
    pub description: String,
    /// Cron expression; blank means unscheduled.
    pub schedule_cron: String,
    pub is_active: bool,
}

impl Default for TrackerMeta {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            schedule_cron: String::new(),
            is_active: true,
        }
    }
}

impl From<&TrackerDraft> for TrackerMeta {
    fn from(draft: &TrackerDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone().unwrap_or_default(),
            schedule_cron: draft.schedule_cron.clone().unwrap_or_default(),
            is_active: draft.is_active,
        }
    }
}

/// Outcome of a tracker's most recent execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Running,
    Success,
    Failure,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Success => "success",
            RunStatus::Failure => "failure",
            RunStatus::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A persisted tracker as returned by the server, including last-run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: Vec<Step>,
    #[serde(default)]
    pub schedule_cron: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub last_run_status: Option<RunStatus>,
    #[serde(default, with = "timestamp::option")]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_run_logs: Option<String>,
    #[serde(default)]
    pub last_run_info: Option<serde_json::Value>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Tracker {
    /// Status for display; a tracker that never ran is pending.
    pub fn status(&self) -> RunStatus {
        self.last_run_status.unwrap_or(RunStatus::Pending)
    }

    /// The editable part of the record.
    pub fn draft(&self) -> TrackerDraft {
        TrackerDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            config: self.config.clone(),
            schedule_cron: self.schedule_cron.clone(),
            is_active: self.is_active,
        }
    }
}
