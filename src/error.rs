use thiserror::Error;

/// Errors returned by a `TrackerStore` (the persistence collaborator).
///
/// `Unauthorized` is kept apart from every other failure so callers can send the
/// user back to re-authentication instead of showing a generic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Tracker '{0}' not found")]
    NotFound(String),

    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode server response: {0}")]
    Decode(String),

    #[error("Tracker has not been saved yet, so it cannot be run")]
    NotSaved,
}

impl StoreError {
    /// Whether the credential was rejected by the server.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, StoreError::Unauthorized(_))
    }
}

/// Errors that can occur while reading a tracker draft.
#[derive(Error, Debug, Clone)]
pub enum DraftError {
    #[error("Failed to parse tracker draft JSON: {0}")]
    JsonParse(String),

    #[error("Could not read draft file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while loading the editor configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid config: {0}")]
    Parse(String),
}
