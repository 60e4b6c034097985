use crate::codec::LayoutOptions;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Editor configuration, usually read from a TOML file.
///
/// ```toml
/// log_filter = "trackflow=debug"
///
/// [api]
/// base_url = "http://localhost:8000"
/// admin_key_env = "TRACKFLOW_ADMIN_KEY"
///
/// [layout]
/// column_x = 250.0
/// origin_y = 50.0
/// row_height = 150.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub api: ApiConfig,
    pub layout: LayoutOptions,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Environment variable the admin credential is read from.
    pub admin_key_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            admin_key_env: "TRACKFLOW_ADMIN_KEY".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}
