//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the trackflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use trackflow::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run_example() -> Result<()> {
//! let store = HttpTrackerStore::new("http://localhost:8000");
//! let trackers = store.list().await?;
//!
//! let catalog = Arc::new(ActionCatalog::builtin());
//! let mut session = EditorSession::for_tracker(catalog, LayoutOptions::default(), &trackers[0]);
//! session.set_schedule_cron("0 * * * *");
//! session.save(&store, &Credential::new("secret")).await?;
//! # Ok(())
//! # }
//! ```

// Catalog and steps
pub use crate::catalog::{ActionCatalog, ActionDefinition, FieldKind, FieldSpec, ResolvedAction};
pub use crate::step::{ParamValue, Step};

// Graph and codec
pub use crate::codec::{self, LayoutOptions};
pub use crate::graph::{EdgeId, GraphEdge, GraphModel, GraphNode, GraphOutline, NodeId, Position};

// Forms and session
pub use crate::form::{FieldEdit, FieldInput, FormField, FormView, ParameterForm};
pub use crate::session::{DragPayload, EditorSession, ScreenPoint, Viewport};

// Persistence
pub use crate::store::{Credential, HttpTrackerStore, TrackerStore};
pub use crate::tracker::{RunStatus, Tracker, TrackerDraft, TrackerMeta};

// Configuration and errors
pub use crate::config::EditorConfig;
pub use crate::error::{ConfigError, DraftError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
