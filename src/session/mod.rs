//! The editor session: turns discrete UI events into graph and store operations.
//!
//! The session performs no validation of its own (no required fields, no cron syntax
//! checks). It forwards edits to the graph and the form, runs the codec on load and
//! save, and hands drafts to a [`TrackerStore`].

use crate::catalog::ActionCatalog;
use crate::codec::{self, LayoutOptions};
use crate::error::StoreError;
use crate::form::{FieldEdit, FormView, ParameterForm};
use crate::graph::{EdgeId, GraphModel, GraphNode, NodeId, Position};
use crate::step::Step;
use crate::store::{Credential, TrackerStore};
use crate::tracker::{Tracker, TrackerDraft, TrackerMeta};
use std::sync::Arc;
use tracing::{debug, info, warn};

mod viewport;

pub use viewport::{ScreenPoint, Viewport};

/// Format tag of the payload carried by a palette drag.
pub const DRAG_FORMAT: &str = "application/x-trackflow-action";

/// What a palette entry puts on the drag: the action id to instantiate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: &'static str,
    pub action: String,
}

/// One editing view over a single tracker. Single writer for its whole lifetime.
pub struct EditorSession {
    catalog: Arc<ActionCatalog>,
    layout: LayoutOptions,
    graph: GraphModel,
    meta: TrackerMeta,
    viewport: Option<Viewport>,
    loaded_from: Option<TrackerDraft>,
    tracker_id: Option<i64>,
}

impl EditorSession {
    pub fn new(catalog: Arc<ActionCatalog>, layout: LayoutOptions) -> Self {
        Self {
            catalog,
            layout,
            graph: GraphModel::new(),
            meta: TrackerMeta::default(),
            viewport: None,
            loaded_from: None,
            tracker_id: None,
        }
    }

    /// A session editing an existing tracker. Saves from it update that tracker.
    pub fn for_tracker(
        catalog: Arc<ActionCatalog>,
        layout: LayoutOptions,
        tracker: &Tracker,
    ) -> Self {
        let mut session = Self::new(catalog, layout);
        session.tracker_id = Some(tracker.id);
        session.load_initial(&tracker.draft());
        session
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn meta(&self) -> &TrackerMeta {
        &self.meta
    }

    pub fn tracker_id(&self) -> Option<i64> {
        self.tracker_id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.meta.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.meta.description = description.into();
    }

    pub fn set_schedule_cron(&mut self, cron: impl Into<String>) {
        self.meta.schedule_cron = cron.into();
    }

    pub fn set_active(&mut self, active: bool) {
        self.meta.is_active = active;
    }

    /// Loads `draft` into the editor, at most once per distinct draft.
    ///
    /// Supplying the draft that is already loaded does nothing and returns `false`, so
    /// a host that re-renders and calls this again does not duplicate nodes. A different
    /// draft replaces the graph and the metadata.
    pub fn load_initial(&mut self, draft: &TrackerDraft) -> bool {
        if self.loaded_from.as_ref() == Some(draft) {
            debug!(name = %draft.name, "draft already loaded, skipping");
            return false;
        }
        self.graph.clear();
        codec::load(&mut self.graph, &draft.config, &self.catalog, &self.layout);
        self.meta = TrackerMeta::from(draft);
        self.loaded_from = Some(draft.clone());
        info!(name = %draft.name, steps = draft.config.len(), "loaded tracker draft");
        true
    }

    /// Registers the canvas transform. Drops are ignored until this is called.
    pub fn attach_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn drag_start(&self, action: &str) -> DragPayload {
        DragPayload {
            format: DRAG_FORMAT,
            action: action.to_string(),
        }
    }

    /// Creates a node for the dragged action at the drop location.
    ///
    /// Returns `None` when there is no usable payload or no viewport yet.
    pub fn drop(&mut self, payload: Option<&DragPayload>, at: ScreenPoint) -> Option<NodeId> {
        let payload = payload.filter(|p| p.format == DRAG_FORMAT && !p.action.is_empty())?;
        let viewport = self.viewport?;
        let position = viewport.screen_to_flow(at);
        Some(self.graph.add_node(position, Step::new(payload.action.clone())))
    }

    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.graph.connect(source, target)
    }

    pub fn disconnect(&mut self, edge: EdgeId) -> bool {
        self.graph.disconnect(edge)
    }

    pub fn move_node(&mut self, node: NodeId, position: Position) -> bool {
        self.graph.move_node(node, position)
    }

    pub fn delete_node(&mut self, node: NodeId) -> Option<GraphNode> {
        self.graph.remove_node(node)
    }

    /// Applies a form edit to one field of a node.
    pub fn edit_field(&mut self, node: NodeId, field: &str, edit: FieldEdit) {
        ParameterForm::apply(&mut self.graph, node, field, edit, &self.catalog);
    }

    pub fn form(&self, node: NodeId) -> Option<FormView> {
        self.graph
            .node(node)
            .map(|n| ParameterForm::render(&n.step, &self.catalog))
    }

    /// The current editor state as a wire draft.
    pub fn draft(&self) -> TrackerDraft {
        codec::to_draft(&self.meta, &self.graph)
    }

    /// Saves the draft: creates the tracker the first time, updates it afterwards.
    ///
    /// A failed save leaves the editor exactly as it was so the user can retry.
    pub async fn save<S>(&mut self, store: &S, credential: &Credential) -> Result<Tracker, StoreError>
    where
        S: TrackerStore + ?Sized,
    {
        let draft = self.draft();
        let result = match self.tracker_id {
            Some(id) => store.update(id, &draft, credential).await,
            None => store.create(&draft, credential).await,
        };
        match result {
            Ok(tracker) => {
                info!(id = tracker.id, "tracker saved");
                self.tracker_id = Some(tracker.id);
                Ok(tracker)
            }
            Err(e) => {
                warn!(error = %e, "saving tracker failed, editor state kept");
                Err(e)
            }
        }
    }

    /// Triggers a run of the saved tracker.
    pub async fn run<S>(&self, store: &S, credential: &Credential) -> Result<(), StoreError>
    where
        S: TrackerStore + ?Sized,
    {
        let id = self.tracker_id.ok_or(StoreError::NotSaved)?;
        store.trigger_run(id, credential).await
    }
}
