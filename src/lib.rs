//! # trackflow - Step-Graph Editor Core for Browser Trackers
//!
//! A tracker is a named, schedulable sequence of browser actions (open a URL, click,
//! type, extract text, take a screenshot, ...). **trackflow** is the model behind a
//! visual tracker editor: steps are nodes on a canvas, connections are drawn between
//! them, every node's parameters are edited through a form generated from the action
//! catalog, and the whole graph is converted back into the strictly ordered step list
//! the execution backend consumes.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: `codec::load` (or `EditorSession::load_initial`) turns a persisted step
//!     list into a vertical chain of nodes linked by edges.
//! 2.  **Edit**: nodes are dropped in from the palette, connected, moved, deleted, and
//!     their parameters edited through `ParameterForm`, which coerces each edit to the
//!     field's type immediately.
//! 3.  **Save**: `codec::save` sorts the nodes by vertical position and projects their
//!     steps. Edges never influence the order.
//! 4.  **Persist**: the resulting `TrackerDraft` is handed to a `TrackerStore`.
//!
//! ## Quick Start
//!
//! ```rust
//! use trackflow::prelude::*;
//!
//! let catalog = ActionCatalog::builtin();
//! let steps = vec![
//!     Step::new("open").with_param("url", "https://a.com"),
//!     Step::new("wait").with_param("seconds", 5),
//! ];
//!
//! let mut graph = GraphModel::new();
//! let ids = codec::load(&mut graph, &steps, &catalog, &LayoutOptions::default());
//! assert_eq!(graph.edge_count(), 1);
//!
//! ParameterForm::apply(&mut graph, ids[1], "seconds", FieldEdit::Text("10".into()), &catalog);
//!
//! let saved = codec::save(&graph);
//! assert_eq!(saved[1].get("seconds"), Some(&ParamValue::Number(10.0)));
//! ```

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod form;
pub mod graph;
pub mod prelude;
pub mod session;
pub mod step;
pub mod store;
pub mod tracker;
