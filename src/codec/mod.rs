//! Conversion between the persisted, ordered step list and the editor graph.
//!
//! Loading stacks the steps vertically and chains them with edges. Saving reads the
//! order back from vertical position alone: edges are ignored. Switching save to a
//! topological walk of the edges would change the order of existing trackers whose
//! nodes were rearranged without reconnecting, so the position rule must stay.

use serde::{Deserialize, Serialize};

mod load;
mod save;

pub use load::load;
pub use save::{ordered_nodes, save, to_draft};

/// Where loaded steps are placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Horizontal position shared by every loaded node.
    pub column_x: f64,
    /// Vertical position of the first step.
    pub origin_y: f64,
    /// Vertical distance between consecutive steps.
    pub row_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            column_x: 250.0,
            origin_y: 50.0,
            row_height: 150.0,
        }
    }
}
