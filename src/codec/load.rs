use super::LayoutOptions;
use crate::catalog::ActionCatalog;
use crate::graph::{GraphModel, NodeId, Position};
use crate::step::Step;
use itertools::Itertools;
use tracing::{info, warn};

/// Adds `steps` to the graph as a vertical chain and returns the new node ids in order.
///
/// Step `i` is placed at `(column_x, origin_y + i * row_height)` and an edge links each
/// step to the next. Actions missing from the catalog are kept as they are.
pub fn load(
    graph: &mut GraphModel,
    steps: &[Step],
    catalog: &ActionCatalog,
    layout: &LayoutOptions,
) -> Vec<NodeId> {
    let ids: Vec<NodeId> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            if !catalog.contains(&step.action) {
                warn!(action = %step.action, index, "loading step with unknown action");
            }
            let position = Position::new(
                layout.column_x,
                layout.origin_y + index as f64 * layout.row_height,
            );
            graph.add_node(position, step.clone())
        })
        .collect();

    for (previous, next) in ids.iter().copied().tuple_windows() {
        graph.connect(previous, next);
    }

    info!(steps = ids.len(), "loaded step sequence into graph");
    ids
}
