use crate::graph::{GraphModel, GraphNode};
use crate::step::Step;
use crate::tracker::{TrackerDraft, TrackerMeta};
use itertools::Itertools;
use tracing::info;

/// Nodes in execution order: ascending `y`, ties kept in creation order.
///
/// The sort is stable over [`GraphModel::nodes`], so two nodes at exactly the same
/// height come out in the order they were created. `-0.0` and `0.0` count as the same
/// height.
pub fn ordered_nodes(graph: &GraphModel) -> Vec<&GraphNode> {
    graph
        .nodes()
        .sorted_by(|a, b| row(a).total_cmp(&row(b)))
        .collect()
}

fn row(node: &GraphNode) -> f64 {
    node.position.y + 0.0
}

/// Projects the graph back to the ordered step sequence. Ids, positions and edges are dropped.
pub fn save(graph: &GraphModel) -> Vec<Step> {
    let steps: Vec<Step> = ordered_nodes(graph)
        .into_iter()
        .map(|node| node.step.clone())
        .collect();
    info!(steps = steps.len(), "saved graph to step sequence");
    steps
}

/// Builds the wire draft from tracker metadata and the current graph.
pub fn to_draft(meta: &TrackerMeta, graph: &GraphModel) -> TrackerDraft {
    TrackerDraft {
        name: meta.name.clone(),
        description: Some(meta.description.clone()),
        config: save(graph),
        schedule_cron: Some(meta.schedule_cron.trim())
            .filter(|cron| !cron.is_empty())
            .map(str::to_string),
        is_active: meta.is_active,
    }
}
