use crate::step::{ParamValue, Step};
use tracing::debug;

mod ids;
pub mod node;
pub mod outline;

use ids::IdGenerator;

pub use node::*;
pub use outline::GraphOutline;

/// The nodes, edges and placement behind the visual editor.
///
/// Nodes are kept in creation order; [`GraphModel::nodes`] enumerates them in that
/// order, which is also the tie-break the codec uses for nodes at equal height.
/// Every edge references two live nodes at all times: removing a node removes its
/// edges in the same call, and connecting to an unknown node does nothing.
#[derive(Debug, Default)]
pub struct GraphModel {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    ids: IdGenerator,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new node and returns its freshly generated id.
    pub fn add_node(&mut self, position: Position, step: Step) -> NodeId {
        let id = self.ids.node();
        debug!(node = %id, action = %step.action, "adding node");
        self.nodes.push(GraphNode { id, position, step });
        id
    }

    /// Sets one field of a node's step. Unknown ids are ignored.
    pub fn update_node_step(&mut self, id: NodeId, field: &str, value: ParamValue) {
        match self.node_mut(id) {
            Some(node) => {
                debug!(node = %id, field, "updating step field");
                node.step.set(field, value);
            }
            None => debug!(node = %id, field, "update for unknown node ignored"),
        }
    }

    /// Moves a node. Returns `false` if the node does not exist.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes a node together with every edge that touches it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<GraphNode> {
        let slot = self.nodes.iter().position(|n| n.id == id)?;
        let removed = self.nodes.remove(slot);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        debug!(
            node = %id,
            pruned_edges = before - self.edges.len(),
            "removed node"
        );
        Some(removed)
    }

    /// Adds a directed edge. Parallel edges between the same pair are allowed.
    ///
    /// Returns `None` without touching the graph when either endpoint is missing.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        if self.node(source).is_none() || self.node(target).is_none() {
            debug!(%source, %target, "refusing edge to unknown node");
            return None;
        }
        let id = self.ids.edge();
        self.edges.push(GraphEdge { id, source, target });
        Some(id)
    }

    /// Removes a single edge. Returns `false` if it did not exist.
    pub fn disconnect(&mut self, edge: EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge);
        before != self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Nodes in creation order. The iterator can be cloned to walk the snapshot again.
    pub fn nodes(&self) -> std::slice::Iter<'_, GraphNode> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> std::slice::Iter<'_, GraphEdge> {
        self.edges.iter()
    }

    /// Edges that start or end at `id`.
    pub fn edges_of(&self, id: NodeId) -> impl Iterator<Item = &GraphEdge> + Clone {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node and edge. Id generation continues where it was.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
