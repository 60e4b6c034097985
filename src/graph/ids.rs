use super::node::{EdgeId, NodeId};

/// Monotonic id source scoped to one graph.
///
/// Ids are never reused, not even after the node or edge they named is deleted or the
/// graph is cleared.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next_node: u64,
    next_edge: u64,
}

impl IdGenerator {
    pub(crate) fn node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    pub(crate) fn edge(&mut self) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        id
    }
}
