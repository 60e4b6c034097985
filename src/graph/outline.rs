use super::GraphModel;
use crate::catalog::ActionCatalog;
use crate::codec;
use std::fmt;

/// Formats a graph as a plain-text outline: steps in save order, then edges.
pub struct GraphOutline<'a> {
    pub graph: &'a GraphModel,
    pub catalog: &'a ActionCatalog,
}

impl<'a> GraphOutline<'a> {
    pub fn new(graph: &'a GraphModel, catalog: &'a ActionCatalog) -> Self {
        Self { graph, catalog }
    }
}

impl fmt::Display for GraphOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps ({}):", self.graph.node_count())?;
        for (index, node) in codec::ordered_nodes(self.graph).into_iter().enumerate() {
            let action = self.catalog.resolve(&node.step.action);
            let marker = if action.is_known() { "" } else { " (unknown action)" };
            writeln!(
                f,
                "  {:>3}. {} [{}]{} {} @ {}",
                index + 1,
                action.label,
                node.step.action,
                marker,
                node.id,
                node.position
            )?;
            for (name, value) in &node.step.params {
                writeln!(f, "         {} = {}", name, value)?;
            }
        }

        writeln!(f, "Edges ({}):", self.graph.edge_count())?;
        for edge in self.graph.edges() {
            writeln!(f, "  {}: {} -> {}", edge.id, edge.source, edge.target)?;
        }
        Ok(())
    }
}
