//! Fluent API for building SketchGraph instances.

use crate::types::{Edge, Node, NodeId, SketchResult};

use super::SketchGraph;

/// Fluent builder for constructing a [`SketchGraph`].
///
/// Drives the real mutation API underneath, so the built graph carries the
/// same counters and indexes as one assembled by hand.
pub struct GraphBuilder {
    graph: SketchGraph,
}

impl GraphBuilder {
    /// Create a new builder over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: SketchGraph::new(),
        }
    }

    /// Add a named node, returns its handle.
    pub fn node(&mut self, name: impl Into<String>) -> NodeId {
        self.graph.add_node(Node::new(name))
    }

    /// Add a directed edge between two previously added nodes.
    pub fn link(&mut self, origin: NodeId, destination: NodeId) -> SketchResult<&mut Self> {
        self.graph.add_edge(Edge::new(origin, destination))?;
        Ok(self)
    }

    /// Finish and hand out the graph.
    pub fn build(self) -> SketchGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
