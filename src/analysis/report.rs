//! Aggregated structure report for display collaborators.

use serde::Serialize;

use crate::graph::SketchGraph;

/// Every structural fact about a drawing, computed in one pass over the
/// query API. This is what the info panel (or the CLI) renders.
#[derive(Debug, Clone, Serialize)]
pub struct StructureReport {
    /// Total node count (the graph's weight).
    pub weight: usize,
    /// Total edge count.
    pub edges: usize,
    /// Whether the graph has no nodes.
    pub empty: bool,
    /// Whether every node is reachable from the first drawn node.
    pub connected: bool,
    /// Whether the drawing is a tree (connected and circuit-free).
    pub tree: bool,
    /// Whether some unordered node pair carries two or more edges.
    pub multigraph: bool,
    /// Tree-shape description lines.
    pub topology: Vec<String>,
    /// Rendered circuit path, if one exists.
    pub circuit: Option<String>,
    /// Name of the root node, if one qualifies.
    pub root: Option<String>,
    /// Names of the leaves, in insertion order.
    pub leaves: Vec<String>,
    /// Names of the internal vertices relative to the root, in insertion
    /// order. Empty when no root qualifies.
    pub internal_vertices: Vec<String>,
    /// BFS height from the root. `None` when no root qualifies.
    pub height: Option<usize>,
}

impl StructureReport {
    /// Compute the full report for the current graph snapshot.
    pub fn build(graph: &SketchGraph) -> Self {
        let name_of = |id| {
            graph
                .get_node(id)
                .map(|n| n.name.clone())
                .unwrap_or_default()
        };

        let root = graph.find_root();
        let internal_vertices = root
            .and_then(|r| graph.internal_vertices(r).ok())
            .unwrap_or_default();
        let height = root.and_then(|r| graph.level_count(r).ok());

        Self {
            weight: graph.weight(),
            edges: graph.edge_count(),
            empty: graph.is_empty(),
            connected: graph.is_connected(),
            tree: graph.is_tree(),
            multigraph: graph.is_multigraph(),
            topology: graph.describe_topology(),
            circuit: graph.find_circuit(),
            root: root.map(name_of),
            leaves: graph.find_leaves().into_iter().map(name_of).collect(),
            internal_vertices: internal_vertices.into_iter().map(name_of).collect(),
            height,
        }
    }
}
