//! Structural classification — root, leaves, degree and tree shape.

use std::collections::HashSet;

use crate::graph::SketchGraph;
use crate::types::{NodeId, SketchError, SketchResult};

/// The bounded-degree tree family a drawing resembles, keyed by the maximum
/// directed out-degree found in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeShape {
    /// Max out-degree 1 or 2.
    Binary,
    /// Max out-degree 3.
    Ternary,
    /// Max out-degree 4.
    Quaternary,
    /// Max out-degree 5.
    Quinary,
    /// Max out-degree 6.
    Senary,
    /// Max out-degree 7.
    Septenary,
}

impl TreeShape {
    /// Classify a maximum out-degree, `None` for degree 0 or anything
    /// past 7.
    pub fn from_max_degree(degree: usize) -> Option<Self> {
        match degree {
            1 | 2 => Some(Self::Binary),
            3 => Some(Self::Ternary),
            4 => Some(Self::Quaternary),
            5 => Some(Self::Quinary),
            6 => Some(Self::Senary),
            7 => Some(Self::Septenary),
            _ => None,
        }
    }

    /// Return a human-readable label for this shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary => "binary tree",
            Self::Ternary => "ternary tree",
            Self::Quaternary => "quaternary tree",
            Self::Quinary => "quinary tree",
            Self::Senary => "senary tree",
            Self::Septenary => "septenary tree",
        }
    }
}

impl std::fmt::Display for TreeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl SketchGraph {
    /// The first node (in insertion order) that never appears as an edge
    /// destination, or `None` if every node is pointed at (cyclic or
    /// rootless drawings).
    ///
    /// With several qualifying nodes only the first is returned; in
    /// non-tree graphs callers must not read it as *the* structural root.
    pub fn find_root(&self) -> Option<NodeId> {
        let destinations: HashSet<NodeId> =
            self.edges().iter().map(|e| e.destination).collect();
        self.nodes()
            .iter()
            .map(|n| n.id)
            .find(|id| !destinations.contains(id))
    }

    /// Whether a node has no outgoing edges.
    ///
    /// Deliberately directed, unlike the traversal queries: a node with only
    /// incoming edges is a leaf by this definition.
    pub fn is_leaf(&self, id: NodeId) -> SketchResult<bool> {
        Ok(self.out_degree(id)? == 0)
    }

    /// Every leaf (out-degree zero), in insertion order.
    pub fn find_leaves(&self) -> Vec<NodeId> {
        self.nodes()
            .iter()
            .map(|n| n.id)
            .filter(|&id| matches!(self.out_degree(id), Ok(0)))
            .collect()
    }

    /// Every node that is neither the given root nor a leaf, in insertion
    /// order. Fails if `root` is not part of this graph.
    pub fn internal_vertices(&self, root: NodeId) -> SketchResult<Vec<NodeId>> {
        if !self.contains_node(root) {
            return Err(SketchError::NodeNotFound(root));
        }
        Ok(self
            .nodes()
            .iter()
            .map(|n| n.id)
            .filter(|&id| id != root && !matches!(self.out_degree(id), Ok(0)))
            .collect())
    }

    /// The maximum directed out-degree over all nodes. Zero for a graph with
    /// no nodes or no edges.
    pub fn max_out_degree(&self) -> usize {
        self.nodes()
            .iter()
            .filter_map(|n| self.out_degree(n.id).ok())
            .max()
            .unwrap_or(0)
    }

    /// Describe which bounded-degree tree family the drawing resembles.
    ///
    /// Returned as a sequence of display lines for the info panel:
    /// "empty graph" when the maximum out-degree is zero, the shape label up
    /// to degree 7, and a fixed fallback line past that.
    pub fn describe_topology(&self) -> Vec<String> {
        let max_degree = self.max_out_degree();
        if max_degree == 0 {
            return vec!["empty graph".to_string()];
        }
        match TreeShape::from_max_degree(max_degree) {
            Some(shape) => vec![shape.name().to_string()],
            None => vec!["undefined tree type for this degree".to_string()],
        }
    }

    /// Whether some unordered pair of node names is connected by two or more
    /// edges. Scans edges in insertion order and reports the first repeat;
    /// an `A→B` edge followed by `B→A` counts, a single self-loop does not.
    pub fn is_multigraph(&self) -> bool {
        let mut seen: HashSet<String> = HashSet::new();
        for edge in self.edges() {
            if let Some(key) = self.undirected_key(edge.origin, edge.destination) {
                if !seen.insert(key) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether the drawing is a tree: connected and circuit-free.
    pub fn is_tree(&self) -> bool {
        self.is_connected() && self.find_circuit().is_none()
    }
}
