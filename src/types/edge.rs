//! The core edge struct.

use serde::Serialize;

use super::NodeId;

/// A directed connection between two nodes (origin → destination).
///
/// Direction is recorded, but most structural queries treat edges as
/// undirected; only degree and leaf classification look at direction.
/// Self-loops and duplicate pairs are structurally legal — duplicates are
/// what the multigraph check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Node the edge leaves from.
    pub origin: NodeId,
    /// Node the edge points to.
    pub destination: NodeId,
}

impl Edge {
    /// Create a new edge between two node handles.
    pub fn new(origin: NodeId, destination: NodeId) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Whether the edge starts and ends on the same node.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}
