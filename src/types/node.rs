//! Node identity and the core node struct.

use serde::Serialize;

/// Stable handle for a node inside a [`SketchGraph`](crate::graph::SketchGraph).
///
/// Ids are assigned sequentially by the graph on insertion and are never
/// reused, so a handle stays valid (or becomes detectably stale) across node
/// removals. Identity is always the id, never the display name — two nodes
/// named "A" are two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// The raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named vertex drawn by the user.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Handle assigned by the graph on insertion.
    pub id: NodeId,
    /// Display label. Not required to be unique.
    pub name: String,
}

impl Node {
    /// Create a node with the given display name. The id is a placeholder
    /// until the node is added to a graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId(0),
            name: name.into(),
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
