//! All data types for the graphsketch library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use error::{SketchError, SketchResult};
pub use node::{Node, NodeId};

/// Separator between the two node names in an undirected multiplicity key.
pub const EDGE_KEY_SEPARATOR: &str = "-";

/// Separator between node names in a rendered circuit path.
pub const CIRCUIT_ARROW: &str = " -> ";
