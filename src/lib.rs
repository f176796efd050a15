//! graphsketch — structural analysis engine for interactively drawn graphs.
//!
//! The user places named nodes and draws directed edges; the engine answers
//! what the drawing *is*: connected or not, cyclic or not, where the root
//! lies, which nodes are leaves or internal vertices, whether duplicate
//! edges make it a multigraph, and which bounded-degree tree family it
//! resembles. Everything is recomputed on demand from the current snapshot —
//! there is no cached analysis state beyond the edge multiplicity counter.

pub mod analysis;
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use analysis::{StructureReport, TreeShape};
pub use graph::{GraphBuilder, SketchGraph};
pub use types::{
    Edge, Node, NodeId, SketchError, SketchResult, CIRCUIT_ARROW, EDGE_KEY_SEPARATOR,
};
