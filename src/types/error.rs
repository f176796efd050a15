//! Error types for the graphsketch library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the graphsketch library.
///
/// The engine prefers defined values over failures (no root → `None`, no
/// circuit → `None`, empty graph → `false`/"empty graph"); errors are
/// reserved for handles that do not belong to the graph being queried.
#[derive(Error, Debug)]
pub enum SketchError {
    /// A node handle that is not (or no longer) part of the graph.
    #[error("node {0} is not part of this graph")]
    NodeNotFound(NodeId),

    /// An edge destination that is not part of the graph.
    #[error("edge destination {0} is not part of this graph")]
    InvalidEdgeDestination(NodeId),
}

/// Convenience result type for graphsketch operations.
pub type SketchResult<T> = Result<T, SketchError>;
