//! Undirected traversal — connectivity and BFS levels.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{NodeId, SketchError, SketchResult};

use super::SketchGraph;

impl SketchGraph {
    /// Whether every node is reachable from the first drawn node, following
    /// edges in both directions.
    ///
    /// An empty graph is not connected. Isolated nodes make a multi-node
    /// graph disconnected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.nodes().first() else {
            return false;
        };
        let reached = self.bfs_levels(first.id).len();
        reached == self.node_count()
    }

    /// Height of the graph seen as a tree hanging from `root`: the maximum
    /// BFS depth reached, with `root` at level 0 and edges undirected.
    ///
    /// Nodes not reachable from `root` are simply excluded. Fails if `root`
    /// is not part of this graph.
    pub fn level_count(&self, root: NodeId) -> SketchResult<usize> {
        if !self.contains_node(root) {
            return Err(SketchError::NodeNotFound(root));
        }
        let levels = self.bfs_levels(root);
        Ok(levels.values().copied().max().unwrap_or(0))
    }

    /// BFS from `start`, treating edges as undirected. Returns the level of
    /// each reached node, `start` at level 0.
    ///
    /// Neighbors are expanded in edge insertion order, so discovery order is
    /// deterministic for a given drawing sequence.
    pub(crate) fn bfs_levels(&self, start: NodeId) -> HashMap<NodeId, usize> {
        let mut levels: HashMap<NodeId, usize> = HashMap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        visited.insert(start);
        levels.insert(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let level = levels[&current];
            for &(neighbor, _) in self.incident(current) {
                if visited.insert(neighbor) {
                    levels.insert(neighbor, level + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        levels
    }
}
