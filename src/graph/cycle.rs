//! Circuit detection — iterative undirected DFS.

use std::collections::HashSet;

use log::debug;

use crate::types::{NodeId, CIRCUIT_ARROW};

use super::SketchGraph;

/// One suspended DFS level: the node, the edge it was entered over, and how
/// far its incident list has been consumed.
struct Frame {
    node: NodeId,
    entry_edge: Option<usize>,
    cursor: usize,
}

impl SketchGraph {
    /// Search the graph for a circuit, treating edges as undirected.
    ///
    /// DFS runs from each yet-unvisited node in insertion order, on an
    /// explicit frame stack rather than the call stack. The edge a node was
    /// entered over is not walked back; any other edge reaching an
    /// already-visited node closes a circuit, so a parallel edge or a
    /// self-loop counts as one.
    ///
    /// On success the path on the DFS stack is rendered as
    /// `"A -> B -> C -> A"`, the first stack node repeated at the end to
    /// denote closure. `None` means the graph is circuit-free.
    pub fn find_circuit(&self) -> Option<String> {
        let mut visited: HashSet<NodeId> = HashSet::new();

        for seed in self.nodes().iter().map(|n| n.id) {
            if visited.contains(&seed) {
                continue;
            }

            let mut path: Vec<NodeId> = vec![seed];
            let mut stack: Vec<Frame> = vec![Frame {
                node: seed,
                entry_edge: None,
                cursor: 0,
            }];
            visited.insert(seed);

            while let Some(frame) = stack.last_mut() {
                let incident = self.incident(frame.node);
                if frame.cursor >= incident.len() {
                    stack.pop();
                    path.pop();
                    continue;
                }

                let (neighbor, edge_idx) = incident[frame.cursor];
                frame.cursor += 1;

                if frame.entry_edge == Some(edge_idx) {
                    // The edge we came in over; walking it back is not a circuit
                    continue;
                }
                if visited.contains(&neighbor) {
                    let rendered = self.render_circuit(&path);
                    debug!("circuit found: {rendered}");
                    return Some(rendered);
                }

                visited.insert(neighbor);
                path.push(neighbor);
                stack.push(Frame {
                    node: neighbor,
                    entry_edge: Some(edge_idx),
                    cursor: 0,
                });
            }
        }

        None
    }

    /// Join the node names on `path` with arrows and close with the first
    /// name again.
    fn render_circuit(&self, path: &[NodeId]) -> String {
        let names: Vec<&str> = path
            .iter()
            .filter_map(|&id| self.get_node(id).map(|n| n.name.as_str()))
            .collect();
        let mut rendered = names.join(CIRCUIT_ARROW);
        if let Some(first) = names.first() {
            rendered.push_str(CIRCUIT_ARROW);
            rendered.push_str(first);
        }
        rendered
    }
}
