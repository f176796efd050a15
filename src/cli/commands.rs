//! CLI command implementations.

use std::collections::HashMap;

use crate::analysis::StructureReport;
use crate::graph::{GraphBuilder, SketchGraph};
use crate::types::{NodeId, SketchResult};

/// Build a graph from `--node` / `--edge FROM:TO` command-line descriptions.
///
/// Node names must be unique here so edge endpoints can be resolved by name;
/// the engine itself never requires unique names.
pub fn build_graph(nodes: &[String], edges: &[String]) -> Result<SketchGraph, String> {
    let mut builder = GraphBuilder::new();
    let mut ids: HashMap<String, NodeId> = HashMap::new();

    for name in nodes {
        if ids.contains_key(name) {
            return Err(format!("duplicate node name: {name}"));
        }
        ids.insert(name.clone(), builder.node(name.clone()));
    }
    for desc in edges {
        let (from, to) = desc
            .split_once(':')
            .ok_or_else(|| format!("invalid edge '{desc}' (expected FROM:TO)"))?;
        let &origin = ids
            .get(from)
            .ok_or_else(|| format!("unknown node in edge: {from}"))?;
        let &destination = ids
            .get(to)
            .ok_or_else(|| format!("unknown node in edge: {to}"))?;
        builder.link(origin, destination).map_err(|e| e.to_string())?;
    }
    Ok(builder.build())
}

/// Full structure report.
pub fn cmd_analyze(graph: &SketchGraph, json: bool) -> SketchResult<()> {
    let report = StructureReport::build(graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Nodes: {}", report.weight);
        println!("Edges: {}", report.edges);
        println!("Connected: {}", report.connected);
        println!("Tree: {}", report.tree);
        println!("Multigraph: {}", report.multigraph);
        println!("Topology: {}", report.topology.join(", "));
        println!(
            "Circuit: {}",
            report.circuit.as_deref().unwrap_or("no circuit found")
        );
        println!("Root: {}", report.root.as_deref().unwrap_or("no root"));
        println!("Leaves: {}", join_or_none(&report.leaves));
        println!(
            "Internal vertices: {}",
            join_or_none(&report.internal_vertices)
        );
        match report.height {
            Some(height) => println!("Height: {height}"),
            None => println!("Height: n/a"),
        }
    }
    Ok(())
}

/// Search for a circuit and print it.
pub fn cmd_circuit(graph: &SketchGraph, json: bool) -> SketchResult<()> {
    let circuit = graph.find_circuit();

    if json {
        println!("{}", serde_json::json!({ "circuit": circuit }));
    } else {
        match circuit {
            Some(path) => println!("{path}"),
            None => println!("no circuit found"),
        }
    }
    Ok(())
}

/// Report which bounded-degree tree family the graph resembles.
pub fn cmd_topology(graph: &SketchGraph, json: bool) -> SketchResult<()> {
    let topology = graph.describe_topology();

    if json {
        println!("{}", serde_json::json!({ "topology": topology }));
    } else {
        for line in topology {
            println!("{line}");
        }
    }
    Ok(())
}

/// BFS height of the graph from a chosen root.
pub fn cmd_levels(graph: &SketchGraph, root: NodeId, json: bool) -> SketchResult<()> {
    let height = graph.level_count(root)?;
    let root_name = graph.get_node(root).map(|n| n.name.as_str()).unwrap_or("");

    if json {
        println!(
            "{}",
            serde_json::json!({ "root": root_name, "height": height })
        );
    } else {
        println!("Height from {root_name}: {height}");
    }
    Ok(())
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
