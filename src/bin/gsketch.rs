//! CLI entry point for the `gsketch` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use graphsketch::cli::commands;
use graphsketch::{SketchError, SketchGraph};

#[derive(Parser)]
#[command(
    name = "gsketch",
    about = "graphsketch CLI — structural analysis for hand-drawn graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The graph under analysis, described inline.
#[derive(Args)]
struct GraphArgs {
    /// Add a named node (repeatable; names must be unique on the command line)
    #[arg(long = "node")]
    nodes: Vec<String>,

    /// Add a directed edge FROM:TO between named nodes (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full structure report for the described graph
    Analyze {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Search the described graph for a circuit
    Circuit {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Report which bounded-degree tree family the graph resembles
    Topology {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// BFS height of the graph from a named root
    Levels {
        #[command(flatten)]
        graph: GraphArgs,

        /// Name of the root node
        #[arg(long)]
        root: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let result = match cli.command {
        Commands::Analyze { graph } => commands::cmd_analyze(&build_or_exit(&graph), json),
        Commands::Circuit { graph } => commands::cmd_circuit(&build_or_exit(&graph), json),
        Commands::Topology { graph } => commands::cmd_topology(&build_or_exit(&graph), json),
        Commands::Levels { graph, root } => {
            let built = build_or_exit(&graph);
            let root_id = match built.nodes().iter().find(|n| n.name == root) {
                Some(node) => node.id,
                None => {
                    eprintln!("Unknown root node: {root}");
                    process::exit(3);
                }
            };
            commands::cmd_levels(&built, root_id, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let code = match &e {
            SketchError::NodeNotFound(_) => 4,
            SketchError::InvalidEdgeDestination(_) => 5,
        };
        process::exit(code);
    }
}

fn build_or_exit(args: &GraphArgs) -> SketchGraph {
    match commands::build_graph(&args.nodes, &args.edges) {
        Ok(graph) => graph,
        Err(message) => {
            eprintln!("{message}");
            process::exit(3);
        }
    }
}
