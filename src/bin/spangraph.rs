//! spangraph CLI
//!
//! Reads an edge list, runs a depth-first or breadth-first traversal from a start vertex
//! and prints one `Vertex: x, Parent: y, Level: z` line per visited vertex.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, anyhow};
use clap::Parser;
use spangraph::{algo::*, io::*, prelude::*};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Spanning trees of undirected graphs via DFS/BFS
#[derive(Parser, Debug)]
#[command(name = "spangraph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Edge list: vertex count followed by one `u v` pair (1-based) per line
    #[arg(env = "SPANGRAPH_INPUT")]
    input: PathBuf,

    /// Graph representation (matrix, list)
    #[arg(long, env = "SPANGRAPH_REPR", default_value = "matrix")]
    repr: RepresentationKind,

    /// Traversal algorithm (dfs, bfs)
    #[arg(long, env = "SPANGRAPH_ALGO", default_value = "bfs")]
    algo: TraversalKind,

    /// Start vertex (1-based)
    #[arg(long, env = "SPANGRAPH_START", default_value_t = 1)]
    start: i64,

    /// Write the visit report to this file instead of stdout
    #[arg(long, env = "SPANGRAPH_OUTPUT")]
    output: Option<PathBuf>,

    /// Write the spanning tree as an edge list to this file
    #[arg(long, env = "SPANGRAPH_TREE")]
    tree: Option<PathBuf>,

    /// Print degree statistics of the input graph
    #[arg(long, env = "SPANGRAPH_STATS")]
    stats: bool,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let EdgeListGraph { graph, rejected } =
        GraphStore::try_read_edge_list_file(&cli.input, cli.repr)
            .with_context(|| format!("failed to read {}", cli.input.display()))?;

    if !rejected.is_empty() {
        warn!(count = rejected.len(), "input contained skipped records");
    }

    info!(
        n = graph.number_of_nodes(),
        m = graph.number_of_edges(),
        repr = %graph.kind(),
        "graph loaded"
    );

    let start = node_from_one_based(cli.start, graph.number_of_nodes()).ok_or_else(|| {
        anyhow!(
            "start vertex {} is not in 1..={}",
            cli.start,
            graph.number_of_nodes()
        )
    })?;

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut sink = VisitWriter::new(output);
    let mut labels = TraversalLabels::new(graph.number_of_nodes());
    let outcome = graph.spanning_tree_with(cli.algo, start, &mut labels, &mut sink)?;
    sink.finish().context("failed to write visit report")?;

    let stats = outcome.stats;
    info!(
        algo = %stats.kind,
        visited = stats.visited,
        tree_edges = stats.tree_edges,
        max_frontier = stats.max_frontier,
        "traversal done"
    );
    if stats.dropped > 0 {
        warn!(dropped = stats.dropped, "frontier overflowed during traversal");
    }

    if let Some(path) = &cli.tree {
        outcome
            .tree
            .try_write_edge_list_file(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if cli.stats {
        match graph.degree_stats() {
            Some(degrees) => println!("{degrees}"),
            None => println!("Graph has no vertices"),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    setup_logging();
    let cli = Cli::parse();
    run(&cli)
}
