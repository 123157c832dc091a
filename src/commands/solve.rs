//! Solve command: all shortest paths from one source

use std::time::Instant;

use lodestar_core::error::Result;
use lodestar_core::format::OutputFormat;
use lodestar_core::graph::{shortest_paths, GraphStore, ShortestPathOptions, Vertex};

use crate::cli::{Cli, GraphArgs};
use crate::commands::output;

/// Execute the solve command
pub fn execute(cli: &Cli, graph_args: &GraphArgs, source: Vertex) -> Result<()> {
    let start = Instant::now();

    let graph = GraphStore::build(graph_args.vertices, &graph_args.edge)?;
    let opts = ShortestPathOptions {
        selection: graph_args.selection,
    };
    let result = shortest_paths(&graph, source, &opts)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "solve");
    }

    match cli.format {
        OutputFormat::Json => output::print_solution_json(&result, None)?,
        OutputFormat::Human => output::print_solution_human(cli, &result, None),
    }

    Ok(())
}
