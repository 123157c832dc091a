//! Path command: reconstruct one shortest path

use std::time::Instant;

use lodestar_core::error::{LodestarError, Result};
use lodestar_core::format::OutputFormat;
use lodestar_core::graph::{shortest_paths, GraphStore, ShortestPathOptions, Vertex};

use crate::cli::{Cli, GraphArgs};
use crate::commands::output;

/// Execute the path command
pub fn execute(cli: &Cli, graph_args: &GraphArgs, source: Vertex, target: Vertex) -> Result<()> {
    let start = Instant::now();

    let graph = GraphStore::build(graph_args.vertices, &graph_args.edge)?;
    let opts = ShortestPathOptions {
        selection: graph_args.selection,
    };
    let result = shortest_paths(&graph, source, &opts)?;
    let path = result.path_to(target)?;

    // path_to succeeded, so the target carries a finite distance
    let Some(distance) = result.distance(target)? else {
        return Err(LodestarError::Unreachable { target });
    };

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "path");
    }

    match cli.format {
        OutputFormat::Json => output::print_path_json(source, target, &path, distance)?,
        OutputFormat::Human => output::print_path_human(&path, distance),
    }

    Ok(())
}
