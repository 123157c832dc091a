//! CLI argument parsing for lodestar
//!
//! Uses clap for argument parsing. Supports global flags:
//! --format, --quiet, --verbose, --log-level, --log-json

use clap::{Args, Parser, Subcommand};

use lodestar_core::format::OutputFormat;
use lodestar_core::graph::{Edge, SelectionStrategy, Vertex};

use crate::commands::demo::DemoGraph;

/// Lodestar - shortest paths in weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "lodestar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Graph definition flags shared by solve and path
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Number of vertices in the graph
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Directed edge as FROM,TO,WEIGHT (repeatable)
    #[arg(long, short, value_parser = parse_edge)]
    pub edge: Vec<Edge>,

    /// Extract-min strategy for the settlement loop
    #[arg(long, default_value = "heap", value_parser = parse_selection)]
    pub selection: SelectionStrategy,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest paths from a source vertex to every vertex
    Solve {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex index
        source: Vertex,
    },

    /// Reconstruct the shortest path between two vertices
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex index
        source: Vertex,

        /// Target vertex index
        target: Vertex,
    },

    /// Run one of the built-in demonstration graphs
    Demo {
        /// Which demonstration graph to use
        #[arg(long, default_value = "cormen", value_parser = parse_demo_graph)]
        graph: DemoGraph,

        /// Source vertex label (defaults to 's')
        #[arg(long)]
        source: Option<char>,

        /// Extract-min strategy for the settlement loop
        #[arg(long, default_value = "heap", value_parser = parse_selection)]
        selection: SelectionStrategy,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_selection(s: &str) -> Result<SelectionStrategy, String> {
    s.parse::<SelectionStrategy>()
}

fn parse_demo_graph(s: &str) -> Result<DemoGraph, String> {
    s.parse::<DemoGraph>()
}

fn parse_edge(s: &str) -> Result<Edge, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("invalid edge '{}' (expected FROM,TO,WEIGHT)", s));
    }
    let from = parts[0]
        .trim()
        .parse::<Vertex>()
        .map_err(|_| format!("invalid edge origin '{}'", parts[0].trim()))?;
    let to = parts[1]
        .trim()
        .parse::<Vertex>()
        .map_err(|_| format!("invalid edge destination '{}'", parts[1].trim()))?;
    let weight = parts[2]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid edge weight '{}'", parts[2].trim()))?;
    Ok(Edge::new(from, to, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        let edge = parse_edge("0,3,5").unwrap();
        assert_eq!((edge.from, edge.to, edge.weight.value()), (0, 3, 5.0));

        let edge = parse_edge(" 1 , 2 , 2.5 ").unwrap();
        assert_eq!((edge.from, edge.to, edge.weight.value()), (1, 2, 2.5));
    }

    #[test]
    fn test_parse_edge_rejects_malformed_input() {
        assert!(parse_edge("0,1").is_err());
        assert!(parse_edge("0,1,2,3").is_err());
        assert!(parse_edge("a,1,2").is_err());
        assert!(parse_edge("0,b,2").is_err());
        assert!(parse_edge("0,1,w").is_err());
    }

    #[test]
    fn test_cli_parses_solve() {
        let cli = Cli::try_parse_from([
            "lodestar", "solve", "-n", "3", "-e", "0,1,4", "-e", "1,2,1", "0",
        ])
        .unwrap();
        match cli.command {
            Commands::Solve { graph, source } => {
                assert_eq!(graph.vertices, 3);
                assert_eq!(graph.edge.len(), 2);
                assert_eq!(source, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
