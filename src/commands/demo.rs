//! Demo command: built-in demonstration graphs
//!
//! Ships the two classic teaching graphs the tool is demonstrated with:
//! the five-vertex graph from Cormen et al. and a six-vertex variant
//! used in lectures. Vertices carry single-letter labels; translation
//! between labels and indices happens entirely in this layer, so the
//! core only ever sees integer indices.

use std::str::FromStr;
use std::time::Instant;

use lodestar_core::error::{LodestarError, Result};
use lodestar_core::format::OutputFormat;
use lodestar_core::graph::{
    shortest_paths, Edge, GraphStore, SelectionStrategy, ShortestPathOptions, Vertex,
};

use crate::cli::Cli;
use crate::commands::output;

/// Index-to-label mapping for a demonstration graph
pub struct VertexLabels(&'static str);

impl VertexLabels {
    pub fn label(&self, vertex: Vertex) -> String {
        match self.0.chars().nth(vertex) {
            Some(letter) => letter.to_string(),
            None => "-".to_string(),
        }
    }

    pub fn index_of(&self, label: char) -> Option<Vertex> {
        self.0.chars().position(|letter| letter == label)
    }
}

/// Built-in demonstration graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoGraph {
    /// Five vertices s,t,x,y,z (Cormen et al., 3rd ed., ch. 24)
    Cormen,
    /// Six vertices s,r,w,t,u,v
    Lecture,
}

impl DemoGraph {
    pub fn labels(&self) -> VertexLabels {
        match self {
            DemoGraph::Cormen => VertexLabels("stxyz"),
            DemoGraph::Lecture => VertexLabels("srwtuv"),
        }
    }

    fn vertex_count(&self) -> usize {
        match self {
            DemoGraph::Cormen => 5,
            DemoGraph::Lecture => 6,
        }
    }

    fn edges(&self) -> Vec<Edge> {
        match self {
            DemoGraph::Cormen => vec![
                Edge::new(0, 1, 10.0),
                Edge::new(0, 3, 5.0),
                Edge::new(1, 2, 1.0),
                Edge::new(1, 3, 2.0),
                Edge::new(2, 4, 2.0),
                Edge::new(3, 1, 3.0),
                Edge::new(3, 2, 9.0),
                Edge::new(3, 4, 2.0),
                Edge::new(4, 0, 7.0),
                Edge::new(4, 2, 6.0),
            ],
            DemoGraph::Lecture => vec![
                Edge::new(0, 1, 10.0),
                Edge::new(0, 4, 5.0),
                Edge::new(1, 2, 1.0),
                Edge::new(1, 4, 2.0),
                Edge::new(2, 3, 3.0),
                Edge::new(2, 5, 4.0),
                Edge::new(4, 1, 3.0),
                Edge::new(4, 2, 9.0),
                Edge::new(4, 5, 2.0),
                Edge::new(5, 0, 7.0),
                Edge::new(5, 2, 6.0),
                Edge::new(5, 3, 5.0),
            ],
        }
    }
}

impl FromStr for DemoGraph {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cormen" => Ok(DemoGraph::Cormen),
            "lecture" => Ok(DemoGraph::Lecture),
            other => Err(format!(
                "unknown demo graph '{}' (expected: cormen, lecture)",
                other
            )),
        }
    }
}

/// Execute the demo command
pub fn execute(
    cli: &Cli,
    graph: DemoGraph,
    source: Option<char>,
    selection: SelectionStrategy,
) -> Result<()> {
    let start = Instant::now();

    let labels = graph.labels();
    let source_label = source.unwrap_or('s');
    let source = labels.index_of(source_label).ok_or_else(|| {
        LodestarError::UsageError(format!("unknown vertex label '{}'", source_label))
    })?;

    let store = GraphStore::build(graph.vertex_count(), &graph.edges())?;
    let opts = ShortestPathOptions { selection };
    let result = shortest_paths(&store, source, &opts)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "demo");
    }

    match cli.format {
        OutputFormat::Json => output::print_demo_json(&result, &labels)?,
        OutputFormat::Human => output::print_demo_human(cli, &result, &labels),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip() {
        let labels = DemoGraph::Cormen.labels();
        assert_eq!(labels.index_of('s'), Some(0));
        assert_eq!(labels.index_of('z'), Some(4));
        assert_eq!(labels.index_of('q'), None);
        assert_eq!(labels.label(3), "y");
        assert_eq!(labels.label(9), "-");
    }

    #[test]
    fn test_demo_graphs_build() {
        for graph in [DemoGraph::Cormen, DemoGraph::Lecture] {
            let store = GraphStore::build(graph.vertex_count(), &graph.edges()).unwrap();
            assert_eq!(store.vertex_count(), graph.vertex_count());
        }
    }

    #[test]
    fn test_demo_graph_from_str() {
        assert_eq!("cormen".parse::<DemoGraph>().unwrap(), DemoGraph::Cormen);
        assert_eq!("Lecture".parse::<DemoGraph>().unwrap(), DemoGraph::Lecture);
        assert!("petersen".parse::<DemoGraph>().is_err());
    }
}
