//! Shared human and JSON output for shortest-path results

use lodestar_core::error::Result;
use lodestar_core::graph::{ShortestPaths, Vertex};
use serde_json::json;

use crate::cli::Cli;
use crate::commands::demo::VertexLabels;

pub fn label_of(labels: Option<&VertexLabels>, vertex: Vertex) -> String {
    match labels {
        Some(labels) => labels.label(vertex),
        None => vertex.to_string(),
    }
}

fn label_value(labels: Option<&VertexLabels>, vertex: Vertex) -> serde_json::Value {
    match labels {
        Some(labels) => json!(labels.label(vertex)),
        None => json!(vertex),
    }
}

fn joined_path(path: &[Vertex], labels: Option<&VertexLabels>) -> String {
    path.iter()
        .map(|&vertex| label_of(labels, vertex))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One line per vertex: predecessor, vertex, final distance
pub fn print_solution_human(cli: &Cli, result: &ShortestPaths, labels: Option<&VertexLabels>) {
    if !cli.quiet {
        println!("source: {}", label_of(labels, result.source));
    }
    let settled: Vec<String> = result
        .settlement_order
        .iter()
        .map(|&vertex| label_of(labels, vertex))
        .collect();
    println!("settled: {}", settled.join(" "));

    for vertex in 0..result.vertex_count() {
        match result.distances[vertex] {
            Some(distance) => {
                let predecessor = match result.predecessors[vertex] {
                    Some(predecessor) => label_of(labels, predecessor),
                    None => "-".to_string(),
                };
                println!(
                    "{} -> {}  distance: {}",
                    predecessor,
                    label_of(labels, vertex),
                    distance
                );
            }
            None => println!("{}  unreachable", label_of(labels, vertex)),
        }
    }
}

fn solution_json(result: &ShortestPaths, labels: Option<&VertexLabels>) -> serde_json::Value {
    let vertices: Vec<serde_json::Value> = (0..result.vertex_count())
        .map(|vertex| {
            json!({
                "vertex": label_value(labels, vertex),
                "distance": result.distances[vertex],
                "predecessor": result.predecessors[vertex].map(|p| label_value(labels, p)),
            })
        })
        .collect();

    json!({
        "source": label_value(labels, result.source),
        "settlement_order": result
            .settlement_order
            .iter()
            .map(|&vertex| label_value(labels, vertex))
            .collect::<Vec<_>>(),
        "vertices": vertices,
    })
}

pub fn print_solution_json(result: &ShortestPaths, labels: Option<&VertexLabels>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&solution_json(result, labels))?);
    Ok(())
}

pub fn print_path_human(path: &[Vertex], distance: lodestar_core::graph::Weight) {
    println!("{}  distance: {}", joined_path(path, None), distance);
}

pub fn print_path_json(
    source: Vertex,
    target: Vertex,
    path: &[Vertex],
    distance: lodestar_core::graph::Weight,
) -> Result<()> {
    let value = json!({
        "source": source,
        "target": target,
        "path": path,
        "distance": distance,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Demo output: the per-vertex solution plus a reconstructed path to
/// every other vertex
pub fn print_demo_human(cli: &Cli, result: &ShortestPaths, labels: &VertexLabels) {
    print_solution_human(cli, result, Some(labels));

    println!("paths:");
    for vertex in 0..result.vertex_count() {
        if vertex == result.source {
            continue;
        }
        match result.path_to(vertex) {
            Ok(path) => {
                let distance = result.distances[vertex]
                    .map(|w| w.to_string())
                    .unwrap_or_default();
                println!(
                    "  {}  distance: {}",
                    joined_path(&path, Some(labels)),
                    distance
                );
            }
            Err(_) => println!("  {}  unreachable", label_of(Some(labels), vertex)),
        }
    }
}

pub fn print_demo_json(result: &ShortestPaths, labels: &VertexLabels) -> Result<()> {
    let paths: Vec<serde_json::Value> = (0..result.vertex_count())
        .filter(|&vertex| vertex != result.source)
        .map(|vertex| match result.path_to(vertex) {
            Ok(path) => json!({
                "target": label_value(Some(labels), vertex),
                "path": path
                    .iter()
                    .map(|&v| label_value(Some(labels), v))
                    .collect::<Vec<_>>(),
                "distance": result.distances[vertex],
            }),
            Err(_) => json!({
                "target": label_value(Some(labels), vertex),
                "path": serde_json::Value::Null,
                "distance": serde_json::Value::Null,
            }),
        })
        .collect();

    let mut value = solution_json(result, Some(labels));
    value["paths"] = json!(paths);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
