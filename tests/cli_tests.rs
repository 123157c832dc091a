//! Integration tests for the lodestar CLI
//!
//! These tests run the lodestar binary and verify output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for lodestar
fn lodestar() -> Command {
    cargo_bin_cmd!("lodestar")
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    lodestar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: lodestar"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    lodestar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lodestar"));
}

#[test]
fn test_subcommand_help() {
    lodestar()
        .args(["solve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Compute shortest paths from a source vertex",
        ));
}

// ============================================================================
// Demo command
// ============================================================================

#[test]
fn test_demo_default_graph() {
    lodestar()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("settled: s y z t x"))
        .stdout(predicate::str::contains("y -> t  distance: 8"))
        .stdout(predicate::str::contains("s -> y  distance: 5"))
        .stdout(predicate::str::contains("s -> y -> t -> x  distance: 9"));
}

#[test]
fn test_demo_linear_selection_matches_heap() {
    let heap = lodestar().arg("demo").output().unwrap();
    let linear = lodestar()
        .args(["demo", "--selection", "linear"])
        .output()
        .unwrap();
    assert_eq!(heap.stdout, linear.stdout);
}

#[test]
fn test_demo_lecture_graph() {
    lodestar()
        .args(["demo", "--graph", "lecture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settled: s u v r w t"))
        .stdout(predicate::str::contains("v -> t  distance: 12"));
}

#[test]
fn test_demo_alternate_source() {
    lodestar()
        .args(["demo", "--source", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: y"))
        .stdout(predicate::str::contains("y -> t  distance: 3"));
}

#[test]
fn test_demo_unknown_label_exit_2() {
    lodestar()
        .args(["demo", "--source", "q"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown vertex label 'q'"));
}

#[test]
fn test_demo_json_output() {
    lodestar()
        .args(["--format", "json", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"settlement_order\""))
        .stdout(predicate::str::contains("\"distance\": 5.0"))
        .stdout(predicate::str::contains("\"paths\""));
}

// ============================================================================
// Solve command
// ============================================================================

#[test]
fn test_solve_basic() {
    lodestar()
        .args(["solve", "-n", "3", "-e", "0,1,4", "-e", "1,2,1.5", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settled: 0 1 2"))
        .stdout(predicate::str::contains("1 -> 2  distance: 5.5"));
}

#[test]
fn test_solve_reports_unreachable_vertices() {
    lodestar()
        .args(["solve", "-n", "3", "-e", "0,1,2", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2  unreachable"));
}

#[test]
fn test_solve_json_output() {
    lodestar()
        .args(["--format", "json", "solve", "-n", "2", "-e", "0,1,3", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": 0"))
        .stdout(predicate::str::contains("\"distance\": 3.0"));
}

#[test]
fn test_solve_quiet_suppresses_source_line() {
    lodestar()
        .args(["--quiet", "solve", "-n", "2", "-e", "0,1,3", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source:").not());
}

// ============================================================================
// Path command
// ============================================================================

#[test]
fn test_path_output() {
    lodestar()
        .args(["path", "-n", "3", "-e", "0,1,4", "-e", "1,2,1", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2  distance: 5"));
}

#[test]
fn test_path_json_output() {
    lodestar()
        .args([
            "--format", "json", "path", "-n", "3", "-e", "0,1,4", "-e", "1,2,1", "0", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": 2"))
        .stdout(predicate::str::contains("\"distance\": 5.0"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_path_unreachable_exit_1() {
    lodestar()
        .args(["path", "-n", "2", "0", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "vertex 1 is unreachable from the source",
        ));
}

#[test]
fn test_path_unreachable_json_error_envelope() {
    lodestar()
        .args(["--format", "json", "path", "-n", "2", "0", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"unreachable\""));
}

#[test]
fn test_negative_weight_exit_3() {
    lodestar()
        .args(["solve", "-n", "2", "-e", "0,1,-2", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

#[test]
fn test_source_out_of_range_exit_2() {
    lodestar()
        .args(["solve", "-n", "2", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("vertex 9 out of range"));
}

#[test]
fn test_bad_edge_syntax_exit_2() {
    lodestar()
        .args(["solve", "-n", "2", "-e", "0,1", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_exit_2() {
    lodestar()
        .args(["--format", "yaml", "demo"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_exit_2() {
    lodestar().arg("frobnicate").assert().code(2);
}
