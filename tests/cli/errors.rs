use crate::cli::support::{demo, graphwalk, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unknown_start_vertex() {
    graphwalk()
        .arg("traverse")
        .arg(demo("grid"))
        .args(["--from", "Z"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("error: unknown vertex: Z"));
}

#[test]
fn test_unknown_destination_vertex() {
    graphwalk()
        .arg("shortest")
        .arg(demo("city"))
        .args(["--from", "Centro", "--to", "Lua"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: Lua"));
}

#[test]
fn test_unknown_vertex_json_envelope() {
    let output = graphwalk()
        .args(["--format", "json", "path"])
        .arg(demo("social"))
        .args(["--from", "A", "--to", "Z"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["vertex"], "Z");
}

#[test]
fn test_quiet_suppresses_error_message() {
    graphwalk()
        .args(["--quiet", "traverse"])
        .arg(demo("grid"))
        .args(["--from", "Z"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_weighted_document_rejected_by_traverse() {
    graphwalk()
        .arg("traverse")
        .arg(demo("city"))
        .args(["--from", "Centro"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid graph document"));
}

#[test]
fn test_missing_weight_rejected_by_shortest() {
    graphwalk()
        .arg("shortest")
        .arg(demo("grid"))
        .args(["--from", "A"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("invalid graph document"));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.csv", "A,B\n");

    graphwalk()
        .arg("hops")
        .arg(&graph)
        .args(["--from", "A"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unsupported extension"));
}

#[test]
fn test_missing_graph_file() {
    let dir = tempdir().unwrap();

    graphwalk()
        .arg("hops")
        .arg(dir.path().join("absent.toml"))
        .args(["--from", "A"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_strategy_is_usage_error() {
    graphwalk()
        .arg("traverse")
        .arg(demo("grid"))
        .args(["--from", "A", "--strategy", "dfz"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("dfz"));
}

#[test]
fn test_invalid_strategy_json_usage_error() {
    let output = graphwalk()
        .args(["--format", "json", "traverse"])
        .arg(demo("grid"))
        .args(["--from", "A", "--strategy", "dfz"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}
