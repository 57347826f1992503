use crate::cli::support::{demo, graphwalk, write_graph, NEGATIVE_CYCLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_dijkstra_city_route() {
    graphwalk()
        .arg("shortest")
        .arg(demo("city"))
        .args(["--from", "Centro", "--to", "Terminal"])
        .assert()
        .success()
        .stdout("Centro -> Parque -> Aeroporto -> Terminal\ncost: 12\n");
}

#[test]
fn test_bellman_ford_logistics_table() {
    graphwalk()
        .arg("shortest")
        .arg(demo("logistics"))
        .args(["--from", "A", "--algorithm", "bellman-ford"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: 0 (A)\n"))
        .stdout(predicate::str::contains("J: 13 (A -> B -> G -> J)\n"))
        .stdout(predicate::str::contains("P: 19 (A -> B -> E -> H -> K -> N -> P)\n"));
}

#[test]
fn test_bellman_ford_unreachable_vertex() {
    graphwalk()
        .arg("shortest")
        .arg(demo("logistics"))
        .args(["--from", "P", "-a", "bellman-ford"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P: 0 (P)\n"))
        .stdout(predicate::str::contains("A: no path\n"));
}

#[test]
fn test_shortest_json_route() {
    let output = graphwalk()
        .args(["--format", "json", "shortest"])
        .arg(demo("city"))
        .args(["--from", "Terminal", "--to", "Centro"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 12);
    assert_eq!(json["path"][0], "Terminal");
    assert_eq!(json["path"][3], "Centro");
}

#[test]
fn test_algorithms_agree_on_city() {
    let run = |algorithm: &str| {
        graphwalk()
            .args(["--format", "json", "shortest"])
            .arg(demo("city"))
            .args(["--from", "BairroA", "--algorithm", algorithm])
            .output()
            .unwrap()
    };
    let dijkstra: serde_json::Value = serde_json::from_slice(&run("dijkstra").stdout).unwrap();
    let bellman: serde_json::Value = serde_json::from_slice(&run("bellman-ford").stdout).unwrap();

    let costs = |json: &serde_json::Value| -> Vec<serde_json::Value> {
        json["routes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["cost"].clone())
            .collect()
    };
    assert_eq!(costs(&dijkstra), costs(&bellman));
    assert_eq!(costs(&dijkstra).len(), 16);
}

#[test]
fn test_negative_cycle_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.toml", NEGATIVE_CYCLE);

    graphwalk()
        .arg("shortest")
        .arg(&graph)
        .args(["--from", "A", "--algorithm", "bellman-ford"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "negative-weight cycle reachable from A",
        ));
}

#[test]
fn test_negative_cycle_json_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "cycle.toml", NEGATIVE_CYCLE);

    let output = graphwalk()
        .args(["--format", "json", "shortest"])
        .arg(&graph)
        .args(["--from", "A", "--algorithm", "bellman-ford"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "negative_cycle_detected");
    assert_eq!(json["error"]["origin"], "A");
}

#[test]
fn test_distance_overflow_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "huge.json",
        r#"{"kind": "weighted", "edges": [
            {"from": "A", "to": "B", "weight": 9223372036854775807},
            {"from": "B", "to": "C", "weight": 1}
        ]}"#,
    );

    for algorithm in ["dijkstra", "bellman-ford"] {
        let output = graphwalk()
            .args(["--format", "json", "shortest"])
            .arg(&graph)
            .args(["--from", "A", "--algorithm", algorithm])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(3));

        let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
        assert_eq!(json["error"]["type"], "distance_overflow");
        assert_eq!(json["error"]["vertex"], "C");
    }
}
