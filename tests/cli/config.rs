use crate::cli::support::{demo, graphwalk, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

const SOCIAL_DFS: &str =
    "A -> B -> D -> H -> N -> M -> G -> C -> F -> K -> L -> E -> I -> O -> P -> J\n";

#[test]
fn test_config_sets_default_strategy() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "graphwalk.toml", "strategy = \"dfs\"\n");

    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("traverse")
        .arg(demo("social"))
        .args(["--from", "A"])
        .assert()
        .success()
        .stdout(SOCIAL_DFS);
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "graphwalk.toml", "format = \"json\"\n");

    let output = graphwalk()
        .env("GRAPHWALK_CONFIG", &config)
        .arg("traverse")
        .arg(demo("grid"))
        .args(["--from", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["strategy"], "bfs");
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let config = write_graph(
        dir.path(),
        "graphwalk.toml",
        "format = \"json\"\nstrategy = \"dfs\"\n",
    );

    graphwalk()
        .arg("--config")
        .arg(&config)
        .args(["--format", "human", "traverse"])
        .arg(demo("grid"))
        .args(["--from", "A", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout("A -> B -> E -> C -> F -> I -> D -> G -> J -> M -> H -> K -> N -> L -> O -> P\n");
}

#[test]
fn test_config_selects_bellman_ford() {
    let dir = tempdir().unwrap();
    let config = write_graph(
        dir.path(),
        "graphwalk.toml",
        "algorithm = \"bellman-ford\"\n",
    );

    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("shortest")
        .arg(demo("logistics"))
        .args(["--from", "A", "--to", "J"])
        .assert()
        .success()
        .stdout("A -> B -> G -> J\ncost: 13\n");
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "graphwalk.toml", "strategy = \"sideways\"\n");

    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("traverse")
        .arg(demo("grid"))
        .args(["--from", "A"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
