use crate::cli::support::{demo, graphwalk};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_reports_search_stats() {
    graphwalk()
        .args(["--log-level", "debug", "traverse"])
        .arg(demo("grid"))
        .args(["--from", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_stats"));
}

#[test]
fn test_verbose_enables_debug() {
    graphwalk()
        .args(["--verbose", "shortest"])
        .arg(demo("city"))
        .args(["--from", "Centro"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_stats"));
}

#[test]
fn test_default_level_is_quiet() {
    graphwalk()
        .arg("hops")
        .arg(demo("grid"))
        .args(["--from", "A"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = graphwalk()
        .args(["--log-level", "debug", "--log-json", "path"])
        .arg(demo("social"))
        .args(["--from", "A", "--to", "P"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}

#[test]
fn test_graphwalk_log_env() {
    graphwalk()
        .env("GRAPHWALK_LOG", "graphwalk=debug")
        .arg("traverse")
        .arg(demo("grid"))
        .args(["--from", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_stats"));
}
