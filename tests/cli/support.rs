use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphwalk with logging environment cleared
pub fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env_remove("RUST_LOG")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("GRAPHWALK_CONFIG");
    cmd
}

/// Path to one of the bundled demo graphs
pub fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(format!("{}.toml", name))
}

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

pub const RING: &str = r#"
kind = "unweighted"
edges = [
  { from = "A", to = "B" },
  { from = "B", to = "C" },
  { from = "C", to = "D" },
  { from = "D", to = "A" },
]
"#;

pub const NEGATIVE_CYCLE: &str = r#"
kind = "weighted"
edges = [
  { from = "A", to = "B", weight = -1 },
  { from = "B", to = "A", weight = -1 },
]
"#;
