//! CLI configuration for graphwalk
//!
//! Defaults for output and algorithm selection, read from a TOML file named
//! by `--config` or `GRAPHWALK_CONFIG`. Command-line flags take precedence.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::graph::{Algorithm, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Output format when `--format` is not given
    pub format: OutputFormat,
    /// Traversal strategy for `traverse` and `path`
    pub strategy: Strategy,
    /// Algorithm for `shortest`
    pub algorithm: Algorithm,
    /// Log level when neither `--log-level` nor `--verbose` is given
    pub log_level: Option<String>,
}

impl WalkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WalkConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
