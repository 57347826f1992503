//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Algorithm, Strategy};

/// graphwalk - BFS, DFS, Dijkstra and Bellman-Ford over graph files
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json) [default: human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress error messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file with default format, strategy and algorithm
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Graph file plus start vertex, shared by every subcommand
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph document (.toml, .json, .yaml)
    pub graph: PathBuf,

    /// Start vertex
    #[arg(long)]
    pub from: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the visitation order from a start vertex (unweighted graphs)
    Traverse {
        #[command(flatten)]
        target: GraphArgs,

        /// Expansion order: bfs, dfs, dfs-recursive
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Print edge-count distances from a start vertex (unweighted graphs)
    Hops {
        #[command(flatten)]
        target: GraphArgs,
    },

    /// Find a path between two vertices (unweighted graphs)
    Path {
        #[command(flatten)]
        target: GraphArgs,

        /// Destination vertex
        #[arg(long)]
        to: String,

        /// Expansion order: bfs, dfs, dfs-recursive
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Weighted shortest paths from a source (weighted graphs)
    Shortest {
        #[command(flatten)]
        target: GraphArgs,

        /// Only report the route to this vertex
        #[arg(long)]
        to: Option<String>,

        /// Algorithm: dijkstra, bellman-ford
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
