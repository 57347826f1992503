//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, negative cycle, distance overflow, invalid graph document)

mod macros;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph input or algorithm precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum WalkError {
    // Data errors (exit code 3)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("negative-weight cycle reachable from {origin}")]
    NegativeCycleDetected { origin: String },

    #[error("distance to {vertex} does not fit in a 64-bit integer")]
    DistanceOverflow { vertex: String },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unknown {context}: {value} (expected: {expected})")]
    UnknownValue {
        context: String,
        value: String,
        expected: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WalkError {
    /// Create an error for a vertex the graph does not contain
    pub fn unknown_vertex(vertex: &impl fmt::Display) -> Self {
        WalkError::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for a negative cycle reachable from `origin`
    pub fn negative_cycle(origin: &impl fmt::Display) -> Self {
        WalkError::NegativeCycleDetected {
            origin: origin.to_string(),
        }
    }

    /// Create an error for a shortest distance outside the `i64` range
    pub fn distance_overflow(vertex: &impl fmt::Display) -> Self {
        WalkError::DistanceOverflow {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for a malformed graph document
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        WalkError::InvalidDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for an unrecognized enum-like value
    pub fn unknown_value(context: &str, value: impl fmt::Display, expected: &str) -> Self {
        WalkError::UnknownValue {
            context: context.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WalkError::UsageError(_) | WalkError::UnknownValue { .. } => ExitCode::Usage,

            WalkError::UnknownVertex { .. }
            | WalkError::NegativeCycleDetected { .. }
            | WalkError::DistanceOverflow { .. }
            | WalkError::InvalidDocument { .. } => ExitCode::Data,

            WalkError::Io(_)
            | WalkError::Yaml(_)
            | WalkError::Json(_)
            | WalkError::Toml(_)
            | WalkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WalkError::UnknownVertex { .. } => "unknown_vertex",
            WalkError::NegativeCycleDetected { .. } => "negative_cycle_detected",
            WalkError::DistanceOverflow { .. } => "distance_overflow",
            WalkError::InvalidDocument { .. } => "invalid_document",
            WalkError::UsageError(_) => "usage_error",
            WalkError::UnknownValue { .. } => "unknown_value",
            WalkError::Io(_) => "io_error",
            WalkError::Yaml(_) => "yaml_error",
            WalkError::Json(_) => "json_error",
            WalkError::Toml(_) => "toml_error",
            WalkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            WalkError::UnknownVertex { vertex } | WalkError::DistanceOverflow { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            WalkError::NegativeCycleDetected { origin } => {
                error_obj["origin"] = serde_json::json!(origin);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, WalkError>;
