//! Graph documents: graphs described in TOML, JSON or YAML files
//!
//! ```toml
//! kind = "weighted"
//! directed = true
//! vertices = ["lonely"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 4
//! ```
//!
//! `directed` defaults to true for weighted documents and false for
//! unweighted ones. Edges of an undirected document are inserted in both
//! directions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkError};
use crate::graph::{Graph, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Unweighted,
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: GraphKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    /// Extra vertices, added before any edge endpoint
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    /// File the document was read from, for error messages
    #[serde(skip)]
    origin: Option<PathBuf>,
}

impl GraphDocument {
    /// Load a document, choosing the parser by file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let mut doc: GraphDocument = match extension.as_deref() {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            other => {
                return Err(WalkError::invalid_document(
                    path,
                    format!(
                        "unsupported extension {:?} (expected: toml, json, yaml)",
                        other.unwrap_or("")
                    ),
                ))
            }
        };
        doc.origin = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), kind = ?doc.kind, edges = doc.edges.len(), "load_document");
        Ok(doc)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn is_directed(&self) -> bool {
        self.directed.unwrap_or(self.kind == GraphKind::Weighted)
    }

    fn invalid(&self, reason: impl Into<String>) -> WalkError {
        WalkError::invalid_document(self.origin.clone().unwrap_or_default(), reason)
    }

    /// Build the adjacency-list graph of an unweighted document
    pub fn to_graph(&self) -> Result<Graph<String>> {
        if self.kind != GraphKind::Unweighted {
            return Err(self.invalid("traversal needs an unweighted graph (kind = \"unweighted\")"));
        }

        let mut graph = Graph::new();
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        let bidirectional = !self.is_directed();
        for edge in &self.edges {
            if edge.weight.is_some() {
                return Err(self.invalid(format!(
                    "edge {} -> {} has a weight in an unweighted graph",
                    edge.from, edge.to
                )));
            }
            graph.add_edge(edge.from.clone(), edge.to.clone(), bidirectional);
        }
        Ok(graph)
    }

    /// Build the edge-list graph of a weighted document
    pub fn to_weighted_graph(&self) -> Result<WeightedGraph<String>> {
        if self.kind != GraphKind::Weighted {
            return Err(self.invalid("shortest paths need a weighted graph (kind = \"weighted\")"));
        }

        let mut graph = WeightedGraph::new();
        for v in &self.vertices {
            graph.add_vertex(v.clone());
        }
        let directed = self.is_directed();
        for edge in &self.edges {
            let Some(weight) = edge.weight else {
                return Err(self.invalid(format!(
                    "edge {} -> {} is missing a weight",
                    edge.from, edge.to
                )));
            };
            graph.add_weighted_edge(edge.from.clone(), edge.to.clone(), weight);
            if !directed {
                graph.add_weighted_edge(edge.to.clone(), edge.from.clone(), weight);
            }
        }
        Ok(graph)
    }
}
