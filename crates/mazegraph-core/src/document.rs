//! TOML description of a named-vertex graph
//!
//! ```toml
//! vertices = ["A", "B", "C"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

impl GraphDocument {
    /// Parse a document from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a document from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| GraphError::invalid_document(path, e))
    }

    /// Replay the document through `add_vertex` and `add_edge`.
    ///
    /// Vertices are added in document order, then edges. The first contract
    /// violation (duplicate vertex, unknown endpoint, bad weight) aborts the
    /// build.
    pub fn into_graph(self) -> Result<WeightedGraph<String>> {
        let mut graph = WeightedGraph::new();
        for vertex in self.vertices {
            graph.add_vertex(vertex)?;
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph document loaded"
        );
        Ok(graph)
    }
}
