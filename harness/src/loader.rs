//! JSON graph documents.
//!
//! Format:
//!
//! ```json
//! {
//!   "vertices": [{"label": "o103"}, {"label": "ts"}],
//!   "edges": [{"v1": "o103", "v2": "ts", "cost": 8, "directed": true}],
//!   "start": ["o103"],
//!   "goal": "ts"
//! }
//! ```
//!
//! `cost` defaults to `0`, `directed` to `true`, `label` to none. `start`
//! and `goal` are optional; a document with both can be run as a world.

use std::fs;
use std::path::{Path as FsPath, PathBuf};

use serde::Deserialize;
use waypoint_kernel::{EdgeConfig, Graph};

use crate::contract::{SearchWorld, WorldError};

/// Failure loading a graph document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graph document has no {field}; it cannot be run as a world")]
    MissingField { field: &'static str },

    #[error(transparent)]
    World(#[from] WorldError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VertexDocument {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDocument {
    pub v1: String,
    pub v2: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_directed() -> bool {
    true
}

/// Parsed, not yet validated, graph description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<VertexDocument>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
    #[serde(default)]
    pub start: Vec<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

impl GraphDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] for malformed JSON or unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Json`] if it does not parse.
    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Build a linked graph: vertices in document order, then edges in
    /// document order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLabel`] for an edge endpoint that is not
    /// a declared vertex, and [`WorldError::Graph`] for duplicate labels or
    /// invalid costs.
    pub fn to_graph(&self) -> Result<Graph, WorldError> {
        let mut graph = Graph::new();
        for vertex in &self.vertices {
            graph.add_vertex(vertex.label.clone())?;
        }
        for edge in &self.edges {
            let tail = lookup(&graph, &edge.v1)?;
            let head = lookup(&graph, &edge.v2)?;
            let config = EdgeConfig {
                cost: edge.cost,
                directed: edge.directed,
                label: edge.label.clone(),
            };
            graph.add_edge(tail, head, config)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph document loaded"
        );
        Ok(graph)
    }

    /// Wrap this document as a runnable world.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingField`] if `start` is empty or `goal` is
    /// absent.
    pub fn into_world(self, world_id: impl Into<String>) -> Result<DocumentWorld, LoadError> {
        if self.start.is_empty() {
            return Err(LoadError::MissingField { field: "start" });
        }
        let Some(goal) = self.goal.clone() else {
            return Err(LoadError::MissingField { field: "goal" });
        };
        Ok(DocumentWorld {
            world_id: world_id.into(),
            goal,
            document: self,
        })
    }
}

fn lookup(graph: &Graph, label: &str) -> Result<waypoint_kernel::VertexId, WorldError> {
    graph
        .vertex_id(label)
        .ok_or_else(|| WorldError::UnknownLabel {
            label: label.to_string(),
        })
}

/// Parse a JSON document straight into a graph.
///
/// # Errors
///
/// Returns [`LoadError`] if the text does not parse or does not describe a
/// valid graph.
pub fn load_graph_str(text: &str) -> Result<Graph, LoadError> {
    Ok(GraphDocument::from_json_str(text)?.to_graph()?)
}

/// Read a JSON document from disk straight into a graph.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read, does not parse, or does
/// not describe a valid graph.
pub fn load_graph_file(path: impl AsRef<FsPath>) -> Result<Graph, LoadError> {
    Ok(GraphDocument::from_file(path)?.to_graph()?)
}

/// A world backed by a graph document with `start` and `goal` set.
#[derive(Debug, Clone)]
pub struct DocumentWorld {
    world_id: String,
    goal: String,
    document: GraphDocument,
}

impl SearchWorld for DocumentWorld {
    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn graph(&self) -> Result<Graph, WorldError> {
        self.document.to_graph()
    }

    fn starting_labels(&self) -> Vec<String> {
        self.document.start.clone()
    }

    fn goal_label(&self) -> String {
        self.goal.clone()
    }
}
