//! Edges: weighted, optionally directed transitions between vertices.
//!
//! Endpoints are fixed at construction. The only way to obtain a linked edge
//! is [`crate::graph::Graph::add_edge`], which performs the adjacency side
//! effect exactly once. Synthetic start edges (no tail) come from
//! [`Edge::start`].

use crate::graph::Graph;
use crate::vertex::VertexId;

/// Label carried by the synthetic edge that seeds each starting path.
pub const START_EDGE_LABEL: &str = "start";

/// Construction options for an edge.
///
/// Defaults: `cost = 0.0`, `directed = true`, no label.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConfig {
    /// Non-negative traversal cost.
    pub cost: f64,
    /// Directed edges link tail → head only.
    pub directed: bool,
    /// Optional human-readable name (e.g. the action the edge represents).
    pub label: Option<String>,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            cost: 0.0,
            directed: true,
            label: None,
        }
    }
}

impl EdgeConfig {
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A transition between two vertices.
///
/// The edge references its vertices by handle and does not own them.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    tail: Option<VertexId>,
    head: VertexId,
    cost: f64,
    directed: bool,
    label: Option<String>,
}

impl Edge {
    pub(crate) fn linked(tail: VertexId, head: VertexId, config: EdgeConfig) -> Self {
        Self {
            tail: Some(tail),
            head,
            cost: config.cost,
            directed: config.directed,
            label: config.label,
        }
    }

    /// The synthetic zero-cost edge that places `head` at the tip of a fresh
    /// path. It has no tail and touches no adjacency.
    #[must_use]
    pub fn start(head: VertexId) -> Self {
        Self {
            tail: None,
            head,
            cost: 0.0,
            directed: true,
            label: Some(START_EDGE_LABEL.to_string()),
        }
    }

    /// Starting point of the edge; `None` only for start edges.
    #[must_use]
    pub fn tail(&self) -> Option<VertexId> {
        self.tail
    }

    #[must_use]
    pub fn head(&self) -> VertexId {
        self.head
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn is_start(&self) -> bool {
        self.tail.is_none()
    }

    /// Human-readable descriptor for diagnostics.
    ///
    /// Returns the label when one is set (and non-empty), otherwise a
    /// synthesized `(tail) -(cost)-> (head)` string. Undirected edges render
    /// as `<-`, and the cost is shown only when positive.
    #[must_use]
    pub fn descriptor(&self, graph: &Graph) -> String {
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }

        let tail = self
            .tail
            .and_then(|t| graph.label(t))
            .unwrap_or(START_EDGE_LABEL);
        let head = graph.label(self.head).unwrap_or("?");
        let cost = if self.cost > 0.0 {
            format!("({:.1})", self.cost)
        } else {
            String::new()
        };
        let tail_direction = if self.directed { "" } else { "<" };

        format!("({tail}) {tail_direction}-{cost}-> ({head})")
    }
}
