//! `Path`: an ordered, growable edge sequence with cumulative cost.
//!
//! The replay cursor is a presentation aid; search only uses
//! [`Path::append`], [`Path::last`] and `Clone`.

use std::sync::Arc;

use crate::edge::Edge;
use crate::graph::Graph;
use crate::vertex::VertexId;

/// Ordered sequence of edges from a start to a frontier tip.
///
/// `Clone` produces an independent path: the edge sequence is copied (edges
/// themselves are shared), so appending to either copy never affects the
/// other.
#[derive(Debug, Clone, Default)]
pub struct Path {
    edges: Vec<Arc<Edge>>,
    cost: f64,
    // 0 = before the first edge, k = at edge k-1, len + 1 = past the end.
    cursor: usize,
}

impl Path {
    /// Create an empty path with the cursor before the first edge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path holding a single edge.
    #[must_use]
    pub fn from_edge(edge: Arc<Edge>) -> Self {
        let mut path = Self::new();
        path.append(edge);
        path
    }

    /// Extend the path and add the edge's cost to the running total.
    pub fn append(&mut self, edge: Arc<Edge>) {
        self.cost += edge.cost();
        self.edges.push(edge);
    }

    /// The most recently appended edge.
    #[must_use]
    pub fn last(&self) -> Option<&Arc<Edge>> {
        self.edges.last()
    }

    /// The vertex at this path's frontier tip.
    #[must_use]
    pub fn tip(&self) -> Option<VertexId> {
        self.last().map(|e| e.head())
    }

    /// Sum of all appended edges' costs.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of edges, including the synthetic start edge if present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn edges(&self) -> &[Arc<Edge>] {
        &self.edges
    }

    /// Number of real transitions, not counting tail-less start edges.
    #[must_use]
    pub fn transitions(&self) -> usize {
        self.edges.iter().filter(|e| !e.is_start()).count()
    }

    /// Head of every edge in order: the vertices visited along the path.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().map(|e| e.head())
    }

    /// Labels of [`Path::vertices`]; foreign handles render as `"?"`.
    #[must_use]
    pub fn vertex_labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.vertices()
            .map(|v| graph.label(v).unwrap_or("?"))
            .collect()
    }

    /// Advance the cursor and return the edge at the new position, or `None`
    /// once past the end.
    pub fn next_edge(&mut self) -> Option<&Arc<Edge>> {
        self.cursor = (self.cursor + 1).min(self.edges.len() + 1);
        self.current_edge()
    }

    /// Retreat the cursor and return the edge at the new position, or `None`
    /// once before the start.
    pub fn prev_edge(&mut self) -> Option<&Arc<Edge>> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current_edge()
    }

    /// Edge under the cursor, or `None` at either sentinel.
    #[must_use]
    pub fn current_edge(&self) -> Option<&Arc<Edge>> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.edges.get(i))
    }

    /// Return the cursor to the start sentinel.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
