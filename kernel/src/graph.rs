//! `Graph`: arena of vertices and edges.
//!
//! Vertices are addressed by [`VertexId`] and looked up by label through a
//! side index. Edges are stored in declaration order behind `Arc` so that
//! paths can share them without copying. A per-vertex outgoing index keeps
//! successor enumeration in declaration order without scanning every edge.

use std::collections::HashMap;
use std::sync::Arc;

use crate::edge::{Edge, EdgeConfig};
use crate::error::GraphError;
use crate::vertex::{Vertex, VertexId};

/// Arena handle for an edge, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Caller-owned vertex and edge sets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    label_index: HashMap<String, VertexId>,
    edges: Vec<Arc<Edge>>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with a unique label.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertexLabel`] if the label is taken.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<VertexId, GraphError> {
        let label = label.into();
        if self.label_index.contains_key(&label) {
            return Err(GraphError::DuplicateVertexLabel { label });
        }
        let id = VertexId(self.vertices.len());
        self.label_index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(label));
        self.outgoing.push(Vec::new());
        Ok(id)
    }

    /// Add an edge from `tail` to `head` and link both vertices' adjacency.
    ///
    /// Directed edges make `head` a child of `tail` (and `tail` a parent of
    /// `head`). Undirected edges additionally apply the reverse relation.
    /// Either way the edge is recorded as outgoing from `tail` only.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either handle is foreign and
    /// [`GraphError::InvalidEdgeCost`] for negative or non-finite costs.
    pub fn add_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        config: EdgeConfig,
    ) -> Result<EdgeId, GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        if !config.cost.is_finite() || config.cost < 0.0 {
            return Err(GraphError::InvalidEdgeCost { cost: config.cost });
        }

        let directed = config.directed;
        self.vertices[tail.0].add_child(head);
        self.vertices[head.0].add_parent(tail);
        if !directed {
            self.vertices[head.0].add_child(tail);
            self.vertices[tail.0].add_parent(head);
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Arc::new(Edge::linked(tail, head, config)));
        self.outgoing[tail.0].push(id);
        Ok(id)
    }

    fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        if id.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex { index: id.0 })
        }
    }

    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Resolve a label to its handle.
    #[must_use]
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.label_index.get(label).copied()
    }

    /// Label of a vertex, or `None` for a foreign handle.
    #[must_use]
    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::label)
    }

    /// All vertices with their handles, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All edges in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[Arc<Edge>] {
        &self.edges
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Arc<Edge>> {
        self.edges.get(id.0)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges whose tail is `id`, in declaration order.
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &Arc<Edge>> {
        self.outgoing
            .get(id.0)
            .into_iter()
            .flatten()
            .map(|e| &self.edges[e.0])
    }

    /// `true` iff every edge is directed. An edgeless graph is a digraph.
    #[must_use]
    pub fn is_digraph(&self) -> bool {
        self.edges.iter().all(|e| e.is_directed())
    }

    /// Set the traversal flag of one vertex. Foreign handles are ignored.
    pub fn set_visited(&mut self, id: VertexId, visited: bool) {
        if let Some(v) = self.vertices.get_mut(id.0) {
            v.set_visited(visited);
        }
    }

    /// Reset every vertex's traversal flag before an independent walk.
    pub fn clear_visited(&mut self) {
        for v in &mut self.vertices {
            v.set_visited(false);
        }
    }
}
