//! Vertex: a labelled state with deduplicated adjacency.

use std::collections::BTreeSet;

/// Arena handle for a vertex inside a [`crate::graph::Graph`].
///
/// Handles are dense indices assigned in insertion order. Because labels are
/// unique within a graph, handle equality is label equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in its graph's arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the state space.
///
/// `children` and `parents` keep insertion order; the side indexes make
/// [`Vertex::add_child`] and [`Vertex::add_parent`] idempotent without a
/// linear scan.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    visited: bool,
    children: Vec<VertexId>,
    child_index: BTreeSet<VertexId>,
    parents: Vec<VertexId>,
    parent_index: BTreeSet<VertexId>,
}

impl Vertex {
    /// Create an unlinked vertex.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visited: false,
            children: Vec::new(),
            child_index: BTreeSet::new(),
            parents: Vec::new(),
            parent_index: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Vertices reachable through one outgoing edge, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[VertexId] {
        &self.children
    }

    /// Vertices with an edge pointing at this vertex, in insertion order.
    #[must_use]
    pub fn parents(&self) -> &[VertexId] {
        &self.parents
    }

    /// Record `child` as reachable from this vertex.
    ///
    /// Returns `false` (and changes nothing) if it was already present.
    pub fn add_child(&mut self, child: VertexId) -> bool {
        if !self.child_index.insert(child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Record `parent` as having an edge into this vertex.
    ///
    /// Returns `false` (and changes nothing) if it was already present.
    pub fn add_parent(&mut self, parent: VertexId) -> bool {
        if !self.parent_index.insert(parent) {
            return false;
        }
        self.parents.push(parent);
        true
    }

    /// Traversal flag used by external walkers. Not consulted by search.
    #[must_use]
    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}
