//! Typed graph construction errors.
//!
//! Construction is the only fallible part of the kernel. Once a vertex or
//! edge exists in a [`crate::graph::Graph`] it is well-formed for the rest of
//! its lifetime.

/// Typed failure for graph construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex with this label already exists in the graph.
    #[error("duplicate vertex label: {label}")]
    DuplicateVertexLabel { label: String },

    /// A vertex handle does not belong to this graph.
    #[error("unknown vertex handle: {index}")]
    UnknownVertex { index: usize },

    /// Edge costs must be finite and non-negative.
    #[error("invalid edge cost {cost}: costs must be finite and non-negative")]
    InvalidEdgeCost { cost: f64 },
}
