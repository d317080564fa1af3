//! World contract: the minimal trait a world must implement to be run.
//!
//! Worlds provide domain data only (a graph, where to start, what to look
//! for). Strategy selection, budgets and rendering are runner concerns.

use waypoint_kernel::{Graph, GraphError, VertexId};

/// Typed failure for building a world's search inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A start, goal or edge endpoint names a vertex that does not exist.
    #[error("unknown vertex label: {label}")]
    UnknownLabel { label: String },
}

/// The contract a world must implement to be run by the harness runner.
pub trait SearchWorld {
    /// Unique world identifier (e.g., `"flight_paths"`).
    fn world_id(&self) -> &str;

    /// Build the world's graph. Each call returns a fresh, unvisited graph.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the world's data is malformed.
    fn graph(&self) -> Result<Graph, WorldError>;

    /// Labels of the vertices search starts from, in seeding order.
    fn starting_labels(&self) -> Vec<String>;

    /// Label of the goal vertex.
    fn goal_label(&self) -> String;
}

/// Resolve labels against `graph`, failing on the first unknown one.
///
/// # Errors
///
/// Returns [`WorldError::UnknownLabel`] for a label with no vertex.
pub fn resolve_labels(graph: &Graph, labels: &[String]) -> Result<Vec<VertexId>, WorldError> {
    labels
        .iter()
        .map(|label| {
            graph
                .vertex_id(label)
                .ok_or_else(|| WorldError::UnknownLabel {
                    label: label.clone(),
                })
        })
        .collect()
}
