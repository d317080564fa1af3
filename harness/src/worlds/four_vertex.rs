//! `FourVertex`: the smallest graph where cost and edge count disagree.
//!
//! ```text
//! A --1--> B --1--> C <--4.8--> D
//! A --------1.2---> C
//! ```
//!
//! From `A` to `D`, `A → C → D` costs 6.0 and `A → B → C → D` costs 6.8.

use waypoint_kernel::{EdgeConfig, Graph, GraphError};

use crate::contract::{SearchWorld, WorldError};

/// Build the four-vertex graph.
///
/// # Errors
///
/// Infallible in practice; construction errors are propagated for
/// uniformity with loaded graphs.
pub fn graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let a = graph.add_vertex("A")?;
    let b = graph.add_vertex("B")?;
    let c = graph.add_vertex("C")?;
    let d = graph.add_vertex("D")?;

    graph.add_edge(a, b, EdgeConfig::default().with_cost(1.0))?;
    graph.add_edge(a, c, EdgeConfig::default().with_cost(1.2))?;
    graph.add_edge(b, c, EdgeConfig::default().with_cost(1.0))?;
    graph.add_edge(c, d, EdgeConfig::default().with_cost(4.8).undirected())?;
    Ok(graph)
}

/// Search from `A` for `D`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourVertex;

impl SearchWorld for FourVertex {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "four_vertex"
    }

    fn graph(&self) -> Result<Graph, WorldError> {
        Ok(graph()?)
    }

    fn starting_labels(&self) -> Vec<String> {
        vec!["A".into()]
    }

    fn goal_label(&self) -> String {
        "D".into()
    }
}
