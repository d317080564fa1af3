//! `FlightPaths`: zero-cost directed routes from Christchurch to the Gold Coast.
//!
//! Four distinct routes exist, of one, two and three legs.

use waypoint_kernel::{EdgeConfig, Graph, GraphError};

use crate::contract::{SearchWorld, WorldError};

pub const CHRISTCHURCH: &str = "Christchurch";
pub const AUCKLAND: &str = "Auckland";
pub const WELLINGTON: &str = "Wellington";
pub const GOLD_COAST: &str = "Gold Coast";

/// Build the flight network.
///
/// # Errors
///
/// Infallible in practice; construction errors are propagated for
/// uniformity with loaded graphs.
pub fn graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let christchurch = graph.add_vertex(CHRISTCHURCH)?;
    let auckland = graph.add_vertex(AUCKLAND)?;
    let wellington = graph.add_vertex(WELLINGTON)?;
    let gold_coast = graph.add_vertex(GOLD_COAST)?;

    for (tail, head) in [
        (christchurch, gold_coast),
        (christchurch, auckland),
        (christchurch, wellington),
        (wellington, gold_coast),
        (wellington, auckland),
        (auckland, gold_coast),
    ] {
        graph.add_edge(tail, head, EdgeConfig::default())?;
    }
    Ok(graph)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightPaths;

impl SearchWorld for FlightPaths {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "flight_paths"
    }

    fn graph(&self) -> Result<Graph, WorldError> {
        Ok(graph()?)
    }

    fn starting_labels(&self) -> Vec<String> {
        vec![CHRISTCHURCH.into()]
    }

    fn goal_label(&self) -> String {
        GOLD_COAST.into()
    }
}
