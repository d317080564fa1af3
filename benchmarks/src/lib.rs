//! Shared helpers for waypoint benchmark suites.

use std::sync::Arc;

use waypoint_kernel::{Edge, EdgeConfig, Graph, Path, VertexId};

/// A layered DAG: `layers` layers of `width` vertices, every vertex linked
/// to every vertex of the next layer, plus a single `root` and `sink`.
pub struct Layered {
    pub graph: Graph,
    pub root: VertexId,
    pub sink: VertexId,
}

/// Label of the sink vertex of a [`Layered`] graph.
pub const SINK_LABEL: &str = "sink";

/// Build a [`Layered`] graph. Edge costs cycle through `1..=7` so that
/// cost order and edge-count order disagree.
///
/// # Panics
///
/// Panics if graph construction fails. Generated labels are distinct and
/// costs are positive, so benchmark setup cannot hit this.
#[must_use]
pub fn layered(layers: usize, width: usize) -> Layered {
    let mut graph = Graph::new();
    let root = graph.add_vertex("root").expect("distinct label");
    let mut previous = vec![root];
    let mut counter: u32 = 0;

    for layer in 0..layers {
        let current: Vec<VertexId> = (0..width)
            .map(|i| graph.add_vertex(format!("l{layer}_{i}")).expect("distinct label"))
            .collect();
        for &tail in &previous {
            for &head in &current {
                counter = counter % 7 + 1;
                graph
                    .add_edge(tail, head, EdgeConfig::default().with_cost(f64::from(counter)))
                    .expect("valid edge");
            }
        }
        previous = current;
    }

    let sink = graph.add_vertex(SINK_LABEL).expect("distinct label");
    for &tail in &previous {
        graph
            .add_edge(tail, sink, EdgeConfig::default().with_cost(1.0))
            .expect("valid edge");
    }
    Layered { graph, root, sink }
}

/// `n` single-edge paths over `graph`'s edges, cycling through them.
///
/// Costs differ across paths, which exercises the lowest-cost heap.
#[must_use]
pub fn sample_paths(graph: &Graph, root: VertexId, n: usize) -> Vec<Path> {
    let edges = graph.edges();
    (0..n)
        .map(|i| {
            let mut path = Path::from_edge(Arc::new(Edge::start(root)));
            if let Some(edge) = edges.get(i % edges.len().max(1)) {
                path.append(Arc::clone(edge));
            }
            path
        })
        .collect()
}
