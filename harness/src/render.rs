//! Plain-text rendering of solutions and graph structure.
//!
//! Solutions are rendered by walking the path's replay cursor; graph info is
//! rendered by walking children/parents with the vertex `visited` flags,
//! which are reset before each vertex's walk.

use std::fmt::Write as _;

use waypoint_kernel::{Graph, Path, VertexId};
use waypoint_search::{SearchEngine, TerminationReason};

/// Edge descriptors of `path` in order, replayed through its cursor.
///
/// The cursor is reset before and after the walk.
pub fn edge_descriptors(graph: &Graph, path: &mut Path) -> Vec<String> {
    path.reset();
    let mut out = Vec::with_capacity(path.len());
    while let Some(edge) = path.next_edge() {
        out.push(edge.descriptor(graph));
    }
    path.reset();
    out
}

/// Render one numbered solution block, terminated by a blank line.
pub fn render_solution(graph: &Graph, path: &mut Path, number: usize) -> String {
    let mut out = format!("Solution {number}:\n");
    for descriptor in edge_descriptors(graph, path) {
        let _ = writeln!(out, "- {descriptor}");
    }
    out.push('\n');
    out
}

/// Trailer printed once the engine has no more solutions.
#[must_use]
pub fn render_no_more(found: usize) -> String {
    if found == 0 {
        "No solutions found!\n\n".to_string()
    } else {
        "No more solutions found!\n\n".to_string()
    }
}

/// Trailer for a run that ended with `termination` after `found` solutions.
///
/// Only an exhausted frontier gets the "no (more) solutions" wording; a run
/// stopped by its budget or cancel token may still have solutions left.
#[must_use]
pub fn render_trailer(found: usize, termination: Option<TerminationReason>) -> String {
    match termination {
        Some(TerminationReason::ExpansionBudgetExceeded) => {
            "Search stopped: expansion budget reached.\n\n".to_string()
        }
        Some(TerminationReason::Cancelled) => "Search cancelled.\n\n".to_string(),
        Some(TerminationReason::FrontierInvariantViolation) => {
            "Search stopped: strategy frontier is inconsistent.\n\n".to_string()
        }
        Some(TerminationReason::GoalReached) | None => String::new(),
        Some(TerminationReason::FrontierExhausted) => render_no_more(found),
    }
}

/// Search repeatedly, rendering every solution until `search()` returns
/// `None`, then the trailer matching why it stopped.
pub fn render_solutions(engine: &mut SearchEngine<'_>) -> String {
    let graph = engine.graph();
    let mut out = String::new();
    let mut found = 0;
    while let Some(mut path) = engine.search() {
        found += 1;
        out.push_str(&render_solution(graph, &mut path, found));
    }
    out.push_str(&render_trailer(found, engine.last_termination()));
    out
}

/// Render directionality, then the descendant and ancestor trees of every
/// vertex.
pub fn render_info(graph: &mut Graph) -> String {
    let kind = if graph.is_digraph() {
        "digraph"
    } else {
        "undirected graph"
    };
    let mut out = format!("Graph:\n- is a {kind}.\n\n");
    let ids: Vec<VertexId> = graph.vertices().map(|(id, _)| id).collect();

    out.push_str("Lineage:\n");
    for &id in &ids {
        graph.clear_visited();
        out.push_str(&descendants(graph, id));
        out.push('\n');
    }

    out.push_str("\nAncestors:\n");
    for &id in &ids {
        graph.clear_visited();
        out.push_str(&heritage(graph, id));
        out.push('\n');
    }
    graph.clear_visited();
    out
}

fn descendants(graph: &mut Graph, id: VertexId) -> String {
    let Some(vertex) = graph.vertex(id) else {
        return String::new();
    };
    let mut line = format!("({})\n", vertex.label());
    let children = vertex.children().to_vec();
    graph.set_visited(id, true);

    for child in children {
        if graph.vertex(child).is_some_and(|v| v.visited()) {
            continue;
        }
        graph.set_visited(child, true);
        line.push_str("|- ancestor of -> ");
        line.push_str(&descendants(graph, child));
    }
    line
}

fn heritage(graph: &mut Graph, id: VertexId) -> String {
    let Some(vertex) = graph.vertex(id) else {
        return String::new();
    };
    let mut line = format!("({})\n", vertex.label());
    let parents = vertex.parents().to_vec();
    graph.set_visited(id, true);

    for parent in parents {
        if graph.vertex(parent).is_some_and(|v| v.visited()) {
            continue;
        }
        line.push_str("|- descendant of -> ");
        line.push_str(&heritage(graph, parent));
    }
    line
}
