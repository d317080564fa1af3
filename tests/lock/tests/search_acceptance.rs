//! Search engine acceptance lock tests.
//!
//! Proves:
//! 1. The four-vertex scenario under every built-in strategy
//! 2. An engine with no starting vertices finds nothing
//! 3. Re-entrant enumeration yields distinct solutions, then `None` forever
//! 4. Every returned path ends at a vertex satisfying the goal
//! 5. Path copies are independent of their source
//! 6. Adjacency insertion is idempotent
//! 7. Budgets and cancellation stop a call without losing the frontier
//! 8. Caller-supplied strategies plug in through the same contract

use std::collections::VecDeque;
use std::sync::Arc;

use waypoint_harness::worlds::{flight_paths, four_vertex};
use waypoint_kernel::{Edge, EdgeConfig, Graph, Path, Vertex};
use waypoint_search::{
    label_equals, CancelToken, SearchEngine, SearchError, SearchPolicy, Strategy, StrategyKind,
    TerminationReason,
};

fn labels(graph: &Graph, path: &Path) -> Vec<String> {
    path.vertex_labels(graph)
        .into_iter()
        .map(String::from)
        .collect()
}

fn engine_from_a(graph: &Graph, kind: StrategyKind) -> SearchEngine<'_> {
    SearchEngine::builder(graph)
        .starting_vertex(graph.vertex_id("A").unwrap())
        .goal(label_equals("D"))
        .strategy(kind)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: FOUR-VERTEX-SCENARIO
// ---------------------------------------------------------------------------

#[test]
fn depth_first_reaches_d() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = engine_from_a(&graph, StrategyKind::DepthFirst);
    let path = engine.search().expect("a path to D exists");
    assert_eq!(labels(&graph, &path), ["A", "C", "D"]);
    assert_eq!(engine.last_termination(), Some(TerminationReason::GoalReached));
}

#[test]
fn breadth_first_reaches_d_in_fewest_edges() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = engine_from_a(&graph, StrategyKind::BreadthFirst);
    let path = engine.search().expect("a path to D exists");
    assert_eq!(labels(&graph, &path), ["A", "C", "D"]);
    assert_eq!(path.transitions(), 2);
}

#[test]
fn lowest_cost_first_prefers_cheaper_route() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = engine_from_a(&graph, StrategyKind::LowestCostFirst);

    let first = engine.search().unwrap();
    assert_eq!(labels(&graph, &first), ["A", "C", "D"]);
    assert!((first.cost() - 6.0).abs() < 1e-9, "cost {}", first.cost());

    let second = engine.search().unwrap();
    assert_eq!(labels(&graph, &second), ["A", "B", "C", "D"]);
    assert!((second.cost() - 6.8).abs() < 1e-9, "cost {}", second.cost());
    assert!(first.cost() < second.cost());
}

#[test]
fn digraph_flag_is_derived_from_edges() {
    let graph = four_vertex::graph().unwrap();
    assert!(!engine_from_a(&graph, StrategyKind::DepthFirst).is_digraph());

    let flights = flight_paths::graph().unwrap();
    let engine = SearchEngine::builder(&flights)
        .goal(label_equals(flight_paths::GOLD_COAST))
        .build()
        .unwrap();
    assert!(engine.is_digraph());
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: EMPTY-START
// ---------------------------------------------------------------------------

#[test]
fn no_starting_vertices_finds_nothing() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = SearchEngine::builder(&graph)
        .goal(label_equals("D"))
        .build()
        .unwrap();
    assert_eq!(engine.frontier_len(), 0);
    assert!(engine.search().is_none());
    assert_eq!(
        engine.last_termination(),
        Some(TerminationReason::FrontierExhausted)
    );
}

#[test]
fn missing_goal_fails_at_construction() {
    let graph = four_vertex::graph().unwrap();
    let err = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id("A").unwrap())
        .build()
        .err();
    assert_eq!(err, Some(SearchError::MissingGoal));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: RE-ENTRANT-ENUMERATION
// ---------------------------------------------------------------------------

#[test]
fn repeated_search_enumerates_distinct_solutions() {
    for kind in [
        StrategyKind::DepthFirst,
        StrategyKind::BreadthFirst,
        StrategyKind::LowestCostFirst,
    ] {
        let graph = four_vertex::graph().unwrap();
        let mut engine = engine_from_a(&graph, kind);
        let mut seen: Vec<Vec<String>> = Vec::new();
        while let Some(path) = engine.search() {
            let route = labels(&graph, &path);
            assert!(!seen.contains(&route), "{kind:?} repeated {route:?}");
            seen.push(route);
        }
        assert_eq!(seen.len(), 2, "{kind:?} found {seen:?}");
        assert!(engine.search().is_none(), "exhausted engine stays exhausted");
        assert!(engine.search().is_none());
    }
}

#[test]
fn engine_iterates_over_solutions() {
    let graph = flight_paths::graph().unwrap();
    let engine = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id(flight_paths::CHRISTCHURCH).unwrap())
        .goal(label_equals(flight_paths::GOLD_COAST))
        .strategy(StrategyKind::BreadthFirst)
        .build()
        .unwrap();
    let legs: Vec<usize> = engine.map(|path| path.transitions()).collect();
    assert_eq!(legs, [1, 2, 2, 3]);
}

#[test]
fn seeds_are_expanded_in_given_order() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = SearchEngine::builder(&graph)
        .starting_vertices([graph.vertex_id("B").unwrap(), graph.vertex_id("A").unwrap()])
        .goal(label_equals("D"))
        .strategy(StrategyKind::BreadthFirst)
        .build()
        .unwrap();
    assert_eq!(engine.frontier_len(), 2);
    let first = engine.search().unwrap();
    assert_eq!(labels(&graph, &first), ["B", "C", "D"]);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: GOAL-SATISFACTION
// ---------------------------------------------------------------------------

#[test]
fn returned_paths_end_at_goal_vertices() {
    let graph = flight_paths::graph().unwrap();
    let is_goal =
        |v: &Vertex| v.label() == flight_paths::GOLD_COAST || v.label() == flight_paths::AUCKLAND;
    let mut engine = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id(flight_paths::CHRISTCHURCH).unwrap())
        .goal(is_goal)
        .strategy(StrategyKind::DepthFirst)
        .build()
        .unwrap();

    let mut found = 0;
    while let Some(path) = engine.search() {
        let tip = path.last().map(|edge| edge.head()).unwrap();
        assert!(is_goal(graph.vertex(tip).unwrap()));
        assert_eq!(path.tip(), Some(tip));
        found += 1;
    }
    assert!(found > 0);
    assert_eq!(engine.stats().solutions, found);
}

#[test]
fn start_vertex_satisfying_goal_is_a_solution() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id("D").unwrap())
        .goal(label_equals("D"))
        .build()
        .unwrap();
    let path = engine.search().unwrap();
    assert_eq!(path.len(), 1);
    assert!(path.edges()[0].is_start());
    assert!(path.cost().abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: PATH-COPY-INDEPENDENCE
// ---------------------------------------------------------------------------

#[test]
fn appending_to_a_copy_leaves_the_original_alone() {
    let graph = four_vertex::graph().unwrap();
    let a = graph.vertex_id("A").unwrap();
    let mut engine = engine_from_a(&graph, StrategyKind::LowestCostFirst);
    let original = engine.search().unwrap();
    let before_len = original.len();
    let before_cost = original.cost();

    let mut copy = original.clone();
    copy.append(Arc::new(Edge::start(a)));
    assert_eq!(copy.len(), before_len + 1);
    assert_eq!(original.len(), before_len);
    assert!((original.cost() - before_cost).abs() < 1e-12);

    let mut source = original.clone();
    let snapshot = source.clone();
    source.append(Arc::clone(&graph.edges()[0]));
    assert_eq!(snapshot.len(), before_len);
    assert!((snapshot.cost() - before_cost).abs() < 1e-12);
    assert!((source.cost() - (before_cost + 1.0)).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: IDEMPOTENT-ADJACENCY
// ---------------------------------------------------------------------------

#[test]
fn duplicate_links_record_one_child_and_parent() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a").unwrap();
    let b = graph.add_vertex("b").unwrap();
    graph.add_edge(a, b, EdgeConfig::default()).unwrap();
    graph.add_edge(a, b, EdgeConfig::default().with_cost(2.0)).unwrap();

    assert_eq!(graph.vertex(a).unwrap().children(), [b]);
    assert_eq!(graph.vertex(b).unwrap().parents(), [a]);
    assert_eq!(graph.edge_count(), 2, "parallel edges are kept");
    assert_eq!(graph.outgoing(a).count(), 2);

    let mut vertex = Vertex::new("x");
    assert!(vertex.add_child(b));
    assert!(!vertex.add_child(b));
    assert_eq!(vertex.children().len(), 1);
}

#[test]
fn undirected_edge_links_both_ways_but_expands_from_tail() {
    let graph = four_vertex::graph().unwrap();
    let c = graph.vertex_id("C").unwrap();
    let d = graph.vertex_id("D").unwrap();
    assert!(graph.vertex(d).unwrap().children().contains(&c));
    assert!(graph.vertex(c).unwrap().parents().contains(&d));
    assert_eq!(graph.outgoing(d).count(), 0);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: BUDGET-AND-CANCEL
// ---------------------------------------------------------------------------

#[test]
fn expansion_budget_stops_and_resumes() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id("A").unwrap())
        .goal(label_equals("D"))
        .policy(SearchPolicy::default().with_max_expansions(2))
        .build()
        .unwrap();

    assert!(engine.search().is_none());
    let reason = engine.last_termination().unwrap();
    assert_eq!(reason, TerminationReason::ExpansionBudgetExceeded);
    assert!(reason.is_resumable());
    assert!(engine.frontier_len() > 0);

    let path = engine.search().expect("budget is per call");
    assert_eq!(labels(&graph, &path), ["A", "C", "D"]);
}

#[test]
fn cancelled_search_keeps_its_frontier() {
    let graph = four_vertex::graph().unwrap();
    let token = CancelToken::new();
    token.cancel();
    let mut engine = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id("A").unwrap())
        .goal(label_equals("D"))
        .policy(SearchPolicy::default().with_cancel(token.clone()))
        .build()
        .unwrap();

    assert!(engine.search().is_none());
    assert_eq!(engine.last_termination(), Some(TerminationReason::Cancelled));
    assert_eq!(engine.frontier_len(), 1);

    token.reset();
    assert!(engine.search().is_some());
}

#[test]
fn zero_budget_is_rejected() {
    let graph = four_vertex::graph().unwrap();
    let result = SearchEngine::builder(&graph)
        .goal(label_equals("D"))
        .policy(SearchPolicy::default().with_max_expansions(0))
        .build();
    assert!(matches!(result, Err(SearchError::InvalidPolicy { .. })));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: CUSTOM-STRATEGY
// ---------------------------------------------------------------------------

/// Expands the longest path first; FIFO among equal lengths.
#[derive(Default)]
struct LongestFirst {
    paths: VecDeque<Path>,
}

impl Strategy for LongestFirst {
    fn len(&self) -> usize {
        self.paths.len()
    }

    fn add(&mut self, path: Path) {
        let at = self
            .paths
            .iter()
            .position(|held| held.len() < path.len())
            .unwrap_or(self.paths.len());
        self.paths.insert(at, path);
    }

    fn next(&mut self) -> Option<Path> {
        self.paths.pop_front()
    }
}

#[test]
fn caller_strategy_drives_the_same_loop() {
    let graph = four_vertex::graph().unwrap();
    let mut engine = SearchEngine::builder(&graph)
        .starting_vertex(graph.vertex_id("A").unwrap())
        .goal(label_equals("D"))
        .custom_strategy(LongestFirst::default())
        .build()
        .unwrap();

    let first = engine.search().unwrap();
    assert_eq!(labels(&graph, &first), ["A", "B", "C", "D"]);
    let second = engine.search().unwrap();
    assert_eq!(labels(&graph, &second), ["A", "C", "D"]);
    assert!(engine.search().is_none());
}

#[test]
fn non_empty_caller_strategy_is_rejected() {
    let graph = four_vertex::graph().unwrap();
    let mut primed = LongestFirst::default();
    primed.add(Path::from_edge(Arc::new(Edge::start(graph.vertex_id("A").unwrap()))));
    let result = SearchEngine::builder(&graph)
        .goal(label_equals("D"))
        .custom_strategy(primed)
        .build();
    assert!(matches!(
        result,
        Err(SearchError::InconsistentStrategy { .. })
    ));
}
