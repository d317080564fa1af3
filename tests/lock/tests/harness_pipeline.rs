//! Harness pipeline lock tests: document → graph → engine → text.
//!
//! Proves:
//! 1. A loaded document searches identically to the same graph built in code
//! 2. Document worlds run through `run_world` with config overrides
//! 3. Solution and info listings keep their exact text format
//! 4. Run trailers distinguish exhaustion from budget stops

use std::io::Write;

use waypoint_harness::config::RunConfig;
use waypoint_harness::contract::SearchWorld;
use waypoint_harness::loader::{load_graph_file, load_graph_str, GraphDocument, LoadError};
use waypoint_harness::render::{render_info, render_solutions};
use waypoint_harness::runner::run_world;
use waypoint_harness::worlds::flight_paths::FlightPaths;
use waypoint_harness::worlds::four_vertex::{self, FourVertex};
use waypoint_harness::worlds::mailbot;
use waypoint_search::{label_equals, SearchEngine, StrategyKind, TerminationReason};

const FOUR_VERTEX_DOC: &str = r#"{
    "vertices": [{"label": "A"}, {"label": "B"}, {"label": "C"}, {"label": "D"}],
    "edges": [
        {"v1": "A", "v2": "B", "cost": 1},
        {"v1": "A", "v2": "C", "cost": 1.2},
        {"v1": "B", "v2": "C", "cost": 1},
        {"v1": "C", "v2": "D", "cost": 4.8, "directed": false}
    ],
    "start": ["A"],
    "goal": "D"
}"#;

fn listing(graph: &waypoint_kernel::Graph, kind: StrategyKind) -> String {
    let mut engine = SearchEngine::builder(graph)
        .starting_vertex(graph.vertex_id("A").unwrap())
        .goal(label_equals("D"))
        .strategy(kind)
        .build()
        .unwrap();
    render_solutions(&mut engine)
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: LOADER-PARITY
// ---------------------------------------------------------------------------

#[test]
fn loaded_document_matches_built_graph() {
    let loaded = load_graph_str(FOUR_VERTEX_DOC).unwrap();
    let built = four_vertex::graph().unwrap();
    for kind in [
        StrategyKind::DepthFirst,
        StrategyKind::BreadthFirst,
        StrategyKind::LowestCostFirst,
    ] {
        assert_eq!(listing(&loaded, kind), listing(&built, kind), "{kind:?}");
    }
}

#[test]
fn document_on_disk_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FOUR_VERTEX_DOC.as_bytes()).unwrap();
    let graph = load_graph_file(file.path()).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert!(!graph.is_digraph());
}

#[test]
fn negative_cost_is_rejected_at_load() {
    let text = r#"{
        "vertices": [{"label": "a"}, {"label": "b"}],
        "edges": [{"v1": "a", "v2": "b", "cost": -1}]
    }"#;
    assert!(matches!(load_graph_str(text), Err(LoadError::World(_))));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: DOCUMENT-WORLD-RUN
// ---------------------------------------------------------------------------

#[test]
fn document_world_runs_like_builtin_world() {
    let world = GraphDocument::from_json_str(FOUR_VERTEX_DOC)
        .unwrap()
        .into_world("doc_four_vertex")
        .unwrap();
    let config = RunConfig::from_json_str(r#"{"strategy": "lowest_cost_first"}"#).unwrap();

    let from_doc = run_world(&world, &config).unwrap();
    let builtin = run_world(&FourVertex, &config).unwrap();
    assert_eq!(from_doc.world_id, world.world_id());
    assert_eq!(from_doc.solutions, builtin.solutions);
    assert_eq!(from_doc.render_text(), builtin.render_text());
}

#[test]
fn expansion_budget_from_config_stops_run() {
    let config = RunConfig::from_json_str(r#"{"max_expansions": 1}"#).unwrap();
    let report = run_world(&FourVertex, &config).unwrap();
    assert!(report.solutions.is_empty());
    assert_eq!(
        report.termination,
        Some(TerminationReason::ExpansionBudgetExceeded)
    );
    assert_eq!(
        report.render_text(),
        "Search stopped: expansion budget reached.\n\n"
    );
}

#[test]
fn budget_stop_after_a_solution_keeps_remaining_routes() {
    let config =
        RunConfig::from_json_str(r#"{"strategy": "breadth_first", "max_expansions": 2}"#).unwrap();
    let report = run_world(&FlightPaths, &config).unwrap();
    assert_eq!(report.solutions.len(), 1);
    assert!(report
        .termination
        .is_some_and(TerminationReason::is_resumable));
    let text = report.render_text();
    assert!(text.starts_with("Solution 1:\n"));
    assert!(!text.contains("No more solutions found!"), "{text}");
}

#[test]
fn zero_max_solutions_runs_no_search() {
    let config = RunConfig::from_json_str(r#"{"max_solutions": 0}"#).unwrap();
    let report = run_world(&FourVertex, &config).unwrap();
    assert!(report.solutions.is_empty());
    assert!(report.truncated);
    assert_eq!(report.paths_added, 1, "only the seed");
}

#[test]
fn mailbot_rooms_world_delivers_by_cost() {
    let world = mailbot::world().unwrap();
    let config = RunConfig::default().with_strategy(StrategyKind::LowestCostFirst);
    let report = run_world(&world, &config).unwrap();
    let costs: Vec<f64> = report.solutions.iter().map(|s| s.cost).collect();
    assert_eq!(costs, [41.0, 47.0, 53.0]);
    assert_eq!(
        report.solutions[0].vertices,
        ["o103", "o109", "o119", "o123", "r123"]
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: TEXT-FORMAT
// ---------------------------------------------------------------------------

#[test]
fn lowest_cost_listing_is_exact() {
    let graph = four_vertex::graph().unwrap();
    assert_eq!(
        listing(&graph, StrategyKind::LowestCostFirst),
        "Solution 1:\n\
         - start\n\
         - (A) -(1.2)-> (C)\n\
         - (C) <-(4.8)-> (D)\n\
         \n\
         Solution 2:\n\
         - start\n\
         - (A) -(1.0)-> (B)\n\
         - (B) -(1.0)-> (C)\n\
         - (C) <-(4.8)-> (D)\n\
         \n\
         No more solutions found!\n\n"
    );
}

#[test]
fn info_listing_is_exact() {
    let mut graph = four_vertex::graph().unwrap();
    assert_eq!(
        render_info(&mut graph),
        "Graph:\n- is a undirected graph.\n\n\
         Lineage:\n\
         (A)\n|- ancestor of -> (B)\n|- ancestor of -> (C)\n|- ancestor of -> (D)\n\n\
         (B)\n|- ancestor of -> (C)\n|- ancestor of -> (D)\n\n\
         (C)\n|- ancestor of -> (D)\n\n\
         (D)\n|- ancestor of -> (C)\n\n\
         \nAncestors:\n\
         (A)\n\n\
         (B)\n|- descendant of -> (A)\n\n\
         (C)\n|- descendant of -> (A)\n|- descendant of -> (B)\n|- descendant of -> (D)\n\n\
         (D)\n|- descendant of -> (C)\n|- descendant of -> (A)\n|- descendant of -> (B)\n\n"
    );
}
