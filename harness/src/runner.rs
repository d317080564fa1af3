//! Harness runner: enumerate a world's solutions under a [`RunConfig`].

use std::fmt::Write as _;

use serde::Serialize;
use waypoint_search::{label_equals, SearchEngine, SearchError, StrategyKind, TerminationReason};

use crate::config::RunConfig;
use crate::contract::{resolve_labels, SearchWorld, WorldError};
use crate::render::{edge_descriptors, render_trailer};

/// Error from a harness run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunError {
    /// The world could not produce valid search inputs.
    #[error("world setup failed: {0}")]
    World(#[from] WorldError),

    /// The engine rejected its configuration.
    #[error("search setup failed: {0}")]
    Search(#[from] SearchError),
}

/// One solution, resolved to labels and descriptors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    /// Vertex labels from start to goal.
    pub vertices: Vec<String>,
    /// Edge descriptors in order, including the start edge.
    pub steps: Vec<String>,
    pub cost: f64,
}

/// Outcome of a harness run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub world_id: String,
    pub strategy: StrategyKind,
    pub digraph: bool,
    pub solutions: Vec<SolutionSummary>,
    /// Why the last `search()` call returned.
    pub termination: Option<TerminationReason>,
    /// `true` if the run stopped because `max_solutions` was reached.
    pub truncated: bool,
    pub expansions: u64,
    pub paths_added: u64,
}

impl RunReport {
    /// Render the report in the solution-listing text format.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, solution) in self.solutions.iter().enumerate() {
            let _ = writeln!(out, "Solution {}:", i + 1);
            for step in &solution.steps {
                let _ = writeln!(out, "- {step}");
            }
            out.push('\n');
        }
        if !self.truncated {
            out.push_str(&render_trailer(self.solutions.len(), self.termination));
        }
        out
    }

    /// The report as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Run a world: build its graph, seed an engine and collect solutions until
/// the frontier is exhausted, a budget stops a call, or `max_solutions` is
/// reached.
///
/// # Errors
///
/// Returns [`RunError::World`] if the world's graph or labels are invalid
/// and [`RunError::Search`] if the engine rejects the configuration.
pub fn run_world(world: &dyn SearchWorld, config: &RunConfig) -> Result<RunReport, RunError> {
    let graph = world.graph()?;
    let starts = resolve_labels(&graph, &world.starting_labels())?;
    let goal_label = world.goal_label();
    if graph.vertex_id(&goal_label).is_none() {
        return Err(WorldError::UnknownLabel { label: goal_label }.into());
    }

    let mut engine = SearchEngine::builder(&graph)
        .starting_vertices(starts)
        .goal(label_equals(goal_label))
        .strategy(config.strategy)
        .policy(config.search_policy())
        .build()?;

    let mut solutions = Vec::new();
    let mut truncated = false;
    loop {
        if config.max_solutions.is_some_and(|max| solutions.len() >= max) {
            truncated = true;
            break;
        }
        let Some(mut path) = engine.search() else {
            break;
        };
        solutions.push(SolutionSummary {
            vertices: path
                .vertex_labels(&graph)
                .into_iter()
                .map(String::from)
                .collect(),
            steps: edge_descriptors(&graph, &mut path),
            cost: path.cost(),
        });
    }

    let stats = engine.stats();
    tracing::debug!(
        world = world.world_id(),
        strategy = config.strategy.as_str(),
        solutions = solutions.len(),
        expansions = stats.expansions,
        "world run finished"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        strategy: config.strategy,
        digraph: engine.is_digraph(),
        solutions,
        termination: engine.last_termination(),
        truncated,
        expansions: stats.expansions,
        paths_added: stats.paths_added,
    })
}
