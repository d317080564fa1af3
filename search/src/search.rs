//! Search engine: seeding, expansion loop and re-entrant enumeration.

use std::sync::Arc;

use waypoint_kernel::{Edge, Graph, Path, VertexId};

use crate::contract::{GoalPredicate, SearchObserver, Strategy};
use crate::error::SearchError;
use crate::events::{SearchEvent, TerminationReason};
use crate::frontier::StrategyKind;
use crate::policy::SearchPolicy;

/// Cumulative counters across every `search()` call on one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths popped from the frontier.
    pub expansions: u64,
    /// Paths added to the frontier, including seeds.
    pub paths_added: u64,
    /// Goal paths returned.
    pub solutions: u64,
}

/// Tree search over a caller-owned [`Graph`].
///
/// The engine borrows the graph for its whole lifetime, so vertex adjacency
/// cannot change while a search is in progress. Each call to
/// [`SearchEngine::search`] resumes from the frontier left behind by the
/// previous call.
pub struct SearchEngine<'g> {
    graph: &'g Graph,
    starting_vertices: Vec<VertexId>,
    goal: Box<dyn GoalPredicate + 'g>,
    frontier: Box<dyn Strategy + 'g>,
    digraph: bool,
    policy: SearchPolicy,
    observer: Option<Box<dyn SearchObserver + 'g>>,
    stats: SearchStats,
    last_termination: Option<TerminationReason>,
}

impl<'g> SearchEngine<'g> {
    /// Start configuring an engine over `graph`.
    #[must_use]
    pub fn builder(graph: &'g Graph) -> SearchEngineBuilder<'g> {
        SearchEngineBuilder::new(graph)
    }

    /// Find the next path whose tip satisfies the goal.
    ///
    /// Returns `None` when the frontier is exhausted, or when the call was
    /// stopped by the policy's budget or cancel token. Inspect
    /// [`SearchEngine::last_termination`] to tell these apart.
    pub fn search(&mut self) -> Option<Path> {
        let graph = self.graph;
        let mut expansions: u64 = 0;

        let reason = loop {
            if self.policy.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
                break TerminationReason::Cancelled;
            }
            if self
                .policy
                .max_expansions
                .is_some_and(|max| expansions >= max)
            {
                break TerminationReason::ExpansionBudgetExceeded;
            }

            let reported = self.frontier.len();
            let Some(path) = self.frontier.next() else {
                break if reported == 0 {
                    TerminationReason::FrontierExhausted
                } else {
                    TerminationReason::FrontierInvariantViolation
                };
            };
            expansions += 1;
            self.stats.expansions += 1;
            tracing::trace!(action = "-", cost = path.cost(), edges = path.len(), "path removed");
            self.emit(&SearchEvent::PathRemoved { path: &path });

            let Some((tip, vertex)) = path
                .tip()
                .and_then(|tip| graph.vertex(tip).map(|v| (tip, v)))
            else {
                break TerminationReason::FrontierInvariantViolation;
            };

            if self.goal.is_goal(vertex) {
                self.stats.solutions += 1;
                self.emit(&SearchEvent::GoalReached { path: &path });
                self.finish(TerminationReason::GoalReached, expansions);
                return Some(path);
            }

            for edge in graph.outgoing(tip) {
                let mut extended = path.clone();
                extended.append(Arc::clone(edge));
                self.push(extended);
            }
        };

        self.finish(reason, expansions);
        None
    }

    fn push(&mut self, path: Path) {
        tracing::trace!(action = "+", cost = path.cost(), edges = path.len(), "path added");
        self.emit(&SearchEvent::PathAdded { path: &path });
        self.stats.paths_added += 1;
        self.frontier.add(path);
    }

    fn emit(&mut self, event: &SearchEvent<'_>) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(self.graph, event);
        }
    }

    fn finish(&mut self, reason: TerminationReason, expansions: u64) {
        tracing::debug!(
            reason = ?reason,
            expansions,
            frontier = self.frontier.len(),
            "search call finished"
        );
        self.emit(&SearchEvent::Terminated { reason, expansions });
        self.last_termination = Some(reason);
    }

    /// Why the most recent `search()` call returned; `None` before the first.
    #[must_use]
    pub fn last_termination(&self) -> Option<TerminationReason> {
        self.last_termination
    }

    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    #[must_use]
    pub fn starting_vertices(&self) -> &[VertexId] {
        &self.starting_vertices
    }

    /// `true` iff every edge in the graph is directed.
    #[must_use]
    pub fn is_digraph(&self) -> bool {
        self.digraph
    }

    /// Number of paths waiting in the frontier.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Replace the policy used by subsequent `search()` calls.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation;
    /// the previous policy stays in effect.
    pub fn set_policy(&mut self, policy: SearchPolicy) -> Result<(), SearchError> {
        policy.validate()?;
        self.policy = policy;
        Ok(())
    }
}

impl Iterator for SearchEngine<'_> {
    type Item = Path;

    /// Successive solutions; ends at the first call returning `None`.
    fn next(&mut self) -> Option<Path> {
        self.search()
    }
}

/// Configuration for a [`SearchEngine`].
///
/// Defaults: no starting vertices, depth-first strategy, unbounded policy,
/// no observer. A goal is required.
pub struct SearchEngineBuilder<'g> {
    graph: &'g Graph,
    starting_vertices: Vec<VertexId>,
    goal: Option<Box<dyn GoalPredicate + 'g>>,
    strategy: Option<Box<dyn Strategy + 'g>>,
    kind: StrategyKind,
    policy: SearchPolicy,
    observer: Option<Box<dyn SearchObserver + 'g>>,
}

impl<'g> SearchEngineBuilder<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            starting_vertices: Vec::new(),
            goal: None,
            strategy: None,
            kind: StrategyKind::default(),
            policy: SearchPolicy::default(),
            observer: None,
        }
    }

    #[must_use]
    pub fn starting_vertex(mut self, vertex: VertexId) -> Self {
        self.starting_vertices.push(vertex);
        self
    }

    #[must_use]
    pub fn starting_vertices(mut self, vertices: impl IntoIterator<Item = VertexId>) -> Self {
        self.starting_vertices.extend(vertices);
        self
    }

    #[must_use]
    pub fn goal(mut self, goal: impl GoalPredicate + 'g) -> Self {
        self.goal = Some(Box::new(goal));
        self
    }

    /// Use one of the built-in strategies. Overrides a custom strategy.
    #[must_use]
    pub fn strategy(mut self, kind: StrategyKind) -> Self {
        self.kind = kind;
        self.strategy = None;
        self
    }

    /// Use a caller-supplied strategy. It must be empty.
    #[must_use]
    pub fn custom_strategy(mut self, strategy: impl Strategy + 'g) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: impl SearchObserver + 'g) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Validate the configuration and seed the frontier with one
    /// start-edge path per starting vertex, in the order given.
    ///
    /// # Errors
    ///
    /// - [`SearchError::MissingGoal`] if no goal was supplied.
    /// - [`SearchError::UnknownStartingVertex`] for a handle outside the graph.
    /// - [`SearchError::InvalidPolicy`] if the policy fails validation.
    /// - [`SearchError::InconsistentStrategy`] if a custom strategy is not
    ///   empty, or its `len()` does not grow by one per `add()`.
    pub fn build(self) -> Result<SearchEngine<'g>, SearchError> {
        let goal = self.goal.ok_or(SearchError::MissingGoal)?;
        self.policy.validate()?;
        if let Some(bad) = self
            .starting_vertices
            .iter()
            .find(|v| self.graph.vertex(**v).is_none())
        {
            return Err(SearchError::UnknownStartingVertex { index: bad.index() });
        }

        let frontier = self.strategy.unwrap_or_else(|| self.kind.build());
        if !frontier.is_empty() {
            return Err(SearchError::InconsistentStrategy {
                detail: format!("strategy already holds {} paths", frontier.len()),
            });
        }

        let digraph = self.graph.is_digraph();
        let mut engine = SearchEngine {
            graph: self.graph,
            starting_vertices: self.starting_vertices,
            goal,
            frontier,
            digraph,
            policy: self.policy,
            observer: self.observer,
            stats: SearchStats::default(),
            last_termination: None,
        };
        engine.preprocess()?;
        Ok(engine)
    }
}

impl SearchEngine<'_> {
    fn preprocess(&mut self) -> Result<(), SearchError> {
        let starts = self.starting_vertices.clone();
        for start in starts {
            let before = self.frontier.len();
            self.push(Path::from_edge(Arc::new(Edge::start(start))));
            let after = self.frontier.len();
            if after != before + 1 {
                return Err(SearchError::InconsistentStrategy {
                    detail: format!("len() went from {before} to {after} after one add()"),
                });
            }
        }
        tracing::debug!(
            seeds = self.starting_vertices.len(),
            digraph = self.digraph,
            "search engine seeded"
        );
        Ok(())
    }
}
