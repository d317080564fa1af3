//! Waypoint Search: pluggable tree search over a `waypoint_kernel` graph.
//!
//! This crate provides the search layer. It depends only on
//! `waypoint_kernel`; it does NOT depend on `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (graph, paths)      (frontier, engine)   (loader, render, worlds)
//! ```
//!
//! # Key types
//!
//! - [`SearchEngine`] -- re-entrant expand-and-test loop over one frontier
//! - [`Strategy`] -- `len`/`add`/`next` frontier contract
//! - [`DepthFirst`], [`BreadthFirst`], [`LowestCostFirst`] -- built-in frontiers
//! - [`GoalPredicate`] -- vertex goal test (any `Fn(&Vertex) -> bool`)
//! - [`SearchObserver`] / [`EventLog`] -- structured event stream
//! - [`SearchPolicy`] -- per-call expansion budget and cancellation

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod events;
pub mod frontier;
pub mod goal;
pub mod policy;
pub mod search;

pub use contract::{GoalPredicate, SearchObserver, Strategy};
pub use error::SearchError;
pub use events::{EventKind, EventLog, EventRecord, SearchEvent, TerminationReason};
pub use frontier::{BreadthFirst, DepthFirst, LowestCostFirst, StrategyKind};
pub use goal::{label_equals, LabelEquals};
pub use policy::{CancelToken, SearchPolicy};
pub use search::{SearchEngine, SearchEngineBuilder, SearchStats};
