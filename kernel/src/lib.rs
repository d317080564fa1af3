//! Waypoint Kernel: the graph model searched by `waypoint_search`.
//!
//! # API Surface
//!
//! - [`graph::Graph`] -- arena owning vertices and edges, built by the caller
//! - [`vertex::Vertex`] -- labelled state with idempotent children/parents sets
//! - [`edge::Edge`] -- weighted transition whose endpoints are fixed at construction
//! - [`path::Path`] -- edge sequence with cumulative cost and a replay cursor
//!
//! # Module Dependency Direction
//!
//! `vertex` ← `graph` (+ `edge`) ← `path`
//!
//! `graph` and `edge` are mutually aware: only the graph constructs linked
//! edges, and edges resolve labels through the graph for diagnostics. The
//! kernel holds no search logic.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod edge;
pub mod error;
pub mod graph;
pub mod path;
pub mod vertex;

pub use edge::{Edge, EdgeConfig};
pub use error::GraphError;
pub use graph::{EdgeId, Graph};
pub use path::Path;
pub use vertex::{Vertex, VertexId};
