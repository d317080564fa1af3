//! Waypoint Harness: collaborators around the search core.
//!
//! The harness loads graph documents, runs worlds through a
//! [`waypoint_search::SearchEngine`] under a [`config::RunConfig`], and
//! renders solutions and graph structure as text.
//!
//! The harness does NOT implement search; it delegates to `waypoint_search`.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod loader;
pub mod render;
pub mod runner;
pub mod worlds;
