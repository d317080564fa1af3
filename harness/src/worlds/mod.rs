//! Bundled worlds for the harness runner.

pub mod flight_paths;
pub mod four_vertex;
pub mod mailbot;
