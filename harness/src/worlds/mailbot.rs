//! `mailbot`: a delivery robot routing between rooms of an office floor.
//!
//! The floor plan ships as a graph document, so this world runs through the
//! loader and [`DocumentWorld`]. From `o103` three routes reach `r123`,
//! costing 41, 47 and 53.

use crate::loader::{DocumentWorld, GraphDocument, LoadError};

/// The floor plan: directed corridors with walking distances.
pub const DOCUMENT: &str = r#"{
    "vertices": [
        {"label": "mail"}, {"label": "ts"}, {"label": "o103"}, {"label": "b3"},
        {"label": "b1"}, {"label": "c2"}, {"label": "c1"}, {"label": "c3"},
        {"label": "b2"}, {"label": "b4"}, {"label": "o109"}, {"label": "o111"},
        {"label": "o119"}, {"label": "storage"}, {"label": "o123"},
        {"label": "r123"}, {"label": "o125"}
    ],
    "edges": [
        {"v1": "o103", "v2": "ts", "cost": 8},
        {"v1": "o103", "v2": "b3", "cost": 4},
        {"v1": "o103", "v2": "o109", "cost": 12},
        {"v1": "ts", "v2": "mail", "cost": 6},
        {"v1": "b3", "v2": "b1", "cost": 4},
        {"v1": "b3", "v2": "b4", "cost": 7},
        {"v1": "b1", "v2": "c2", "cost": 3},
        {"v1": "b1", "v2": "b2", "cost": 6},
        {"v1": "c2", "v2": "c3", "cost": 6},
        {"v1": "c2", "v2": "c1", "cost": 4},
        {"v1": "c1", "v2": "c3", "cost": 8},
        {"v1": "b2", "v2": "b4", "cost": 3},
        {"v1": "b4", "v2": "o109", "cost": 7},
        {"v1": "o109", "v2": "o111", "cost": 4},
        {"v1": "o109", "v2": "o119", "cost": 16},
        {"v1": "o119", "v2": "storage", "cost": 7},
        {"v1": "o119", "v2": "o123", "cost": 9},
        {"v1": "o123", "v2": "r123", "cost": 4},
        {"v1": "o123", "v2": "o125", "cost": 4}
    ],
    "start": ["o103"],
    "goal": "r123"
}"#;

/// Parse [`DOCUMENT`] into a runnable world.
///
/// # Errors
///
/// Returns [`LoadError`] if the embedded document fails to parse.
pub fn world() -> Result<DocumentWorld, LoadError> {
    GraphDocument::from_json_str(DOCUMENT)?.into_world("mailbot")
}
