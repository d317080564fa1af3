//! Structured event stream and the bundled `EventLog` observer.
//!
//! The engine reports every frontier mutation as a [`SearchEvent`]. Events
//! borrow the path involved; observers that need to keep them convert to
//! owned [`EventRecord`]s.

use serde::Serialize;
use sha2::{Digest, Sha256};
use waypoint_kernel::{Graph, Path};

use crate::contract::SearchObserver;

/// Why a `search()` call returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A popped path's tip satisfied the goal; the path was returned.
    GoalReached,
    /// The frontier emptied without finding a goal.
    FrontierExhausted,
    /// `SearchPolicy::max_expansions` pops happened in this call.
    ExpansionBudgetExceeded,
    /// The policy's cancel token was set.
    Cancelled,
    /// The strategy reported paths but returned none, or returned a path
    /// whose tip is not in the graph.
    FrontierInvariantViolation,
}

impl TerminationReason {
    /// `true` if calling `search()` again may still produce a solution.
    #[must_use]
    pub fn is_resumable(self) -> bool {
        matches!(
            self,
            Self::GoalReached | Self::ExpansionBudgetExceeded | Self::Cancelled
        )
    }
}

/// A single engine event.
#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    /// A path was added to the frontier (seeding or expansion).
    PathAdded { path: &'a Path },
    /// A path was popped from the frontier.
    PathRemoved { path: &'a Path },
    /// The popped path satisfies the goal and is being returned.
    GoalReached { path: &'a Path },
    /// A `search()` call ended.
    Terminated {
        reason: TerminationReason,
        expansions: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PathAdded,
    PathRemoved,
    GoalReached,
    Terminated,
}

/// Owned form of a [`SearchEvent`], with vertices resolved to labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Position in the log.
    pub order: u64,
    pub kind: EventKind,
    /// Labels along the path; empty for `Terminated`.
    pub vertices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<TerminationReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansions: Option<u64>,
}

/// Observer that records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Records of one kind, in order.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &EventRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The log as a JSON array value.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if a record fails to serialize.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.records)
    }

    /// Compact JSON bytes. Object keys are emitted in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if a record fails to serialize.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value()?)
    }

    /// `sha256:<hex>` digest of [`EventLog::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if a record fails to serialize.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_json_bytes()?;
        Ok(format!("sha256:{}", hex::encode(Sha256::digest(&bytes))))
    }

    fn push_path(&mut self, graph: &Graph, kind: EventKind, path: &Path) {
        let vertices = path
            .vertex_labels(graph)
            .into_iter()
            .map(String::from)
            .collect();
        self.records.push(EventRecord {
            order: self.records.len() as u64,
            kind,
            vertices,
            cost: Some(path.cost()),
            reason: None,
            expansions: None,
        });
    }
}

impl SearchObserver for EventLog {
    fn on_event(&mut self, graph: &Graph, event: &SearchEvent<'_>) {
        match *event {
            SearchEvent::PathAdded { path } => self.push_path(graph, EventKind::PathAdded, path),
            SearchEvent::PathRemoved { path } => {
                self.push_path(graph, EventKind::PathRemoved, path);
            }
            SearchEvent::GoalReached { path } => {
                self.push_path(graph, EventKind::GoalReached, path);
            }
            SearchEvent::Terminated { reason, expansions } => {
                self.records.push(EventRecord {
                    order: self.records.len() as u64,
                    kind: EventKind::Terminated,
                    vertices: Vec::new(),
                    cost: None,
                    reason: Some(reason),
                    expansions: Some(expansions),
                });
            }
        }
    }
}
