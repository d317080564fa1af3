//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only, returned while an
//! engine is being built. Runtime terminations (goal found, exhaustion,
//! budgets, cancellation) are expressed via
//! [`crate::events::TerminationReason`] and never fail a `search()` call.

/// Typed failure for engine construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No goal predicate was supplied.
    #[error("search engine requires a goal predicate")]
    MissingGoal,

    /// A starting vertex handle does not belong to the searched graph.
    #[error("unknown starting vertex handle: {index}")]
    UnknownStartingVertex { index: usize },

    /// A custom strategy's `len()` disagrees with what was added to it.
    #[error("inconsistent strategy: {detail}")]
    InconsistentStrategy { detail: String },

    /// A policy option is out of range.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
