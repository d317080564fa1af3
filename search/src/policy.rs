//! Search policy types.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SearchError;

/// Per-call budget and cancellation configuration.
///
/// The default policy is unbounded: a `search()` call runs until a goal is
/// found or the frontier empties.
#[derive(Debug, Clone, Default)]
pub struct SearchPolicy {
    /// Cap on frontier pops within a single `search()` call.
    pub max_expansions: Option<u64>,
    /// Checked once per frontier pop.
    pub cancel: Option<CancelToken>,
}

impl SearchPolicy {
    /// Validate option ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero,
    /// which would make every call terminate without looking at the frontier.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Shared cancellation flag.
///
/// Clones observe the same flag, so a token handed to an engine can be
/// tripped from elsewhere (including another thread).
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clear the flag so the engine can be resumed.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
