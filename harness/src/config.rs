//! Run configuration for the harness runner.

use serde::{Deserialize, Serialize};
use waypoint_search::{SearchPolicy, StrategyKind};

/// Configuration that can override runner defaults.
///
/// Every field is optional in JSON; missing fields take the [`Default`]
/// value (depth-first, unbounded).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Frontier strategy.
    pub strategy: StrategyKind,
    /// Stop after this many solutions. `None` enumerates until exhaustion.
    pub max_solutions: Option<usize>,
    /// Per-`search()` expansion budget. `None` is unbounded.
    pub max_expansions: Option<u64>,
}

impl RunConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] for malformed JSON or unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// The engine policy this configuration implies.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.max_expansions,
            cancel: None,
        }
    }
}
