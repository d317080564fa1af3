//! Frontier strategies: stack, queue and cost-ordered heap.
//!
//! All three implement [`Strategy`] and are interchangeable. None of them
//! keeps a visited set; search is a tree search.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use serde::{Deserialize, Serialize};
use waypoint_kernel::Path;

use crate::contract::Strategy;

/// Selector for the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Last-in-first-out.
    #[default]
    DepthFirst,
    /// First-in-first-out.
    BreadthFirst,
    /// Minimum cumulative cost first.
    LowestCostFirst,
}

impl StrategyKind {
    /// Build an empty frontier of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            Self::DepthFirst => Box::new(DepthFirst::new()),
            Self::BreadthFirst => Box::new(BreadthFirst::new()),
            Self::LowestCostFirst => Box::new(LowestCostFirst::new()),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
            Self::LowestCostFirst => "lowest_cost_first",
        }
    }
}

/// Depth-first frontier: always selects the most recently added path.
#[derive(Debug, Default)]
pub struct DepthFirst {
    stack: Vec<Path>,
}

impl DepthFirst {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for DepthFirst {
    fn len(&self) -> usize {
        self.stack.len()
    }

    fn add(&mut self, path: Path) {
        self.stack.push(path);
    }

    fn next(&mut self) -> Option<Path> {
        self.stack.pop()
    }
}

/// Breadth-first frontier: always selects the earliest added path.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    queue: VecDeque<Path>,
}

impl BreadthFirst {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for BreadthFirst {
    fn len(&self) -> usize {
        self.queue.len()
    }

    fn add(&mut self, path: Path) {
        self.queue.push_back(path);
    }

    fn next(&mut self) -> Option<Path> {
        self.queue.pop_front()
    }
}

/// Total order over path costs. Costs are finite by construction.
#[derive(Debug, Clone, Copy)]
struct CostKey(f64);

impl PartialEq for CostKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostKey {}

impl PartialOrd for CostKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A frontier entry wrapping a path with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<CostKey>` to get
/// min-heap behavior (lowest cost first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<CostKey>,
    path: Path,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Lowest-cost-first frontier: a binary heap keyed by `Path::cost()`.
///
/// Ties between equal-cost paths are broken by heap structure, not by
/// insertion order.
#[derive(Debug, Default)]
pub struct LowestCostFirst {
    heap: BinaryHeap<FrontierEntry>,
}

impl LowestCostFirst {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for LowestCostFirst {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn add(&mut self, path: Path) {
        self.heap.push(FrontierEntry {
            key: Reverse(CostKey(path.cost())),
            path,
        });
    }

    fn next(&mut self) -> Option<Path> {
        self.heap.pop().map(|e| e.path)
    }
}
