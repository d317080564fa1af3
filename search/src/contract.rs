//! Seams of the search engine: frontier strategy, goal test, observer.

use waypoint_kernel::{Graph, Path, Vertex};

use crate::events::SearchEvent;

/// Ordering policy over not-yet-expanded paths.
///
/// # Contract
///
/// - `len()` reports exactly the number of paths added and not yet returned.
/// - `next()` returns `None` only when `len() == 0`.
///
/// The engine checks the first rule while seeding and reports a violation
/// of the second as `TerminationReason::FrontierInvariantViolation`.
pub trait Strategy {
    /// Number of paths currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store an expanded path.
    fn add(&mut self, path: Path);

    /// Remove and return the next path to expand, or `None` when empty.
    fn next(&mut self) -> Option<Path>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn add(&mut self, path: Path) {
        (**self).add(path);
    }

    fn next(&mut self) -> Option<Path> {
        (**self).next()
    }
}

/// Test deciding whether a vertex satisfies the search objective.
///
/// Implemented for every `Fn(&Vertex) -> bool`.
pub trait GoalPredicate {
    fn is_goal(&self, vertex: &Vertex) -> bool;
}

impl<F> GoalPredicate for F
where
    F: Fn(&Vertex) -> bool,
{
    fn is_goal(&self, vertex: &Vertex) -> bool {
        self(vertex)
    }
}

/// Subscriber for the engine's structured event stream.
///
/// Observers are called synchronously from inside `search()`; they see the
/// graph read-only and cannot affect expansion.
pub trait SearchObserver {
    fn on_event(&mut self, graph: &Graph, event: &SearchEvent<'_>);
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_event(&mut self, graph: &Graph, event: &SearchEvent<'_>) {
        (**self).on_event(graph, event);
    }
}
