//! Built-in goal predicates.

use waypoint_kernel::Vertex;

use crate::contract::GoalPredicate;

/// Goal satisfied by the vertex whose label equals a fixed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEquals {
    label: String,
}

impl GoalPredicate for LabelEquals {
    fn is_goal(&self, vertex: &Vertex) -> bool {
        vertex.label() == self.label
    }
}

/// Goal satisfied by the vertex labelled `label`.
#[must_use]
pub fn label_equals(label: impl Into<String>) -> LabelEquals {
    LabelEquals {
        label: label.into(),
    }
}
