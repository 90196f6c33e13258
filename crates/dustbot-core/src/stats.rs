//! Search-effort counters.
//!
//! [`SearchStats`] is the accounting both engines report alongside a
//! plan, used to compare how much work each strategy does on the same
//! world.

use std::ops::AddAssign;

/// Node counters for a single planner invocation.
///
/// Counters start at zero for every run and only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Neighbour cells that passed the in-bounds, not-obstacle,
    /// not-yet-visited filter, whether or not they were later expanded.
    pub nodes_generated: u64,
    /// Coordinates actually dequeued or recursed into and processed.
    pub nodes_expanded: u64,
}

impl SearchStats {
    /// Count one generated node.
    #[inline]
    pub fn record_generated(&mut self) {
        self.nodes_generated += 1;
    }

    /// Count one expanded node.
    #[inline]
    pub fn record_expanded(&mut self) {
        self.nodes_expanded += 1;
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes_generated += other.nodes_generated;
        self.nodes_expanded += other.nodes_expanded;
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.merge(rhs);
    }
}
