//! Exhaustive depth-first spanning walk.
//!
//! Visits every cell reachable from the start exactly once, emitting a
//! move for each forward step and the reverse move for each backtrack,
//! plus a clean action on first entry to a dirty cell. Neighbours are
//! tried in [`Direction::ALL`] order (N, S, W, E).
//!
//! The walk runs on an explicit stack of frames rather than the call
//! stack, so deep corridors cannot overflow the thread stack. The action
//! order is exactly that of the recursive formulation:
//!
//! ```text
//! visit(c):
//!     mark c visited; expanded += 1; if dirty(c) emit Clean
//!     for d in [N, S, W, E]:
//!         n = c + d
//!         if passable(n) and not visited(n):
//!             generated += 1; emit d; visit(n); emit reverse(d)
//! ```

use crate::plan::Plan;
use crate::planner::Planner;
use crate::trim::trim_after_last_clean;
use dustbot_arena::{NodeArena, NodeId};
use dustbot_core::{Action, Coord, Direction, PlanError, SearchStats, Strategy};
use dustbot_space::GridWorld;
use indexmap::IndexSet;
use tracing::{debug, info, trace, warn};

/// Full, untrimmed result of a depth-first walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// Every forward and backtrack move plus clean actions, untrimmed.
    pub actions: Vec<Action>,
    /// Cells entered, in visitation order.
    pub visited: IndexSet<Coord>,
    /// Node counters.
    pub stats: SearchStats,
    /// Deepest stack reached (the root counts as depth 1).
    pub max_depth: usize,
}

impl Traversal {
    /// Convert to a [`Plan`], optionally trimming after the last clean.
    pub fn into_plan(self, trim: bool) -> Plan {
        let mut actions = self.actions;
        if trim {
            let removed = trim_after_last_clean(&mut actions);
            debug!(removed, kept = actions.len(), "trimmed depth-first tail");
        }
        Plan {
            strategy: Strategy::DepthFirst,
            actions,
            stats: self.stats,
        }
    }
}

/// One pending cell on the explicit stack.
struct Frame {
    node: NodeId,
    /// Direction taken from the predecessor into this cell; `None` at the root.
    entered_by: Option<Direction>,
    /// Index into [`Direction::ALL`] of the next neighbour to try.
    next: usize,
}

struct Walk<'w> {
    world: &'w GridWorld,
    arena: NodeArena,
    visited: IndexSet<Coord>,
    actions: Vec<Action>,
    stats: SearchStats,
}

impl Walk<'_> {
    fn enter(&mut self, node: NodeId) {
        let coord = self.arena.coord(node);
        self.visited.insert(coord);
        self.stats.record_expanded();
        let dirty = self.world.is_dirty(coord);
        if dirty {
            self.actions.push(Action::Clean);
        }
        trace!(%coord, depth = self.arena[node].depth(), dirty, "expand");
    }
}

/// Run the full depth-first walk from `start`.
///
/// Returns [`PlanError::InvalidStart`] if `start` is out of bounds or an
/// obstacle.
pub fn traverse(world: &GridWorld, start: Coord) -> Result<Traversal, PlanError> {
    world.validate_start(start)?;

    let mut walk = Walk {
        world,
        arena: NodeArena::with_capacity(world.cell_count()),
        visited: IndexSet::new(),
        actions: Vec::new(),
        stats: SearchStats::default(),
    };

    let root = walk.arena.root(start);
    walk.enter(root);
    let mut stack = vec![Frame {
        node: root,
        entered_by: None,
        next: 0,
    }];
    let mut max_depth = stack.len();

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = Direction::ALL.get(frame.next) else {
            // All four neighbours considered: step back to the predecessor.
            if let Some(dir) = frame.entered_by {
                walk.actions.push(Action::Move(dir.reverse()));
            }
            stack.pop();
            continue;
        };
        frame.next += 1;
        let node = frame.node;

        let target = walk.arena.coord(node).offset(dir);
        if !world.is_passable(target) || walk.visited.contains(&target) {
            continue;
        }

        walk.stats.record_generated();
        walk.actions.push(Action::Move(dir));
        let child = walk.arena.child(node, target);
        walk.enter(child);
        stack.push(Frame {
            node: child,
            entered_by: Some(dir),
            next: 0,
        });
        max_depth = max_depth.max(stack.len());
    }

    Ok(Traversal {
        actions: walk.actions,
        visited: walk.visited,
        stats: walk.stats,
        max_depth,
    })
}

/// Exhaustive depth-first planner.
///
/// Trims the plan after the last clean action unless built with
/// [`DepthFirst::untrimmed`].
#[derive(Clone, Copy, Debug)]
pub struct DepthFirst {
    trim: bool,
}

impl DepthFirst {
    /// Planner that trims after the last clean action.
    pub fn new() -> Self {
        Self { trim: true }
    }

    /// Planner that keeps the full spanning walk, backtracks included.
    pub fn untrimmed() -> Self {
        Self { trim: false }
    }

    /// Whether this planner trims its output.
    pub fn trims(&self) -> bool {
        self.trim
    }
}

impl Default for DepthFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner for DepthFirst {
    fn name(&self) -> &str {
        "DepthFirst"
    }

    fn strategy(&self) -> Strategy {
        Strategy::DepthFirst
    }

    fn plan(&self, world: &GridWorld, start: Coord) -> Result<Plan, PlanError> {
        let traversal = traverse(world, start)?;

        let total_dirty = world.dirty_cells().len();
        let reached_dirty = traversal
            .visited
            .iter()
            .filter(|&&c| world.is_dirty(c))
            .count();
        if reached_dirty < total_dirty {
            warn!(
                unreachable = total_dirty - reached_dirty,
                "dirty cells not reachable from start"
            );
        }

        let plan = traversal.into_plan(self.trim);
        info!(
            strategy = %plan.strategy,
            actions = plan.actions.len(),
            generated = plan.stats.nodes_generated,
            expanded = plan.stats.nodes_expanded,
            "plan complete"
        );
        Ok(plan)
    }
}
