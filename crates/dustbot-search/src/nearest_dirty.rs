//! Nearest-dirty sweep: repeated breadth-first rounds.
//!
//! Each round runs a breadth-first search from the robot's position,
//! stopping as soon as it dequeues a dirty cell that has not been
//! cleaned yet. Breadth-first order dequeues cells in non-decreasing hop
//! distance, so the first such cell is a nearest one and the rest of the
//! queue can be abandoned. The route to it is rebuilt from the
//! predecessor chain, appended to the plan, and the next round starts
//! from the target. The sweep ends with the first round that finds
//! nothing.
//!
//! Every edge costs one move, which makes this breadth-first search the
//! same as a uniform-cost search over the grid.

use crate::plan::Plan;
use crate::planner::Planner;
use dustbot_arena::{NodeArena, NodeId};
use dustbot_core::{Action, Coord, Direction, PlanError, SearchStats, Strategy};
use dustbot_space::GridWorld;
use indexmap::IndexSet;
use std::collections::VecDeque;
use tracing::{debug, info, trace, warn};

/// Result of a full sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sweep {
    /// Moves interleaved with clean actions, in execution order.
    pub actions: Vec<Action>,
    /// Dirty cells serviced, in cleaning order.
    pub cleaned: IndexSet<Coord>,
    /// Rounds that found a target. The final, empty round is not counted.
    pub rounds: usize,
    /// Node counters summed over every round, the final one included.
    pub stats: SearchStats,
}

impl Sweep {
    /// Convert to a [`Plan`].
    pub fn into_plan(self) -> Plan {
        Plan {
            strategy: Strategy::UniformCost,
            actions: self.actions,
            stats: self.stats,
        }
    }
}

/// Result of a single breadth-first round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// The nearest uncleaned dirty cell, if any remains reachable.
    pub target: Option<Coord>,
    /// Route from the origin to `target`, with clean actions. Empty when
    /// there is no target.
    pub route: Vec<Action>,
    /// Counters for this round alone.
    pub stats: SearchStats,
}

/// Flat per-round visited flags, indexed by grid rank.
struct VisitedGrid {
    flags: Vec<bool>,
}

impl VisitedGrid {
    fn new(cells: usize) -> Self {
        Self {
            flags: vec![false; cells],
        }
    }

    fn clear(&mut self) {
        self.flags.fill(false);
    }

    /// Marks `rank`; returns `false` if it was already marked.
    fn insert(&mut self, rank: usize) -> bool {
        !std::mem::replace(&mut self.flags[rank], true)
    }

    fn contains(&self, rank: usize) -> bool {
        self.flags[rank]
    }
}

/// Search buffers reused across rounds.
struct Searcher<'w> {
    world: &'w GridWorld,
    arena: NodeArena,
    visited: VisitedGrid,
    queue: VecDeque<NodeId>,
}

impl<'w> Searcher<'w> {
    fn new(world: &'w GridWorld) -> Self {
        Self {
            world,
            arena: NodeArena::with_capacity(world.cell_count()),
            visited: VisitedGrid::new(world.cell_count()),
            queue: VecDeque::new(),
        }
    }

    fn rank(&self, coord: Coord) -> usize {
        // Only passable (hence in-bounds) coordinates are ever enqueued.
        self.world
            .rank(coord)
            .unwrap_or_else(|| unreachable!("enqueued out-of-bounds coordinate {coord}"))
    }

    /// One breadth-first round from `origin`. Discards the previous
    /// round's tree.
    fn round(
        &mut self,
        origin: Coord,
        cleaned: &IndexSet<Coord>,
        stats: &mut SearchStats,
    ) -> Option<NodeId> {
        self.arena.reset();
        self.visited.clear();
        self.queue.clear();
        let root = self.arena.root(origin);
        self.queue.push_back(root);

        while let Some(node) = self.queue.pop_front() {
            let coord = self.arena.coord(node);
            // A cell can sit in the queue more than once when two
            // frontier cells discover it before it is dequeued.
            let rank = self.rank(coord);
            if !self.visited.insert(rank) {
                continue;
            }
            stats.record_expanded();
            trace!(%coord, depth = self.arena[node].depth(), "expand");

            if self.world.is_dirty(coord) && !cleaned.contains(&coord) {
                return Some(node);
            }

            for (_, next) in self.world.passable_neighbours(coord) {
                if self.visited.contains(self.rank(next)) {
                    continue;
                }
                stats.record_generated();
                let child = self.arena.child(node, next);
                self.queue.push_back(child);
            }
        }
        None
    }

    /// Rebuild the route from the round origin to `target`.
    ///
    /// Every uncleaned dirty cell on the chain gets a clean action and is
    /// added to `cleaned`; in practice only the target (and, on the first
    /// round, a dirty start) qualifies.
    fn route(&self, target: NodeId, cleaned: &mut IndexSet<Coord>) -> Vec<Action> {
        let mut reversed = Vec::with_capacity(self.arena[target].depth() as usize + 2);
        for node in self.arena.lineage(target) {
            let coord = node.coord();
            if self.world.is_dirty(coord) && cleaned.insert(coord) {
                reversed.push(Action::Clean);
            }
            if let Some(pred) = node.predecessor() {
                let from = self.arena.coord(pred);
                let dir = Direction::between(from, coord).unwrap_or_else(|| {
                    unreachable!("predecessor {from} is not adjacent to {coord}")
                });
                reversed.push(Action::Move(dir));
            }
        }
        reversed.reverse();
        reversed
    }
}

/// Run one breadth-first round from `origin`, treating `cleaned` as
/// already serviced.
///
/// Returns [`PlanError::InvalidStart`] if `origin` is out of bounds or an
/// obstacle.
pub fn search_round(
    world: &GridWorld,
    origin: Coord,
    cleaned: &IndexSet<Coord>,
) -> Result<Round, PlanError> {
    world.validate_start(origin)?;
    let mut searcher = Searcher::new(world);
    let mut stats = SearchStats::default();
    let mut cleaned = cleaned.clone();
    let Some(target) = searcher.round(origin, &cleaned, &mut stats) else {
        return Ok(Round {
            target: None,
            route: Vec::new(),
            stats,
        });
    };
    let route = searcher.route(target, &mut cleaned);
    Ok(Round {
        target: Some(searcher.arena.coord(target)),
        route,
        stats,
    })
}

/// Sweep from `start` until no reachable dirty cell is left uncleaned.
///
/// Returns [`PlanError::InvalidStart`] if `start` is out of bounds or an
/// obstacle.
pub fn sweep(world: &GridWorld, start: Coord) -> Result<Sweep, PlanError> {
    world.validate_start(start)?;

    let mut searcher = Searcher::new(world);
    let mut cleaned = IndexSet::new();
    let mut actions = Vec::new();
    let mut stats = SearchStats::default();
    let mut rounds = 0;
    let mut origin = start;

    loop {
        let before = stats;
        let Some(target) = searcher.round(origin, &cleaned, &mut stats) else {
            debug!(
                round = rounds + 1,
                %origin,
                generated = stats.nodes_generated - before.nodes_generated,
                expanded = stats.nodes_expanded - before.nodes_expanded,
                "sweep exhausted"
            );
            break;
        };
        let route = searcher.route(target, &mut cleaned);
        let reached = searcher.arena.coord(target);
        rounds += 1;
        debug!(
            round = rounds,
            %origin,
            target = %reached,
            steps = route.iter().filter(|a| a.is_move()).count(),
            generated = stats.nodes_generated - before.nodes_generated,
            expanded = stats.nodes_expanded - before.nodes_expanded,
            "sweep round"
        );
        actions.extend(route);
        origin = reached;
    }

    Ok(Sweep {
        actions,
        cleaned,
        rounds,
        stats,
    })
}

/// Nearest-dirty sweep planner.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestDirty;

impl Planner for NearestDirty {
    fn name(&self) -> &str {
        "NearestDirty"
    }

    fn strategy(&self) -> Strategy {
        Strategy::UniformCost
    }

    fn plan(&self, world: &GridWorld, start: Coord) -> Result<Plan, PlanError> {
        let result = sweep(world, start)?;

        let total_dirty = world.dirty_cells().len();
        if result.cleaned.len() < total_dirty {
            warn!(
                unreachable = total_dirty - result.cleaned.len(),
                "dirty cells not reachable from start"
            );
        }

        let plan = result.into_plan();
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

#[cfg(test)]
mod tests {
    use super::*;
    use dustbot_core::StartRejection;
    use dustbot_test_utils::{fixtures, world_from_rows};

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    // ── Single round ────────────────────────────────────────────

    #[test]
    fn first_round_on_ring_stops_at_target() {
        let (world, start) = fixtures::ring();
        let round = search_round(&world, start, &IndexSet::new()).unwrap();
        assert_eq!(round.target, Some(c(0, 2)));
        assert_eq!(
            round.route,
            vec![
                Action::Move(Direction::East),
                Action::Move(Direction::East),
                Action::Clean
            ]
        );
        // Dequeued: (0,0) (1,0) (0,1) (2,0) (0,2).
        assert_eq!(round.stats.nodes_expanded, 5);
        assert_eq!(round.stats.nodes_generated, 5);
    }

    #[test]
    fn round_skips_cleaned_cells() {
        let (world, start) = fixtures::ring();
        let cleaned: IndexSet<Coord> = [c(0, 2)].into_iter().collect();
        let round = search_round(&world, start, &cleaned).unwrap();
        assert_eq!(round.target, None);
        assert!(round.route.is_empty());
        assert_eq!(round.stats.nodes_expanded, 8);
    }

    #[test]
    fn duplicate_queue_entries_are_not_expanded_twice() {
        // (1,1) is discovered from both (0,1) and (1,0) before it is dequeued.
        let (world, start) = world_from_rows(&["@_", "__"]);
        let round = search_round(&world, start, &IndexSet::new()).unwrap();
        assert_eq!(round.target, None);
        assert_eq!(round.stats.nodes_expanded, 4);
        assert_eq!(round.stats.nodes_generated, 4);
    }

    // ── Full sweep ──────────────────────────────────────────────

    #[test]
    fn ring_sweep() {
        let (world, start) = fixtures::ring();
        let s = sweep(&world, start).unwrap();
        assert_eq!(s.rounds, 1);
        assert_eq!(s.cleaned.iter().copied().collect::<Vec<_>>(), vec![c(0, 2)]);
        let plan = s.into_plan();
        assert_eq!(plan.tokens(), "EEV");
        // Round 1 is 5/5, the exhausted round 2 is 8/8.
        assert_eq!(plan.stats.nodes_expanded, 13);
        assert_eq!(plan.stats.nodes_generated, 13);
    }

    #[test]
    fn visits_nearest_first() {
        // Dirt at distance 4 east and distance 1 south: south goes first.
        let (world, start) = world_from_rows(&["@___*", "*____"]);
        let plan = NearestDirty.plan(&world, start).unwrap();
        assert_eq!(plan.tokens(), "SVNEEEEV");
    }

    #[test]
    fn ties_break_in_nswe_order() {
        // Two dirty cells at distance 1: north is tried before east.
        let (world, start) = world_from_rows(&["*_", "@*"]);
        let s = sweep(&world, start).unwrap();
        assert_eq!(s.cleaned.iter().copied().collect::<Vec<_>>(), vec![c(0, 0), c(1, 1)]);
    }

    #[test]
    fn no_dirt_is_one_exhausted_round() {
        let (world, start) = fixtures::no_dirt();
        let s = sweep(&world, start).unwrap();
        assert!(s.actions.is_empty());
        assert_eq!(s.rounds, 0);
        assert_eq!(s.stats.nodes_expanded as usize, world.reachable_from(start).len());
    }

    #[test]
    fn dirty_start_is_cleaned_before_moving() {
        let (world, start) = fixtures::dirty_start();
        let s = sweep(&world, start).unwrap();
        assert_eq!(s.actions.first(), Some(&Action::Clean));
        assert_eq!(s.cleaned.first(), Some(&start));
    }

    #[test]
    fn enclosed_dirt_is_left_alone() {
        let (world, start) = fixtures::enclosed_dirt();
        let s = sweep(&world, start).unwrap();
        assert!(!s.cleaned.contains(&c(1, 1)));
        assert!(!s.actions.contains(&Action::Clean));
    }

    #[test]
    fn rejects_invalid_start() {
        let (world, _) = fixtures::ring();
        assert_eq!(
            NearestDirty.plan(&world, c(1, 1)),
            Err(PlanError::InvalidStart {
                coord: c(1, 1),
                reason: StartRejection::Obstacle,
            })
        );
        assert!(matches!(
            search_round(&world, c(-1, 0), &IndexSet::new()),
            Err(PlanError::InvalidStart {
                reason: StartRejection::OutOfBounds,
                ..
            })
        ));
    }
}
