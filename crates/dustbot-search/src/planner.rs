//! The [`Planner`] trait.

use crate::plan::Plan;
use dustbot_core::{Coord, PlanError, Strategy};
use dustbot_space::GridWorld;

/// A search strategy that produces a cleaning plan.
///
/// # Contract
///
/// - `plan()` MUST be deterministic: the same world and start produce
///   identical actions and counters on every call.
/// - `plan()` MUST return [`PlanError::InvalidStart`] before doing any
///   search work when `start` is out of bounds or an obstacle.
/// - Counters start from zero on every call; nothing is carried between
///   invocations.
///
/// # Object safety
///
/// This trait is object-safe; [`PlannerConfig::build`](crate::PlannerConfig::build)
/// returns `Box<dyn Planner>`.
pub trait Planner: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Which strategy this planner implements.
    fn strategy(&self) -> Strategy;

    /// Compute a plan that cleans every dirty cell reachable from `start`.
    fn plan(&self, world: &GridWorld, start: Coord) -> Result<Plan, PlanError>;
}
