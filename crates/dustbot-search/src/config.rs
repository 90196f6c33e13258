//! Planner configuration and validation.
//!
//! [`PlannerConfig`] picks a strategy and its knobs. [`build()`](PlannerConfig::build)
//! validates the config and hands back the configured engine behind the
//! [`Planner`] trait, so callers never name a concrete engine.

use crate::depth_first::DepthFirst;
use crate::nearest_dirty::NearestDirty;
use crate::planner::Planner;
use dustbot_core::{ConfigError, Strategy};
use dustbot_space::GridWorld;

/// Configuration for a planner run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Which engine to run. Default: [`Strategy::UniformCost`].
    pub strategy: Strategy,
    /// Drop depth-first actions after the last clean. Ignored by the
    /// sweep engine, whose rounds always end on a clean. Default: `true`.
    pub trim_after_last_clean: bool,
    /// Largest world, in cells, this config accepts. `None` = no cap.
    pub max_cells: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::UniformCost,
            trim_after_last_clean: true,
            max_cells: None,
        }
    }
}

impl PlannerConfig {
    /// Config for `strategy` with every other field at its default.
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cells == Some(0) {
            return Err(ConfigError::ZeroCellCap);
        }
        Ok(())
    }

    /// Check `world` against the cell cap.
    pub fn check_world(&self, world: &GridWorld) -> Result<(), ConfigError> {
        match self.max_cells {
            Some(max) if world.cell_count() > max => Err(ConfigError::WorldTooLarge {
                cells: world.cell_count(),
                max,
            }),
            _ => Ok(()),
        }
    }

    /// Validate and construct the configured planner.
    pub fn build(&self) -> Result<Box<dyn Planner>, ConfigError> {
        self.validate()?;
        Ok(match self.strategy {
            Strategy::DepthFirst if self.trim_after_last_clean => Box::new(DepthFirst::new()),
            Strategy::DepthFirst => Box::new(DepthFirst::untrimmed()),
            Strategy::UniformCost => Box::new(NearestDirty),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dustbot_test_utils::fixtures;

    // ── Defaults ────────────────────────────────────────────────

    #[test]
    fn default_is_uniform_cost_trimmed_uncapped() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.strategy, Strategy::UniformCost);
        assert!(cfg.trim_after_last_clean);
        assert_eq!(cfg.max_cells, None);
        assert!(cfg.validate().is_ok());
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn zero_cap_rejected() {
        let cfg = PlannerConfig {
            max_cells: Some(0),
            ..PlannerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCellCap));
        assert!(matches!(cfg.build(), Err(ConfigError::ZeroCellCap)));
    }

    #[test]
    fn world_over_cap_rejected() {
        let (world, _) = fixtures::ring();
        let cfg = PlannerConfig {
            max_cells: Some(8),
            ..PlannerConfig::default()
        };
        assert_eq!(
            cfg.check_world(&world),
            Err(ConfigError::WorldTooLarge { cells: 9, max: 8 })
        );
        let cfg = PlannerConfig {
            max_cells: Some(9),
            ..cfg
        };
        assert_eq!(cfg.check_world(&world), Ok(()));
        assert_eq!(PlannerConfig::default().check_world(&world), Ok(()));
    }

    // ── Build ───────────────────────────────────────────────────

    #[test]
    fn build_dispatches_on_strategy() {
        let (world, start) = fixtures::ring();

        let sweep = PlannerConfig::default().build().unwrap();
        assert_eq!(sweep.strategy(), Strategy::UniformCost);
        assert_eq!(sweep.plan(&world, start).unwrap().tokens(), "EEV");

        let dfs = PlannerConfig::for_strategy(Strategy::DepthFirst)
            .build()
            .unwrap();
        assert_eq!(dfs.strategy(), Strategy::DepthFirst);
        assert_eq!(dfs.plan(&world, start).unwrap().tokens(), "SSEENNV");
    }

    #[test]
    fn trim_flag_reaches_depth_first() {
        let (world, start) = fixtures::ring();
        let cfg = PlannerConfig {
            strategy: Strategy::DepthFirst,
            trim_after_last_clean: false,
            max_cells: None,
        };
        let plan = cfg.build().unwrap().plan(&world, start).unwrap();
        assert_eq!(plan.tokens(), "SSEENNVWESSWWNN");
    }
}
