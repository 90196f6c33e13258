//! Planner strategy selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Which search strategy produces the cleaning plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exhaustive depth-first spanning walk with backtracking.
    DepthFirst,
    /// Repeated breadth-first sweep to the nearest uncleaned dirty cell.
    ///
    /// Every edge costs one move, so breadth-first order coincides with
    /// uniform-cost order; the name is kept for command-line
    /// compatibility.
    #[default]
    UniformCost,
}

impl Strategy {
    /// The command-line name of this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth_first",
            Strategy::UniformCost => "uniform_cost",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth_first" => Ok(Strategy::DepthFirst),
            "uniform_cost" => Ok(Strategy::UniformCost),
            other => Err(ConfigError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}
