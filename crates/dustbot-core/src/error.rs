//! Error types shared across the dustbot workspace.
//!
//! Organized by subsystem: world construction, planning, and planner
//! configuration. Map-file errors live next to the loader in
//! `dustbot-space`.

use crate::id::Coord;
use thiserror::Error;

/// Why a start coordinate was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRejection {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate is an obstacle cell.
    Obstacle,
}

impl std::fmt::Display for StartRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Obstacle => f.write_str("on an obstacle"),
        }
    }
}

/// Errors returned by a planner before any search work is done.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The start coordinate is not a passable in-bounds cell.
    #[error("invalid start {coord}: {reason}")]
    InvalidStart {
        /// The rejected start coordinate.
        coord: Coord,
        /// What is wrong with it.
        reason: StartRejection,
    },
}

/// Errors from grid world construction and coordinate queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Attempted to construct a world with zero cells.
    #[error("world must have at least one cell")]
    EmptyWorld,
    /// A dimension exceeds what an `i32` coordinate can address.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// The cell buffer does not hold exactly `rows * cols` cells.
    #[error("expected {expected} cells, got {found}")]
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
    /// A coordinate is outside the bounds of the world.
    #[error("coordinate {coord} out of bounds: [0, {rows}) x [0, {cols})")]
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Number of rows in the world.
        rows: u32,
        /// Number of columns in the world.
        cols: u32,
    },
}

/// Errors detected while validating a planner configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Strategy name not recognised.
    #[error("unknown strategy '{name}' (expected depth_first or uniform_cost)")]
    UnknownStrategy {
        /// The name that failed to parse.
        name: String,
    },
    /// A cell cap of zero would reject every world.
    #[error("max_cells must be at least 1")]
    ZeroCellCap,
    /// The world exceeds the configured cell cap.
    #[error("world has {cells} cells, exceeding max_cells {max}")]
    WorldTooLarge {
        /// Cells in the offending world.
        cells: usize,
        /// The configured cap.
        max: usize,
    },
}
