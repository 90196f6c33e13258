//! Dustbot: cleaning plans for a vacuum robot on a 4-connected grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all dustbot sub-crates. For most users, adding `dustbot` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dustbot::prelude::*;
//!
//! let map = parse_map("3\n3\n@_*\n_#_\n___\n").unwrap();
//!
//! let sweep = PlannerConfig::default().build().unwrap();
//! let plan = sweep.plan(&map.world, map.start).unwrap();
//! assert_eq!(plan.tokens(), "EEV");
//!
//! let dfs = PlannerConfig::for_strategy(Strategy::DepthFirst).build().unwrap();
//! let plan = dfs.plan(&map.world, map.start).unwrap();
//! assert_eq!(plan.tokens(), "SSEENNV");
//! assert_eq!(plan.stats.nodes_expanded, 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dustbot-core` | Coordinates, cells, actions, counters, errors |
//! | [`space`] | `dustbot-space` | `GridWorld` and the map loader |
//! | [`arena`] | `dustbot-arena` | Search-tree node storage |
//! | [`search`] | `dustbot-search` | Planners, plans, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`dustbot-core`).
pub use dustbot_core as types;

/// Grid world and map loading (`dustbot-space`).
///
/// [`space::GridWorld`] is the world both planners search;
/// [`space::load_map`] reads the robot's text map files.
pub use dustbot_space as space;

/// Search-tree node arena (`dustbot-arena`).
pub use dustbot_arena as arena;

/// Planning engines (`dustbot-search`).
///
/// [`search::DepthFirst`] and [`search::NearestDirty`] implement
/// [`search::Planner`]; [`search::PlannerConfig`] picks between them.
pub use dustbot_search as search;

/// Common imports for typical dustbot usage.
///
/// ```rust
/// use dustbot::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use dustbot_core::{Action, CellKind, Coord, Direction, SearchStats, Strategy};

    // Errors
    pub use dustbot_core::{ConfigError, PlanError, StartRejection, WorldError};
    pub use dustbot_space::MapError;

    // World
    pub use dustbot_space::{load_map, parse_map, GridWorld, LoadedMap};

    // Planning
    pub use dustbot_search::{DepthFirst, NearestDirty, Plan, Planner, PlannerConfig};
}
