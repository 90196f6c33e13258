//! Cleaning-plan search engines for dustbot.
//!
//! Two strategies turn a [`GridWorld`](dustbot_space::GridWorld) and a
//! start coordinate into an ordered list of robot
//! [`Action`](dustbot_core::Action)s plus node counters:
//!
//! - [`DepthFirst`]: exhaustive depth-first spanning walk that backtracks
//!   over every edge, trimmed after the last clean action.
//! - [`NearestDirty`]: repeated breadth-first rounds, each walking to the
//!   closest dirty cell not yet cleaned.
//!
//! Both report [`SearchStats`](dustbot_core::SearchStats) so the
//! strategies can be compared on the same world.
//!
//! # Example
//!
//! ```
//! use dustbot_search::{NearestDirty, Planner};
//! use dustbot_space::parse_rows;
//!
//! let map = parse_rows(&["@_*", "_#_", "___"]).unwrap();
//! let plan = NearestDirty.plan(&map.world, map.start).unwrap();
//! assert_eq!(plan.tokens(), "EEV");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod depth_first;
pub mod nearest_dirty;
pub mod plan;
pub mod planner;
pub mod trim;

pub use config::PlannerConfig;
pub use depth_first::{DepthFirst, Traversal};
pub use nearest_dirty::{NearestDirty, Round, Sweep};
pub use plan::Plan;
pub use planner::Planner;
pub use trim::trim_after_last_clean;
