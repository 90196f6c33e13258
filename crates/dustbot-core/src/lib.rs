//! Core types for the dustbot cleaning planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid, arena, and search crates:
//! coordinates, cell kinds, robot actions, search counters, and the
//! error enums returned across crate boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod error;
pub mod id;
pub mod stats;
pub mod strategy;

pub use action::{Action, Direction};
pub use cell::CellKind;
pub use error::{ConfigError, PlanError, StartRejection, WorldError};
pub use id::Coord;
pub use stats::SearchStats;
pub use strategy::Strategy;
