//! Grid world model for dustbot.
//!
//! This crate defines [`GridWorld`], the immutable rectangular world the
//! search engines plan over, and the [`map`] loader that turns the
//! robot's text map format into a world plus a start coordinate.
//!
//! # Map encoding
//!
//! | Char | Cell |
//! |------|------|
//! | `#`  | [`CellKind::Obstacle`](dustbot_core::CellKind::Obstacle) |
//! | `*`  | [`CellKind::Dirty`](dustbot_core::CellKind::Dirty) |
//! | `@`  | [`CellKind::Start`](dustbot_core::CellKind::Start) |
//! | other | [`CellKind::Free`](dustbot_core::CellKind::Free) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod map;

pub use grid::GridWorld;
pub use map::{decode_map_bytes, load_map, parse_map, parse_rows, LoadedMap, MapError};
