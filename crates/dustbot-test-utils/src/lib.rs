//! Test utilities for dustbot development.
//!
//! Provides [`world_from_rows`] for building worlds from the map
//! character encoding, named [`fixtures`], and a seeded
//! [`random_world`] generator for property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use dustbot_core::{CellKind, Coord};
use dustbot_space::map::cell_from_char;
use dustbot_space::{parse_rows, GridWorld};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Parse `rows` (one `@` required) into a world and its start.
///
/// # Panics
///
/// On any map error; fixtures are expected to be well formed.
pub fn world_from_rows(rows: &[&str]) -> (GridWorld, Coord) {
    let map = parse_rows(rows).unwrap_or_else(|e| panic!("bad fixture {rows:?}: {e}"));
    (map.world, map.start)
}

/// Parse `rows` into a world without requiring a start marker.
///
/// Lets a fixture place the start on a dirty cell, which the character
/// encoding cannot express.
pub fn grid_from_rows(rows: &[&str]) -> GridWorld {
    let cols = rows.first().map_or(0, |r| r.chars().count());
    let cells: Vec<CellKind> = rows
        .iter()
        .flat_map(|r| r.chars().map(cell_from_char))
        .collect();
    GridWorld::new(rows.len() as u32, cols as u32, cells)
        .unwrap_or_else(|e| panic!("bad fixture {rows:?}: {e}"))
}

/// Cell densities for [`random_world`].
#[derive(Clone, Copy, Debug)]
pub struct WorldParams {
    /// Probability that a cell is an obstacle.
    pub obstacle_density: f64,
    /// Probability that a non-obstacle cell is dirty.
    pub dirt_density: f64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            obstacle_density: 0.2,
            dirt_density: 0.15,
        }
    }
}

/// Deterministic random world of `rows x cols` cells.
///
/// The start is drawn uniformly from the passable cells and keeps its
/// kind, so it may be dirty. A world drawn entirely of obstacles gets
/// its first cell cleared to host the start.
pub fn random_world(rows: u32, cols: u32, seed: u64, params: WorldParams) -> (GridWorld, Coord) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = rows as usize * cols as usize;
    let mut cells: Vec<CellKind> = (0..count)
        .map(|_| {
            if rng.random_bool(params.obstacle_density) {
                CellKind::Obstacle
            } else if rng.random_bool(params.dirt_density) {
                CellKind::Dirty
            } else {
                CellKind::Free
            }
        })
        .collect();

    let passable: Vec<usize> = (0..count).filter(|&i| cells[i].is_passable()).collect();
    let start_rank = if passable.is_empty() {
        cells[0] = CellKind::Start;
        0
    } else {
        let rank = passable[rng.random_range(0..passable.len())];
        if cells[rank] == CellKind::Free {
            cells[rank] = CellKind::Start;
        }
        rank
    };

    let world = GridWorld::new(rows, cols, cells)
        .unwrap_or_else(|e| panic!("random world {rows}x{cols}: {e}"));
    let start = world.coord_of(start_rank);
    (world, start)
}
