//! Benchmark worlds for the dustbot planners.
//!
//! - [`open_profile`]: obstacle-free square field, dirt on every third cell
//! - [`cluttered_profile`]: seeded random world with 30% obstacles
//! - [`maze_profile`]: serpentine corridor that forces long backtracks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dustbot_core::{CellKind, Coord};
use dustbot_space::GridWorld;
use dustbot_test_utils::{fixtures, random_world, WorldParams};

/// Side length of the reference benchmark worlds (4096 cells).
pub const REFERENCE_SIDE: usize = 64;

/// Obstacle-free `side x side` world, start in the top-left corner.
pub fn open_profile(side: usize) -> (GridWorld, Coord) {
    fixtures::open_field(side, side)
}

/// Random `side x side` world: 30% obstacles, 10% of the rest dirty.
pub fn cluttered_profile(side: usize, seed: u64) -> (GridWorld, Coord) {
    let side = side as u32;
    random_world(
        side,
        side,
        seed,
        WorldParams {
            obstacle_density: 0.3,
            dirt_density: 0.1,
        },
    )
}

/// Serpentine corridor: every odd row is a wall with one gap,
/// alternating between the east and west ends. Dirt sits at the east end
/// of the last open row.
pub fn maze_profile(side: usize) -> (GridWorld, Coord) {
    let mut cells = Vec::with_capacity(side * side);
    for r in 0..side {
        for c in 0..side {
            let wall = r % 2 == 1 && c != if r % 4 == 1 { side - 1 } else { 0 };
            cells.push(if wall { CellKind::Obstacle } else { CellKind::Free });
        }
    }
    cells[0] = CellKind::Start;
    let last_open = (side - 1) / 2 * 2;
    let dirt = last_open * side + side - 1;
    if dirt > 0 {
        cells[dirt] = CellKind::Dirty;
    }
    let world = GridWorld::new(side as u32, side as u32, cells)
        .unwrap_or_else(|e| panic!("maze profile {side}: {e}"));
    (world, Coord::new(0, 0))
}
