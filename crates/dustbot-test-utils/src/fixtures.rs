//! Named worlds shared by engine tests and benchmarks.
//!
//! Every fixture returns `(world, start)`.

use crate::{grid_from_rows, world_from_rows};
use dustbot_core::Coord;
use dustbot_space::GridWorld;

/// 3x3 ring around a central obstacle, dirt in the top-right corner.
///
/// ```text
/// @_*
/// _#_
/// ___
/// ```
pub fn ring() -> (GridWorld, Coord) {
    world_from_rows(&["@_*", "_#_", "___"])
}

/// Same shape as [`ring`] with no dirt at all.
pub fn no_dirt() -> (GridWorld, Coord) {
    world_from_rows(&["@__", "_#_", "___"])
}

/// The start cell itself is dirty; a second dirty cell sits two steps east.
pub fn dirty_start() -> (GridWorld, Coord) {
    (grid_from_rows(&["*_*", "___"]), Coord::new(0, 0))
}

/// The only dirty cell, (1, 1), is walled in on all four sides.
///
/// ```text
/// _#_@
/// #*#_
/// _#__
/// ```
pub fn enclosed_dirt() -> (GridWorld, Coord) {
    world_from_rows(&["_#_@", "#*#_", "_#__"])
}

/// A single row: start at the west end, dirt at the east end.
pub fn corridor(len: usize) -> (GridWorld, Coord) {
    let mut row = String::with_capacity(len);
    row.push('@');
    row.push_str(&"_".repeat(len.saturating_sub(2)));
    if len > 1 {
        row.push('*');
    }
    world_from_rows(&[row.as_str()])
}

/// Obstacle-free `rows x cols` field with dirt on every third cell.
pub fn open_field(rows: usize, cols: usize) -> (GridWorld, Coord) {
    let lines: Vec<String> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| match (r, c) {
                    (0, 0) => '@',
                    _ if (r * cols + c) % 3 == 0 => '*',
                    _ => '_',
                })
                .collect()
        })
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    world_from_rows(&refs)
}
