//! The [`Coord`] grid position type.

use crate::action::Direction;
use std::fmt;

/// A `(row, col)` position in a grid world, 0-indexed.
///
/// Components are signed so that stepping off the edge of the grid
/// produces a representable (out-of-bounds) coordinate that the grid can
/// reject, rather than wrapping. Ordering is row-major, matching the
/// canonical cell ordering of a grid world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, growing southwards.
    pub row: i32,
    /// Column index, growing eastwards.
    pub col: i32,
}

impl Coord {
    /// Construct a coordinate from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in `direction`.
    ///
    /// No bounds checking: the result may lie outside any grid.
    pub fn offset(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four axis-aligned neighbours in [`Direction::ALL`] order.
    pub fn neighbours(self) -> [(Direction, Coord); 4] {
        Direction::ALL.map(|d| (d, self.offset(d)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_direction_deltas() {
        let c = Coord::new(3, 3);
        assert_eq!(c.offset(Direction::North), Coord::new(2, 3));
        assert_eq!(c.offset(Direction::South), Coord::new(4, 3));
        assert_eq!(c.offset(Direction::West), Coord::new(3, 2));
        assert_eq!(c.offset(Direction::East), Coord::new(3, 4));
    }

    #[test]
    fn offset_may_leave_the_grid() {
        assert_eq!(Coord::new(0, 0).offset(Direction::North), Coord::new(-1, 0));
    }

    #[test]
    fn neighbours_are_in_exploration_order() {
        let n = Coord::new(1, 1).neighbours();
        assert_eq!(n[0], (Direction::North, Coord::new(0, 1)));
        assert_eq!(n[1], (Direction::South, Coord::new(2, 1)));
        assert_eq!(n[2], (Direction::West, Coord::new(1, 0)));
        assert_eq!(n[3], (Direction::East, Coord::new(1, 2)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn display_is_tuple_like() {
        assert_eq!(Coord::new(2, 5).to_string(), "(2, 5)");
    }
}
