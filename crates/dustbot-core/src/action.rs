//! Robot actions: directional moves and the clean action.

use crate::id::Coord;
use std::fmt;

/// A cardinal direction on the 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row - 1.
    North,
    /// Row + 1.
    South,
    /// Column - 1.
    West,
    /// Column + 1.
    East,
}

impl Direction {
    /// All directions in exploration order: North, South, West, East.
    ///
    /// Both search engines expand neighbours in this order, which fixes
    /// the tie-break between equal-length routes and makes plans
    /// reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// Map a unit offset back to its direction.
    ///
    /// Returns `None` for anything other than the four unit offsets.
    pub fn from_delta(dr: i32, dc: i32) -> Option<Direction> {
        match (dr, dc) {
            (-1, 0) => Some(Direction::North),
            (1, 0) => Some(Direction::South),
            (0, -1) => Some(Direction::West),
            (0, 1) => Some(Direction::East),
            _ => None,
        }
    }

    /// The direction of a single step from `from` to `to`, if they are
    /// 4-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Self::from_delta(to.row - from.row, to.col - from.col)
    }

    /// The opposite direction (negated delta).
    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Single-letter token: `N`, `S`, `W`, `E`.
    pub fn token(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::West => 'W',
            Direction::East => 'E',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One step of a cleaning plan, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move one cell in the given direction.
    Move(Direction),
    /// Vacuum the current cell.
    Clean,
}

impl Action {
    /// Token printed for the clean action.
    pub const CLEAN_TOKEN: char = 'V';

    /// Whether this is a directional move.
    pub fn is_move(self) -> bool {
        matches!(self, Action::Move(_))
    }

    /// Whether this is the clean action.
    pub fn is_clean(self) -> bool {
        matches!(self, Action::Clean)
    }

    /// Single-letter token: a direction token or `V`.
    pub fn token(self) -> char {
        match self {
            Action::Move(d) => d.token(),
            Action::Clean => Self::CLEAN_TOKEN,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        Action::Move(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deltas_match_exploration_table() {
        assert_eq!(Direction::North.delta(), (-1, 0));
        assert_eq!(Direction::South.delta(), (1, 0));
        assert_eq!(Direction::West.delta(), (0, -1));
        assert_eq!(Direction::East.delta(), (0, 1));
    }

    #[test]
    fn from_delta_rejects_non_unit_offsets() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(-2, 0), None);
    }

    #[test]
    fn between_adjacent_cells() {
        let a = Coord::new(2, 2);
        assert_eq!(Direction::between(a, Coord::new(2, 3)), Some(Direction::East));
        assert_eq!(Direction::between(Coord::new(2, 3), a), Some(Direction::West));
        assert_eq!(Direction::between(a, Coord::new(4, 2)), None);
    }

    #[test]
    fn tokens() {
        let s: String = [
            Action::Move(Direction::North),
            Action::Move(Direction::South),
            Action::Move(Direction::West),
            Action::Move(Direction::East),
            Action::Clean,
        ]
        .iter()
        .map(|a| a.token())
        .collect();
        assert_eq!(s, "NSWEV");
        assert_eq!(Action::Clean.to_string(), "V");
    }

    #[test]
    fn action_predicates() {
        assert!(Action::Clean.is_clean());
        assert!(!Action::Clean.is_move());
        assert!(Action::from(Direction::East).is_move());
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::North),
            Just(Direction::South),
            Just(Direction::West),
            Just(Direction::East),
        ]
    }

    proptest! {
        #[test]
        fn reverse_negates_delta(d in arb_direction()) {
            let (dr, dc) = d.delta();
            prop_assert_eq!(d.reverse().delta(), (-dr, -dc));
            prop_assert_eq!(Direction::from_delta(-dr, -dc), Some(d.reverse()));
            prop_assert_eq!(d.reverse().reverse(), d);
        }

        #[test]
        fn delta_round_trips(d in arb_direction()) {
            let (dr, dc) = d.delta();
            prop_assert_eq!(Direction::from_delta(dr, dc), Some(d));
        }
    }
}
