//! Cell kinds of a grid world.

/// What occupies a single grid cell.
///
/// Cell kinds are fixed once a world is loaded. Cleaning a dirty cell
/// does not turn it into [`CellKind::Free`]; the search engines track
/// which dirty cells have been serviced on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Open floor with nothing to do.
    Free,
    /// Impassable cell.
    Obstacle,
    /// Floor that needs a clean action.
    Dirty,
    /// The robot's starting cell. Passable and clean.
    Start,
}

impl CellKind {
    /// Whether the robot may enter this cell.
    pub fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Whether this cell needs cleaning.
    pub fn is_dirty(self) -> bool {
        matches!(self, Self::Dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_obstacles_block() {
        assert!(CellKind::Free.is_passable());
        assert!(CellKind::Dirty.is_passable());
        assert!(CellKind::Start.is_passable());
        assert!(!CellKind::Obstacle.is_passable());
    }

    #[test]
    fn only_dirty_is_dirty() {
        assert!(CellKind::Dirty.is_dirty());
        assert!(!CellKind::Start.is_dirty());
        assert!(!CellKind::Free.is_dirty());
        assert!(!CellKind::Obstacle.is_dirty());
    }
}
