//! Rectangular 4-connected grid world (N/S/W/E).

use dustbot_core::{CellKind, Coord, Direction, PlanError, StartRejection, WorldError};
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Neighbour list for one cell: at most four `(direction, coord)` pairs.
pub type Neighbours = SmallVec<[(Direction, Coord); 4]>;

/// An immutable rectangular grid of [`CellKind`]s.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Neighbours are the four cardinal directions and
/// the grid edge is a hard wall: out-of-bounds neighbours are omitted,
/// so corners have at most 2 neighbours and edges at most 3.
///
/// The grid exposes no mutation once built. Which dirty cells have been
/// cleaned is search-engine state, not world state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    rows: u32,
    cols: u32,
    /// Row-major cell storage, `rows * cols` long.
    cells: Vec<CellKind>,
}

impl GridWorld {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a world from row-major cell data.
    ///
    /// Returns `Err(WorldError::EmptyWorld)` if either dimension is 0,
    /// `Err(WorldError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(WorldError::CellCountMismatch)` if `cells.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dustbot_core::{CellKind, Coord};
    /// use dustbot_space::GridWorld;
    ///
    /// let world = GridWorld::new(1, 3, vec![CellKind::Start, CellKind::Free, CellKind::Dirty]).unwrap();
    /// assert_eq!(world.dimensions(), (1, 3));
    /// assert_eq!(world.cell_at(Coord::new(0, 2)), Some(CellKind::Dirty));
    /// assert_eq!(world.cell_at(Coord::new(1, 0)), None);
    /// ```
    pub fn new(rows: u32, cols: u32, cells: Vec<CellKind>) -> Result<Self, WorldError> {
        if rows == 0 || cols == 0 {
            return Err(WorldError::EmptyWorld);
        }
        if rows > Self::MAX_DIM {
            return Err(WorldError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(WorldError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let expected = (rows as usize) * (cols as usize);
        if cells.len() != expected {
            return Err(WorldError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// A world where every cell has the same kind.
    pub fn filled(rows: u32, cols: u32, kind: CellKind) -> Result<Self, WorldError> {
        let n = (rows as usize) * (cols as usize);
        Self::new(rows, cols, vec![kind; n])
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of cells, obstacles included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` lies inside the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as u32) < self.rows
            && (coord.col as u32) < self.cols
    }

    /// Row-major rank of an in-bounds coordinate, `None` otherwise.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some((coord.row as usize) * (self.cols as usize) + (coord.col as usize))
    }

    /// Inverse of [`rank`](Self::rank). `rank` must be `< cell_count()`.
    pub fn coord_of(&self, rank: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((rank / cols) as i32, (rank % cols) as i32)
    }

    /// The kind of the cell at `coord`, or `None` when out of bounds.
    pub fn cell_at(&self, coord: Coord) -> Option<CellKind> {
        self.rank(coord).map(|i| self.cells[i])
    }

    /// Like [`cell_at`](Self::cell_at), but out-of-bounds is an error.
    pub fn try_cell_at(&self, coord: Coord) -> Result<CellKind, WorldError> {
        self.cell_at(coord).ok_or(WorldError::CoordOutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// In bounds and not an obstacle.
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.cell_at(coord).is_some_and(CellKind::is_passable)
    }

    /// In bounds and dirty.
    pub fn is_dirty(&self, coord: Coord) -> bool {
        self.cell_at(coord).is_some_and(CellKind::is_dirty)
    }

    /// Passable neighbours of `coord` in [`Direction::ALL`] order.
    ///
    /// Filters bounds and obstacles only; visited-set filtering belongs
    /// to the caller.
    pub fn passable_neighbours(&self, coord: Coord) -> Neighbours {
        coord
            .neighbours()
            .into_iter()
            .filter(|&(_, nb)| self.is_passable(nb))
            .collect()
    }

    /// Check that `start` is a legal robot position.
    pub fn validate_start(&self, start: Coord) -> Result<(), PlanError> {
        match self.cell_at(start) {
            None => Err(PlanError::InvalidStart {
                coord: start,
                reason: StartRejection::OutOfBounds,
            }),
            Some(CellKind::Obstacle) => Err(PlanError::InvalidStart {
                coord: start,
                reason: StartRejection::Obstacle,
            }),
            Some(_) => Ok(()),
        }
    }

    /// All cells in row-major order.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// Every dirty cell in row-major order, reachable or not.
    pub fn dirty_cells(&self) -> Vec<Coord> {
        self.canonical_ordering()
            .filter(|&c| self.is_dirty(c))
            .collect()
    }

    /// Cells 4-connected to `start` through passable cells, in
    /// breadth-first discovery order.
    ///
    /// Empty when `start` itself is not passable.
    pub fn reachable_from(&self, start: Coord) -> IndexSet<Coord> {
        let mut seen = IndexSet::new();
        if !self.is_passable(start) {
            return seen;
        }
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            for (_, nb) in self.passable_neighbours(c) {
                if seen.insert(nb) {
                    queue.push_back(nb);
                }
            }
        }
        seen
    }

    /// Render the grid in map-file characters, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for (i, kind) in self.cells.iter().enumerate() {
            out.push(crate::map::cell_to_char(*kind));
            if (i + 1) % self.cols as usize == 0 {
                out.push('\n');
            }
        }
        out
    }
}
