//! The immutable wall/free grid of one game snapshot.

use crate::error::GridError;
use crate::extent::Extent;
use picket_core::{Action, Cell};

/// Static terrain of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Traversable by agents and adversaries.
    Free,
    /// Never traversable.
    Wall,
}

/// A fixed `rows x cols` matrix of [`Terrain`].
///
/// A grid is built once per snapshot and only borrowed by the shield, so it
/// is immutable for the duration of every computation.
///
/// # Examples
///
/// ```
/// use picket_core::{Action, Cell};
/// use picket_space::Grid;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// grid.set_wall(Cell::new(0, 1), true);
///
/// // From the top-left corner only South and Stop remain.
/// assert_eq!(grid.legal_actions(Cell::new(0, 0)), vec![Action::South, Action::Stop]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    extent: Extent,
    walls: Vec<bool>,
}

impl Grid {
    /// Create an all-free grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let extent = Extent::new(rows, cols)?;
        Ok(Self {
            extent,
            walls: vec![false; extent.cell_count()],
        })
    }

    /// Create a grid from a row-major wall mask of `rows * cols` entries.
    pub fn from_walls(rows: usize, cols: usize, walls: Vec<bool>) -> Result<Self, GridError> {
        let extent = Extent::new(rows, cols)?;
        if walls.len() != extent.cell_count() {
            return Err(GridError::WallMaskSize {
                expected: extent.cell_count(),
                found: walls.len(),
            });
        }
        Ok(Self { extent, walls })
    }

    /// Mark or clear a wall. Returns `false` if `cell` is out of bounds.
    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> bool {
        match self.extent.index(cell) {
            Some(i) => {
                self.walls[i] = wall;
                true
            }
            None => false,
        }
    }

    /// The grid's shape and index arithmetic.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.extent.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.extent.cols()
    }

    /// Terrain at `cell`, or `None` if out of bounds.
    pub fn terrain(&self, cell: Cell) -> Option<Terrain> {
        self.extent.index(cell).map(|i| {
            if self.walls[i] {
                Terrain::Wall
            } else {
                Terrain::Free
            }
        })
    }

    /// Whether `cell` is an in-bounds wall.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.terrain(cell) == Some(Terrain::Wall)
    }

    /// Whether `cell` is an in-bounds free cell.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.terrain(cell) == Some(Terrain::Free)
    }

    /// Legal actions from `cell`: every move onto an in-bounds free cell,
    /// followed by [`Action::Stop`], which is always legal.
    pub fn legal_actions(&self, cell: Cell) -> Vec<Action> {
        Action::MOVES
            .into_iter()
            .filter(|&a| a.apply(cell).is_some_and(|to| self.is_free(to)))
            .chain(std::iter::once(Action::Stop))
            .collect()
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }
}
