//! Bounds-checked row-major addressing for 2D cell buffers.
//!
//! Every per-cell buffer in Picket (walls, visibility, occupancy, safety
//! values) is a flat `Vec` indexed through an [`Extent`]. Out-of-bounds
//! cells resolve to `None`; there is no clamping and no wrap-around.

use crate::error::GridError;
use picket_core::{Action, Cell};
use smallvec::SmallVec;

/// The `rows x cols` shape of a grid and its flat index arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    rows: u32,
    cols: u32,
}

impl Extent {
    /// Maximum dimension size: cells use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an extent, rejecting empty or oversized shapes.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let rows = u32::try_from(rows)
            .ok()
            .filter(|&r| r <= Self::MAX_DIM)
            .ok_or(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            })?;
        let cols = u32::try_from(cols)
            .ok()
            .filter(|&c| c <= Self::MAX_DIM)
            .ok_or(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            })?;
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && cell.row < self.rows as i32
            && cell.col < self.cols as i32
    }

    /// Flat row-major index of `cell`, or `None` if out of bounds.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// The cell at flat index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn cell_at(&self, index: usize) -> Cell {
        assert!(index < self.cell_count(), "index {index} out of range");
        let cols = self.cols as usize;
        Cell::new((index / cols) as i32, (index % cols) as i32)
    }

    /// The in-bounds cell reached from `from` by `action`, if any.
    pub fn step(&self, from: Cell, action: Action) -> Option<Cell> {
        action.apply(from).filter(|&to| self.contains(to))
    }

    /// In-bounds 4-connected neighbours of `cell` in N, S, E, W order.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Action::MOVES
            .into_iter()
            .filter_map(|a| self.step(cell, a))
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }
}
