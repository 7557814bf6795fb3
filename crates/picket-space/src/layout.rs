//! ASCII layout parsing.
//!
//! A layout is a block of equal-width lines, one per grid row:
//!
//! ```text
//! %%%%%
//! %P.G%
//! %%%%%
//! ```
//!
//! `%` is a wall, `P` the agent, `G` an adversary; every other character
//! (`.`, `o`, space, ...) is a free cell. Blank lines are skipped.

use crate::error::GridError;
use crate::grid::Grid;
use picket_core::Cell;

/// A parsed layout: the grid plus the agent and adversary markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Wall/free terrain. Marker cells are free.
    pub grid: Grid,
    /// Position of the last `P` marker, if any.
    pub agent: Option<Cell>,
    /// Positions of every `G` marker in row-major order.
    pub adversaries: Vec<Cell>,
}

impl Layout {
    /// Parse a layout from text.
    ///
    /// # Examples
    ///
    /// ```
    /// use picket_core::Cell;
    /// use picket_space::Layout;
    ///
    /// let layout = Layout::parse("%%%%\n%PG%\n%%%%").unwrap();
    /// assert_eq!(layout.agent, Some(Cell::new(1, 1)));
    /// assert_eq!(layout.adversaries, vec![Cell::new(1, 2)]);
    /// assert_eq!(layout.grid.wall_count(), 10);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());

        let mut walls = Vec::with_capacity(rows * cols);
        let mut agent = None;
        let mut adversaries = Vec::new();

        for (r, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::RaggedLayout {
                    row: r,
                    expected: cols,
                    found: width,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                match ch {
                    '%' => {
                        walls.push(true);
                        continue;
                    }
                    'P' => agent = Some(cell),
                    'G' => adversaries.push(cell),
                    _ => {}
                }
                walls.push(false);
            }
        }

        let grid = Grid::from_walls(rows, cols, walls)?;
        Ok(Self {
            grid,
            agent,
            adversaries,
        })
    }

    /// The agent position, or [`GridError::MissingAgent`].
    pub fn require_agent(&self) -> Result<Cell, GridError> {
        self.agent.ok_or(GridError::MissingAgent)
    }
}
