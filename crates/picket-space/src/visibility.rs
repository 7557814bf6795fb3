//! Bounded-depth visibility scanning around the agent.
//!
//! A cell is *Known* iff its shortest 4-connected path distance from the
//! agent, traversing only free cells, is at most the horizon `h`. Walls are
//! always classified as [`Visibility::Wall`]. The scan is a breadth-first
//! search that stops expanding at depth `h`, so it costs O(rows * cols).

use crate::extent::Extent;
use crate::grid::Grid;
use picket_core::{Action, Cell, ShieldError};
use std::collections::VecDeque;
use std::fmt;

/// Classification of one cell in a [`VisibilityMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// A wall, regardless of distance.
    Wall,
    /// A free cell within the horizon.
    Free,
    /// A free cell within the horizon holding an observed adversary.
    Adversary,
    /// The agent's own cell.
    Agent,
    /// A free cell beyond the horizon.
    Unknown,
}

impl Visibility {
    /// Render character used by the text dump.
    pub const fn symbol(self) -> char {
        match self {
            Visibility::Wall => '%',
            Visibility::Free => '.',
            Visibility::Adversary => 'G',
            Visibility::Agent => 'P',
            Visibility::Unknown => '?',
        }
    }
}

/// Per-cell [`Visibility`] for one decision tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMap {
    extent: Extent,
    agent: Cell,
    horizon: u32,
    kinds: Vec<Visibility>,
    depth: Vec<Option<u32>>,
}

impl VisibilityMap {
    /// Classify every cell of `grid` relative to `agent` with depth bound
    /// `horizon`, then overlay adversaries and the agent.
    ///
    /// Overlay order is base (Wall/Free/Unknown), then Adversary, then
    /// Agent, so the agent marker wins if it shares a cell with an
    /// adversary. Adversaries on Unknown, Wall, or out-of-bounds cells are
    /// not observed and leave the base classification untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ShieldError::CellOutOfBounds`] if `agent` is outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use picket_core::Cell;
    /// use picket_space::{Layout, Visibility, VisibilityMap};
    ///
    /// let layout = Layout::parse("P....").unwrap();
    /// let map = VisibilityMap::scan(&layout.grid, Cell::new(0, 0), &[], 2).unwrap();
    /// assert_eq!(map.to_string(), "P..??\n");
    /// assert_eq!(map.get(Cell::new(0, 3)), Some(Visibility::Unknown));
    /// ```
    pub fn scan(
        grid: &Grid,
        agent: Cell,
        adversaries: &[Cell],
        horizon: u32,
    ) -> Result<Self, ShieldError> {
        let extent = grid.extent();
        let start = extent.index(agent).ok_or(ShieldError::CellOutOfBounds {
            cell: agent,
            rows: extent.rows(),
            cols: extent.cols(),
        })?;

        let depth = bounded_bfs(grid, agent, start, horizon);

        let mut kinds: Vec<Visibility> = extent
            .cells()
            .zip(&depth)
            .map(|(cell, d)| {
                if grid.is_wall(cell) {
                    Visibility::Wall
                } else if d.is_some() {
                    Visibility::Free
                } else {
                    Visibility::Unknown
                }
            })
            .collect();

        for &adv in adversaries {
            if let Some(i) = extent.index(adv) {
                if kinds[i] == Visibility::Free {
                    kinds[i] = Visibility::Adversary;
                }
            }
        }
        kinds[start] = Visibility::Agent;

        let map = Self {
            extent,
            agent,
            horizon,
            kinds,
            depth,
        };
        log::trace!("visibility (h={horizon}) around {agent}:\n{map}");
        Ok(map)
    }

    /// The grid shape this map was computed over.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The agent cell the scan was centred on.
    pub fn agent(&self) -> Cell {
        self.agent
    }

    /// The depth bound used by the scan.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Classification of `cell`, or `None` if out of bounds.
    pub fn get(&self, cell: Cell) -> Option<Visibility> {
        self.extent.index(cell).map(|i| self.kinds[i])
    }

    /// Whether `cell` is in bounds and not [`Visibility::Unknown`].
    pub fn is_known(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(v) if v != Visibility::Unknown)
    }

    /// Whether `cell` is in bounds, Known, and not a wall: the cells an
    /// agent or adversary can be modelled as standing on.
    pub fn is_open(&self, cell: Cell) -> bool {
        matches!(
            self.get(cell),
            Some(Visibility::Free | Visibility::Adversary | Visibility::Agent)
        )
    }

    /// The in-bounds open cell reached from `from` by `action`, if any.
    pub fn open_step(&self, from: Cell, action: Action) -> Option<Cell> {
        self.extent
            .step(from, action)
            .filter(|&to| self.is_open(to))
    }

    /// BFS distance from the agent, or `None` for walls and Unknown cells.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.extent.index(cell).and_then(|i| self.depth[i])
    }

    /// Observed adversary cells in row-major order.
    pub fn observed_adversaries(&self) -> Vec<Cell> {
        self.cells_where(Visibility::Adversary)
    }

    /// Number of Known cells (every class except Unknown).
    pub fn known_count(&self) -> usize {
        self.kinds
            .iter()
            .filter(|&&v| v != Visibility::Unknown)
            .count()
    }

    fn cells_where(&self, kind: Visibility) -> Vec<Cell> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == kind)
            .map(|(i, _)| self.extent.cell_at(i))
            .collect()
    }
}

/// Breadth-first search from `agent` through free cells, expanding no
/// further than `horizon` steps. Returns per-cell depth, `None` if unreached.
fn bounded_bfs(grid: &Grid, agent: Cell, start: usize, horizon: u32) -> Vec<Option<u32>> {
    let extent = grid.extent();
    let mut depth = vec![None; extent.cell_count()];
    let mut queue = VecDeque::new();

    depth[start] = Some(0);
    queue.push_back((agent, 0u32));

    while let Some((cell, d)) = queue.pop_front() {
        if d >= horizon {
            continue;
        }
        for nb in extent.neighbours(cell) {
            if !grid.is_free(nb) {
                continue;
            }
            if let Some(i) = extent.index(nb) {
                if depth[i].is_none() {
                    depth[i] = Some(d + 1);
                    queue.push_back((nb, d + 1));
                }
            }
        }
    }
    depth
}

impl fmt::Display for VisibilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.extent.cols() as usize;
        for row in self.kinds.chunks(cols) {
            for v in row {
                write!(f, "{}", v.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
