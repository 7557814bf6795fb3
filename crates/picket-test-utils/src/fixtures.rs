//! Reusable layouts and seeded grid generators.
//!
//! - [`Scenario`]: named ASCII layouts covering the standard shield cases.
//! - [`open_grid`]: wall-free grid of a given size.
//! - [`random_maze`]: deterministic wall scatter from a seed.
//! - [`random_free_cells`]: deterministic picks of free cells from a seed.

use picket_core::Cell;
use picket_space::{Grid, Layout};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Named ASCII layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Agent sealed in by walls; only Stop is legal.
    Enclosed,
    /// Dead-end corridor with an adversary at the far end.
    Corridor,
    /// Agent with one adversary on each side.
    Surrounded,
    /// Small classic maze with two adversaries.
    SmallMaze,
}

const ENCLOSED: &str = "\
%%%%%
%%%%%
%%P%%
%%%%%
%%%%%";

const CORRIDOR: &str = "\
%%%%%%%%
%P....G%
%%%%%%%%";

const SURROUNDED: &str = "\
.....
..G..
.GPG.
..G..
.....";

const SMALL_MAZE: &str = "\
%%%%%%%%%%
%G...%...%
%.%%.%.%.%
%.%......%
%...%%.%.%
%.%....%G%
%.%.%%.%.%
%....P...%
%%%%%%%%%%";

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Enclosed,
        Scenario::Corridor,
        Scenario::Surrounded,
        Scenario::SmallMaze,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Scenario::Enclosed => ENCLOSED,
            Scenario::Corridor => CORRIDOR,
            Scenario::Surrounded => SURROUNDED,
            Scenario::SmallMaze => SMALL_MAZE,
        }
    }

    /// Parse the layout. The built-in layouts are always well formed.
    pub fn layout(self) -> Layout {
        Layout::parse(self.text()).expect("built-in layout parses")
    }

    /// The agent cell of the layout.
    pub fn agent(self) -> Cell {
        self.layout().require_agent().expect("built-in layout has an agent")
    }
}

/// A `rows` x `cols` grid with no walls.
pub fn open_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols).expect("open grid dimensions are valid")
}

/// A grid whose cells are walls with probability `density`, seeded by
/// `seed`. The same arguments always yield the same grid.
pub fn random_maze(rows: usize, cols: usize, density: f64, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let walls = (0..rows * cols).map(|_| rng.gen_bool(density)).collect();
    Grid::from_walls(rows, cols, walls).expect("random maze dimensions are valid")
}

/// Up to `count` distinct free cells of `grid`, chosen by `seed`.
pub fn random_free_cells(grid: &Grid, count: usize, seed: u64) -> Vec<Cell> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut free: Vec<Cell> = grid
        .extent()
        .cells()
        .filter(|&c| grid.is_free(c))
        .collect();
    free.shuffle(&mut rng);
    free.truncate(count);
    free
}
