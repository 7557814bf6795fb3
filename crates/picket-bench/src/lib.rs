//! Benchmark profiles for the Picket safety shield.
//!
//! - [`maze_profile`]: seeded random maze with an agent and adversaries.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use picket_core::Cell;
use picket_space::Grid;
use picket_test_utils::{random_free_cells, random_maze};

/// One benchmark snapshot.
pub struct Profile {
    /// The maze.
    pub grid: Grid,
    /// Agent cell, always free.
    pub agent: Cell,
    /// Adversary cells, free and distinct from the agent.
    pub adversaries: Vec<Cell>,
}

/// A `side` x `side` maze with 25% walls, the agent in the centre, and
/// `adversaries` adversaries, all derived from `seed`.
pub fn maze_profile(side: usize, adversaries: usize, seed: u64) -> Profile {
    let mut grid = random_maze(side, side, 0.25, seed);
    let mid = (side / 2) as i32;
    let agent = Cell::new(mid, mid);
    grid.set_wall(agent, false);
    let adversaries = random_free_cells(&grid, adversaries + 1, seed.wrapping_add(1))
        .into_iter()
        .filter(|&c| c != agent)
        .take(adversaries)
        .collect();
    Profile {
        grid,
        agent,
        adversaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_deterministic() {
        let a = maze_profile(32, 4, 9);
        let b = maze_profile(32, 4, 9);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.adversaries, b.adversaries);
        assert!(a.grid.is_free(a.agent));
        assert!(!a.adversaries.contains(&a.agent));
    }
}
