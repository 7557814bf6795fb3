//! Test utilities and mock types for Picket development.
//!
//! Provides standard layouts and seeded random mazes ([`fixtures`]) and a
//! table-driven [`MockProbabilisticShield`] for exercising
//! [`GlobalShieldQuery`](picket_shield::GlobalShieldQuery).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use picket_core::{Action, Cell};
use picket_shield::ProbabilisticShield;

pub use fixtures::{open_grid, random_free_cells, random_maze, Scenario};

/// Mock implementation of [`ProbabilisticShield`].
///
/// Looks up `(agent, action)` in a table and falls back to a default
/// probability. Counts every query so tests can assert short-circuits.
pub struct MockProbabilisticShield {
    table: HashMap<(Cell, Action), f64>,
    default: f64,
    queries: AtomicUsize,
}

impl MockProbabilisticShield {
    pub fn new(default: f64) -> Self {
        Self {
            table: HashMap::new(),
            default,
            queries: AtomicUsize::new(0),
        }
    }

    /// Set the probability returned for `action` taken from `agent`.
    pub fn set(&mut self, agent: Cell, action: Action, p: f64) -> &mut Self {
        self.table.insert((agent, action), p);
        self
    }

    /// Number of queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl ProbabilisticShield for MockProbabilisticShield {
    fn probability_of_capture(
        &self,
        agent: Cell,
        action: Action,
        _adversaries: &[Cell],
        _adversary_directions: &[Action],
    ) -> f64 {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.table
            .get(&(agent, action))
            .copied()
            .unwrap_or(self.default)
    }
}
