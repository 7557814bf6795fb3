//! Adapter for an externally supplied probabilistic shield.
//!
//! A global shield is precomputed outside this crate (for instance by a
//! model checker) and queried per move. [`GlobalShieldQuery`] applies the
//! short-circuits a caller needs around it: Stop is never offered, and an
//! adversary that stood still last tick makes the query meaningless.

use picket_core::{Action, Cell, ShieldError};
use picket_space::Grid;

use crate::color::SafetyColor;
use crate::metric::ProbabilityClass;

/// A source of capture probabilities for single agent moves.
pub trait ProbabilisticShield {
    /// Probability in `[0, 1]` that `action` from `agent` leads to capture,
    /// given adversary positions and their last movement directions.
    fn probability_of_capture(
        &self,
        agent: Cell,
        action: Action,
        adversaries: &[Cell],
        adversary_directions: &[Action],
    ) -> f64;
}

/// Per-move queries against a [`ProbabilisticShield`].
#[derive(Debug)]
pub struct GlobalShieldQuery<'a, S: ?Sized> {
    shield: &'a S,
    threshold: f64,
}

impl<'a, S: ProbabilisticShield + ?Sized> GlobalShieldQuery<'a, S> {
    /// Wrap `shield` with the default threshold of 0.2.
    pub fn new(shield: &'a S) -> Self {
        Self {
            shield,
            threshold: ProbabilityClass::DEFAULT_THRESHOLD,
        }
    }

    /// Replace the safety threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The safety threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Capture probability for one action.
    ///
    /// Stop yields 1.0 and any stationary adversary yields 0.0, both
    /// without querying the shield.
    pub fn probability(
        &self,
        agent: Cell,
        action: Action,
        adversaries: &[Cell],
        adversary_directions: &[Action],
    ) -> f64 {
        if action == Action::Stop {
            return 1.0;
        }
        if adversary_directions.contains(&Action::Stop) {
            return 0.0;
        }
        self.shield
            .probability_of_capture(agent, action, adversaries, adversary_directions)
    }

    /// Probabilities for each move onto a free in-bounds cell, in
    /// [`Action::MOVES`] order.
    pub fn action_probabilities(
        &self,
        grid: &Grid,
        agent: Cell,
        adversaries: &[Cell],
        adversary_directions: &[Action],
    ) -> Vec<(Action, f64)> {
        let extent = grid.extent();
        Action::MOVES
            .into_iter()
            .filter(|&a| extent.step(agent, a).is_some_and(|c| grid.is_free(c)))
            .map(|a| (a, self.probability(agent, a, adversaries, adversary_directions)))
            .collect()
    }

    /// Moves whose capture probability lies in `[0, threshold]`.
    pub fn safe_actions(
        &self,
        grid: &Grid,
        agent: Cell,
        adversaries: &[Cell],
        adversary_directions: &[Action],
    ) -> Vec<Action> {
        self.action_probabilities(grid, agent, adversaries, adversary_directions)
            .into_iter()
            .filter(|&(_, p)| (0.0..=self.threshold).contains(&p))
            .map(|(a, _)| a)
            .collect()
    }

    /// Colour of each offered move.
    ///
    /// # Errors
    ///
    /// Returns [`ShieldError::ProbabilityOutOfRange`] if the shield reports
    /// a probability outside the colour scale for any offered move.
    pub fn colors(
        &self,
        grid: &Grid,
        agent: Cell,
        adversaries: &[Cell],
        adversary_directions: &[Action],
    ) -> Result<Vec<(Action, SafetyColor)>, ShieldError> {
        self.action_probabilities(grid, agent, adversaries, adversary_directions)
            .into_iter()
            .map(|(a, p)| {
                let color = SafetyColor::try_from_probability(p).inspect_err(|e| {
                    log::warn!("global shield returned {e} for {a}");
                })?;
                Ok((a, color))
            })
            .collect()
    }
}

/// Direction each adversary moved between two consecutive observations.
///
/// Pairs that are not 4-adjacent or identical map to `None`.
pub fn adversary_directions(previous: &[Cell], current: &[Cell]) -> Vec<Option<Action>> {
    previous
        .iter()
        .zip(current)
        .map(|(&from, &to)| Action::between(from, to))
        .collect()
}
