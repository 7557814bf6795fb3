//! Safety colour buckets for rendering capture probabilities.
//!
//! The bucket table is fixed and independent of the configured metric.

use std::fmt;

use picket_core::{Action, Cell, ShieldError};
use picket_space::Grid;

/// Six-level colour scale from safe (green) to unsafe (red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SafetyColor {
    /// Probability in `(-0.002, 0.1]`.
    Green,
    /// Probability in `(0.1, 0.3]`.
    Yellow,
    /// Probability in `(0.3, 0.5]`.
    Gold,
    /// Probability in `(0.5, 0.7]`.
    Orange,
    /// Probability in `(0.7, 0.9]`.
    OrangeRed,
    /// Probability in `(0.9, 1.002]`.
    Red,
}

/// Exclusive lower bound of the first bucket.
const LOWER_BOUND: f64 = -0.002;

/// Inclusive upper bound of each bucket, in class order.
const UPPER_BOUNDS: [(f64, SafetyColor); 6] = [
    (0.1, SafetyColor::Green),
    (0.3, SafetyColor::Yellow),
    (0.5, SafetyColor::Gold),
    (0.7, SafetyColor::Orange),
    (0.9, SafetyColor::OrangeRed),
    (1.002, SafetyColor::Red),
];

impl SafetyColor {
    /// All colours, safest first.
    pub const ALL: [SafetyColor; 6] = [
        SafetyColor::Green,
        SafetyColor::Yellow,
        SafetyColor::Gold,
        SafetyColor::Orange,
        SafetyColor::OrangeRed,
        SafetyColor::Red,
    ];

    /// Bucket a capture probability.
    ///
    /// # Errors
    ///
    /// Returns [`ShieldError::ProbabilityOutOfRange`] for NaN or values
    /// outside `(-0.002, 1.002]`.
    pub fn try_from_probability(p: f64) -> Result<Self, ShieldError> {
        if p > LOWER_BOUND {
            if let Some(&(_, color)) = UPPER_BOUNDS.iter().find(|&&(upper, _)| p <= upper) {
                return Ok(color);
            }
        }
        Err(ShieldError::ProbabilityOutOfRange { value: p })
    }

    /// Bucket a capture probability that is known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `p` is NaN or outside `(-0.002, 1.002]`.
    pub fn from_probability(p: f64) -> Self {
        match Self::try_from_probability(p) {
            Ok(color) => color,
            Err(e) => panic!("{e}"),
        }
    }

    /// Zero-based class index, 0 = Green.
    pub fn class_index(self) -> usize {
        self as usize
    }

    /// Lower-case colour name.
    pub const fn name(self) -> &'static str {
        match self {
            SafetyColor::Green => "green",
            SafetyColor::Yellow => "yellow",
            SafetyColor::Gold => "gold",
            SafetyColor::Orange => "orange",
            SafetyColor::OrangeRed => "orangered",
            SafetyColor::Red => "red",
        }
    }
}

impl fmt::Display for SafetyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colour every free in-bounds neighbour of `agent`: green if the move
/// leading there is in `safe_actions`, red otherwise.
///
/// Results follow [`Action::MOVES`] order.
pub fn adjacent_colors(
    grid: &Grid,
    agent: Cell,
    safe_actions: &[Action],
) -> Vec<(Cell, Action, SafetyColor)> {
    let extent = grid.extent();
    Action::MOVES
        .into_iter()
        .filter_map(|a| {
            let to = extent.step(agent, a).filter(|&c| grid.is_free(c))?;
            let p = if safe_actions.contains(&a) { 0.0 } else { 1.0 };
            Some((to, a, SafetyColor::from_probability(p)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bucket_upper_bounds_are_inclusive() {
        assert_eq!(SafetyColor::from_probability(0.1), SafetyColor::Green);
        assert_eq!(SafetyColor::from_probability(0.3), SafetyColor::Yellow);
        assert_eq!(SafetyColor::from_probability(0.5), SafetyColor::Gold);
        assert_eq!(SafetyColor::from_probability(0.7), SafetyColor::Orange);
        assert_eq!(SafetyColor::from_probability(0.9), SafetyColor::OrangeRed);
        assert_eq!(SafetyColor::from_probability(1.0), SafetyColor::Red);
    }

    #[test]
    fn bucket_interiors() {
        assert_eq!(SafetyColor::from_probability(0.0), SafetyColor::Green);
        assert_eq!(SafetyColor::from_probability(-0.001), SafetyColor::Green);
        assert_eq!(SafetyColor::from_probability(0.15), SafetyColor::Yellow);
        assert_eq!(SafetyColor::from_probability(0.95), SafetyColor::Red);
        assert_eq!(SafetyColor::from_probability(1.002), SafetyColor::Red);
    }

    #[test]
    fn out_of_range_is_an_error() {
        for p in [-0.002, -1.0, 1.0021, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SafetyColor::try_from_probability(p),
                Err(ShieldError::ProbabilityOutOfRange { .. })
            ));
        }
    }

    #[test]
    #[should_panic(expected = "probability")]
    fn from_probability_panics_out_of_range() {
        SafetyColor::from_probability(2.0);
    }

    #[test]
    fn class_index_follows_order() {
        for (i, c) in SafetyColor::ALL.into_iter().enumerate() {
            assert_eq!(c.class_index(), i);
        }
        assert_eq!(SafetyColor::OrangeRed.to_string(), "orangered");
    }

    #[test]
    fn adjacent_colors_skip_walls_and_edges() {
        let grid = picket_space::Layout::parse("P.\n%.").unwrap().grid;
        let colors = adjacent_colors(&grid, Cell::new(0, 0), &[Action::East]);
        assert_eq!(
            colors,
            vec![(Cell::new(0, 1), Action::East, SafetyColor::Green)]
        );
        let colors = adjacent_colors(&grid, Cell::new(0, 0), &[Action::Stop]);
        assert_eq!(colors[0].2, SafetyColor::Red);
    }

    proptest! {
        #[test]
        fn buckets_are_monotone(a in -0.0019f64..=1.002, b in -0.0019f64..=1.002) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                SafetyColor::from_probability(lo) <= SafetyColor::from_probability(hi)
            );
        }
    }
}
