//! Error types for shield evaluation.

use crate::cell::Cell;
use std::error::Error;
use std::fmt;

/// Errors from running the shield pipeline or its boundary helpers.
///
/// Inputs come from a trusted game snapshot, so these signal programmer
/// errors on the caller's side rather than transient conditions.
#[derive(Clone, Debug, PartialEq)]
pub enum ShieldError {
    /// A cell handed to the shield lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A probability outside `(-0.002, 1.002]` (or NaN) was classified.
    ProbabilityOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ShieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::ProbabilityOutOfRange { value } => {
                write!(f, "probability {value} outside (-0.002, 1.002]")
            }
        }
    }
}

impl Error for ShieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_cell() {
        let e = ShieldError::CellOutOfBounds {
            cell: Cell::new(-1, 3),
            rows: 5,
            cols: 5,
        };
        assert_eq!(e.to_string(), "cell (-1, 3) out of bounds: [0, 5) x [0, 5)");
    }
}
