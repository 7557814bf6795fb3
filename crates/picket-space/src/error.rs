//! Error types for grid construction and layout parsing.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or layout parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: usize,
        /// The maximum allowed value.
        max: u32,
    },
    /// A layout row has a different width than the first row.
    RaggedLayout {
        /// Zero-based row index of the offending line.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A wall mask does not have `rows * cols` entries.
    WallMaskSize {
        /// Required length.
        expected: usize,
        /// Supplied length.
        found: usize,
    },
    /// The layout has no agent marker.
    MissingAgent,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::RaggedLayout {
                row,
                expected,
                found,
            } => {
                write!(f, "layout row {row} has width {found}, expected {expected}")
            }
            Self::WallMaskSize { expected, found } => {
                write!(f, "wall mask has {found} entries, expected {expected}")
            }
            Self::MissingAgent => write!(f, "layout has no agent marker 'P'"),
        }
    }
}

impl Error for GridError {}
