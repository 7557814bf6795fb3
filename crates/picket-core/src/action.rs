//! The closed [`Action`] set and its displacement table.

use crate::cell::Cell;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One agent move per decision tick.
///
/// The set is closed: every action maps to a fixed `(row_offset,
/// col_offset)` through [`Action::displacement`], so no string dispatch or
/// invalid-action state exists past the parsing boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Action {
    /// Move one cell north (row - 1).
    North = 0,
    /// Move one cell south (row + 1).
    South = 1,
    /// Move one cell east (col + 1).
    East = 2,
    /// Move one cell west (col - 1).
    West = 3,
    /// Stay in place.
    Stop = 4,
}

/// Displacement table indexed by `Action as usize`.
const DISPLACEMENTS: [(i32, i32); 5] = [(-1, 0), (1, 0), (0, 1), (0, -1), (0, 0)];

impl Action {
    /// Every action, in table order.
    pub const ALL: [Action; 5] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Stop,
    ];

    /// The four moves that change the agent's cell.
    pub const MOVES: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

    /// The `(row_offset, col_offset)` for this action.
    pub const fn displacement(self) -> (i32, i32) {
        DISPLACEMENTS[self as usize]
    }

    /// The cell reached from `from` by this action, without grid bounds
    /// checks. `None` only on `i32` overflow.
    pub fn apply(self, from: Cell) -> Option<Cell> {
        let (dr, dc) = self.displacement();
        from.offset(dr, dc)
    }

    /// Infer the action that moved an agent from `from` to `to`.
    ///
    /// Returns `None` when the two cells are not equal or 4-adjacent
    /// (e.g. a teleport after respawn).
    pub fn between(from: Cell, to: Cell) -> Option<Action> {
        let delta = (to.row.checked_sub(from.row)?, to.col.checked_sub(from.col)?);
        Action::ALL.into_iter().find(|a| a.displacement() == delta)
    }

    /// The canonical label (`"North"`, ..., `"Stop"`).
    pub const fn label(self) -> &'static str {
        match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action label that is not one of the five canonical names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseActionError {
    /// The rejected label.
    pub label: String,
}

impl fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised action label '{}'", self.label)
    }
}

impl Error for ParseActionError {}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| ParseActionError {
                label: s.to_string(),
            })
    }
}
