//! Picket: a bounded-horizon local safety shield for grid pursuit games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Picket sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use picket::prelude::*;
//!
//! let layout = Layout::parse(
//!     "%%%%%%\n\
//!      %....%\n\
//!      %.PG.%\n\
//!      %....%\n\
//!      %%%%%%",
//! )
//! .unwrap();
//! let agent = layout.require_agent().unwrap();
//!
//! let shield = LocalShield::builder()
//!     .horizon(2)
//!     .metric(MetricKind::MinTimeToCapture)
//!     .build()
//!     .unwrap();
//! let legal = layout.grid.legal_actions(agent);
//! let decision = shield
//!     .decide(&layout.grid, agent, &layout.adversaries, &legal)
//!     .unwrap();
//!
//! assert!(!decision.safe_actions.contains(&Action::East));
//! assert!(decision.is_restricted());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `picket-core` | Cells, actions, shared errors |
//! | [`space`] | `picket-space` | Grids, layouts, visibility scanning |
//! | [`shield`] | `picket-shield` | Occupancy, propagation, predicate, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cells, actions, and shared error types (`picket-core`).
pub use picket_core as types;

/// Grids, ASCII layouts, and visibility scanning (`picket-space`).
pub use picket_space as space;

/// The shielding pipeline and its configuration (`picket-shield`).
///
/// [`shield::LocalShield`] is the usual entry point; the individual stages
/// ([`shield::build_occupancy`], [`shield::propagate`],
/// [`shield::admissible`]) are public for inspection and testing.
pub use picket_shield as shield;

/// Common imports for typical usage.
///
/// ```rust
/// use picket::prelude::*;
/// ```
pub mod prelude {
    pub use picket_core::{Action, Cell, ShieldError};
    pub use picket_shield::{
        ConfigError, LocalShield, MetricKind, MinTimeToCapture, ProbabilityClass, SafetyColor,
        ShieldConfig, ShieldDecision,
    };
    pub use picket_space::{Grid, GridError, Layout, VisibilityMap};
}
