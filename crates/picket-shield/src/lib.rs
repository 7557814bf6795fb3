//! Bounded-horizon local safety shield.
//!
//! Given a grid snapshot, the agent's cell, and the observed adversary
//! cells, the shield answers which of the agent's legal actions keep it
//! safe over the next `h` steps. Each decision runs four stages:
//!
//! 1. [`VisibilityMap::scan`](picket_space::VisibilityMap::scan) classifies
//!    cells within path distance `h` as Known.
//! 2. [`build_occupancy`] expands the observed adversaries forward into
//!    the layers `G_0 ..= G_h` of possible positions.
//! 3. [`propagate`] computes safety values `S_h` down to `S_0` by backward
//!    induction under a [`Metric`].
//! 4. [`admissible`] keeps the actions whose one-step value `S_1` is safe.
//!
//! [`LocalShield`] bundles the stages behind a validated [`ShieldConfig`].
//! [`SafetyColor`] and [`GlobalShieldQuery`] cover rendering and the
//! externally supplied probabilistic shield.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backprop;
pub mod color;
pub mod config;
pub mod global;
pub mod metric;
pub mod occupancy;
pub mod predicate;
pub mod shield;

pub use backprop::{propagate, SafetyLayer, SafetyValueField};
pub use color::{adjacent_colors, SafetyColor};
pub use config::{ConfigError, ShieldConfig};
pub use global::{adversary_directions, GlobalShieldQuery, ProbabilisticShield};
pub use metric::{Metric, MetricKind, MinTimeToCapture, ProbabilityClass};
pub use occupancy::{build_occupancy, OccupancyLayer, OccupancySequence};
pub use predicate::admissible;
pub use shield::{evaluate, Evaluation, LocalShield, LocalShieldBuilder, ShieldDecision};
