//! Safety-value encodings behind the [`Metric`] trait.
//!
//! The back-propagator and the predicate are written once against
//! [`Metric`]; the two encodings differ only in their value type, their
//! extreme values, how per-action outcomes combine, and the safety test.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A safety-value encoding for the backward induction.
pub trait Metric {
    /// Per-cell safety value.
    type Value: Copy + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Value of a cell an adversary may occupy at relative step `step`.
    fn worst_value(&self, step: u32) -> Self::Value;

    /// Value of a cell no adversary can reach by the end of `horizon`.
    fn best_value(&self, horizon: u32) -> Self::Value;

    /// Pick the agent's preferred of two one-step outcomes.
    fn combine(&self, a: Self::Value, b: Self::Value) -> Self::Value;

    /// Whether `value` passes the admissibility test for `horizon`.
    fn is_safe(&self, value: Self::Value, horizon: u32) -> bool;

    /// Lossless-enough conversion for logs and reports.
    fn to_f64(&self, value: Self::Value) -> f64;
}

/// Capture-probability encoding: values in `[0, 1]`, lower is safer.
///
/// Under worst-case adversaries every cell is either reachable (1.0) or
/// not (0.0), so any threshold below 1.0 behaves the same.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityClass {
    threshold: f64,
}

impl ProbabilityClass {
    /// Default admissibility threshold.
    pub const DEFAULT_THRESHOLD: f64 = 0.2;

    /// Create the metric with an admissibility threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The admissibility threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ProbabilityClass {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Metric for ProbabilityClass {
    type Value = f64;

    fn name(&self) -> &'static str {
        "ProbabilityClass"
    }

    fn worst_value(&self, _step: u32) -> f64 {
        1.0
    }

    fn best_value(&self, _horizon: u32) -> f64 {
        0.0
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        a.min(b)
    }

    fn is_safe(&self, value: f64, _horizon: u32) -> bool {
        value <= self.threshold
    }

    fn to_f64(&self, value: f64) -> f64 {
        value
    }
}

/// Earliest-capture encoding: the first relative step at which the agent
/// may be caught, higher is safer.
///
/// A cell an adversary may hold at step `t` is worth `t`; a cell that
/// survives the whole lookahead is worth `h + 1`, so `value > h` reads as
/// "not caught within the horizon".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinTimeToCapture;

impl Metric for MinTimeToCapture {
    type Value = u32;

    fn name(&self) -> &'static str {
        "MinTimeToCapture"
    }

    fn worst_value(&self, step: u32) -> u32 {
        step
    }

    fn best_value(&self, horizon: u32) -> u32 {
        horizon + 1
    }

    fn combine(&self, a: u32, b: u32) -> u32 {
        a.max(b)
    }

    fn is_safe(&self, value: u32, horizon: u32) -> bool {
        value > horizon
    }

    fn to_f64(&self, value: u32) -> f64 {
        f64::from(value)
    }
}

/// Serializable selector for a [`Metric`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// [`ProbabilityClass`].
    #[default]
    ProbabilityClass,
    /// [`MinTimeToCapture`].
    MinTimeToCapture,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProbabilityClass => f.write_str("probability_class"),
            Self::MinTimeToCapture => f.write_str("min_time_to_capture"),
        }
    }
}
