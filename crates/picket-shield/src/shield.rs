//! The full shielding pipeline: scan, occupancy, propagation, admissibility.
//!
//! [`evaluate`] runs the first three stages for any [`Metric`] and keeps
//! every intermediate result for inspection. [`LocalShield`] wraps a
//! validated [`ShieldConfig`] and turns one game snapshot into a
//! [`ShieldDecision`].

use picket_core::{Action, Cell, ShieldError};
use picket_space::{Grid, VisibilityMap};

use crate::backprop::{propagate, SafetyValueField};
use crate::config::{ConfigError, ShieldConfig};
use crate::metric::{Metric, MetricKind, MinTimeToCapture, ProbabilityClass};
use crate::occupancy::{build_occupancy, OccupancySequence};
use crate::predicate::admissible;

/// Intermediate results of one shield evaluation.
#[derive(Clone, Debug)]
pub struct Evaluation<V> {
    /// Visibility classification around the agent.
    pub visibility: VisibilityMap,
    /// Possible adversary positions `G_0 ..= G_h`.
    pub occupancy: OccupancySequence,
    /// Safety values `S_0 ..= S_h`.
    pub field: SafetyValueField<V>,
}

impl<V: Copy> Evaluation<V> {
    /// Filter `legal` through the one-step predicate.
    pub fn admissible<M: Metric<Value = V>>(&self, legal: &[Action], metric: &M) -> Vec<Action> {
        admissible(self.visibility.agent(), legal, &self.field, metric)
    }
}

/// Scan, expand, and propagate for one snapshot.
///
/// The visibility scan reaches `scan_depth` steps from the agent; the
/// occupancy and value layers run `horizon` steps ahead. Adversaries beyond
/// `scan_depth` are not observed.
///
/// # Errors
///
/// Returns [`ShieldError::CellOutOfBounds`] if `agent` is outside `grid`.
pub fn evaluate<M: Metric>(
    grid: &Grid,
    agent: Cell,
    adversaries: &[Cell],
    scan_depth: u32,
    horizon: u32,
    metric: &M,
) -> Result<Evaluation<M::Value>, ShieldError> {
    log::trace!(
        "evaluate {} depth={scan_depth} h={horizon} agent={agent}",
        metric.name()
    );
    let visibility = VisibilityMap::scan(grid, agent, adversaries, scan_depth)?;
    let occupancy = build_occupancy(&visibility, adversaries, horizon);
    let field = propagate(&visibility, &occupancy, metric);
    Ok(Evaluation {
        visibility,
        occupancy,
        field,
    })
}

// ── ShieldDecision ─────────────────────────────────────────────────

/// Outcome of [`LocalShield::decide`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShieldDecision {
    /// Admissible subset of the legal actions, in legal order. May be empty.
    pub safe_actions: Vec<Action>,
    /// The legal actions the decision was made over.
    pub legal_actions: Vec<Action>,
    /// Number of adversaries inside the visible region.
    pub observed_adversaries: usize,
    /// `S_0` at the agent's cell, as `f64`. `None` when shielding is disabled.
    pub current_value: Option<f64>,
}

impl ShieldDecision {
    /// The safe actions, or every legal action if none is safe.
    pub fn actions_or_legal(&self) -> &[Action] {
        if self.safe_actions.is_empty() {
            &self.legal_actions
        } else {
            &self.safe_actions
        }
    }

    /// Whether the shield removed at least one legal action.
    pub fn is_restricted(&self) -> bool {
        self.safe_actions.len() < self.legal_actions.len()
    }
}

// ── LocalShield ────────────────────────────────────────────────────

/// A configured bounded-horizon local shield.
///
/// # Examples
///
/// ```
/// use picket_core::Action;
/// use picket_shield::{LocalShield, MetricKind};
/// use picket_space::Layout;
///
/// let layout = Layout::parse("....\n.PG.\n....").unwrap();
/// let agent = layout.require_agent().unwrap();
/// let shield = LocalShield::builder()
///     .horizon(1)
///     .metric(MetricKind::MinTimeToCapture)
///     .build()
///     .unwrap();
/// let legal = layout.grid.legal_actions(agent);
/// let decision = shield
///     .decide(&layout.grid, agent, &layout.adversaries, &legal)
///     .unwrap();
/// assert!(!decision.safe_actions.contains(&Action::East));
/// assert!(decision.safe_actions.contains(&Action::West));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocalShield {
    config: ShieldConfig,
}

impl LocalShield {
    /// Create a shield from a configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`ShieldConfig::validate`] failures.
    pub fn new(config: ShieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a new builder starting from [`ShieldConfig::default`].
    pub fn builder() -> LocalShieldBuilder {
        LocalShieldBuilder {
            config: ShieldConfig::default(),
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &ShieldConfig {
        &self.config
    }

    /// Restrict `legal` to the actions that are safe over the configured
    /// horizon.
    ///
    /// # Errors
    ///
    /// Returns [`ShieldError::CellOutOfBounds`] if `agent` is outside `grid`.
    pub fn decide(
        &self,
        grid: &Grid,
        agent: Cell,
        adversaries: &[Cell],
        legal: &[Action],
    ) -> Result<ShieldDecision, ShieldError> {
        let decision = match self.config.metric {
            MetricKind::ProbabilityClass => {
                let metric = ProbabilityClass::new(self.config.threshold);
                self.run(grid, agent, adversaries, legal, &metric)?
            }
            MetricKind::MinTimeToCapture => {
                self.run(grid, agent, adversaries, legal, &MinTimeToCapture)?
            }
        };
        log::debug!(
            "shield h={} depth={} metric={} agent={} legal={:?} safe={:?}",
            self.config.horizon,
            self.config.scan_depth(),
            self.config.metric,
            agent,
            decision.legal_actions,
            decision.safe_actions,
        );
        Ok(decision)
    }

    fn run<M: Metric>(
        &self,
        grid: &Grid,
        agent: Cell,
        adversaries: &[Cell],
        legal: &[Action],
        metric: &M,
    ) -> Result<ShieldDecision, ShieldError> {
        let horizon = self.config.horizon;
        if horizon == 0 {
            // Still reject an agent outside the grid.
            if !grid.extent().contains(agent) {
                return Err(ShieldError::CellOutOfBounds {
                    cell: agent,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
            return Ok(ShieldDecision {
                safe_actions: legal.to_vec(),
                legal_actions: legal.to_vec(),
                observed_adversaries: 0,
                current_value: None,
            });
        }
        let depth = self.config.scan_depth();
        let eval = evaluate(grid, agent, adversaries, depth, horizon, metric)?;
        Ok(ShieldDecision {
            safe_actions: eval.admissible(legal, metric),
            legal_actions: legal.to_vec(),
            observed_adversaries: eval.visibility.observed_adversaries().len(),
            current_value: eval.field.value(0, agent).map(|v| metric.to_f64(v)),
        })
    }
}

// ── LocalShieldBuilder ─────────────────────────────────────────────

/// Builder for [`LocalShield`].
#[derive(Clone, Debug)]
pub struct LocalShieldBuilder {
    config: ShieldConfig,
}

impl LocalShieldBuilder {
    /// Set the lookahead depth.
    pub fn horizon(mut self, horizon: u32) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Set the visibility scan depth. Unset, the scan reaches the horizon.
    pub fn visibility_depth(mut self, depth: u32) -> Self {
        self.config.visibility_depth = Some(depth);
        self
    }

    /// Set the safety encoding.
    pub fn metric(mut self, metric: MetricKind) -> Self {
        self.config.metric = metric;
        self
    }

    /// Set the capture-probability threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Propagates [`ShieldConfig::validate`] failures.
    pub fn build(self) -> Result<LocalShield, ConfigError> {
        LocalShield::new(self.config)
    }
}
