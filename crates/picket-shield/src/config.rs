//! Shield configuration, validation, and error types.
//!
//! [`ShieldConfig`] is the builder input for a [`LocalShield`](crate::LocalShield).
//! [`validate()`](ShieldConfig::validate) is the single validation path used
//! by both [`LocalShield::new`](crate::LocalShield::new) and the builder.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metric::{MetricKind, ProbabilityClass};

// ── ShieldConfig ───────────────────────────────────────────────────

/// Parameters of one shield instance.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use picket_shield::{MetricKind, ShieldConfig};
///
/// let cfg: ShieldConfig =
///     serde_json::from_str(r#"{"horizon": 3, "metric": "min_time_to_capture"}"#).unwrap();
/// assert_eq!(cfg.horizon, 3);
/// assert_eq!(cfg.metric, MetricKind::MinTimeToCapture);
/// assert_eq!(cfg.threshold, 0.2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ShieldConfig {
    /// Lookahead depth `h`. Zero disables shielding. Default: 0.
    pub horizon: u32,
    /// Path-distance bound of the visibility scan. `None` scans to
    /// `horizon`. Default: `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_depth: Option<u32>,
    /// Safety encoding. Default: [`MetricKind::ProbabilityClass`].
    pub metric: MetricKind,
    /// Maximum admissible capture probability for
    /// [`MetricKind::ProbabilityClass`]. Default: 0.2.
    pub threshold: f64,
}

impl ShieldConfig {
    /// Largest accepted horizon.
    pub const MAX_HORIZON: u32 = 64;

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidThreshold`] if the threshold is not a finite
    /// value in `[0, 1]`; [`ConfigError::HorizonTooLarge`] if the horizon
    /// exceeds [`MAX_HORIZON`](Self::MAX_HORIZON).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if self.horizon > Self::MAX_HORIZON {
            return Err(ConfigError::HorizonTooLarge {
                horizon: self.horizon,
                max: Self::MAX_HORIZON,
            });
        }
        Ok(())
    }

    /// The depth passed to the visibility scan.
    pub fn scan_depth(&self) -> u32 {
        self.visibility_depth.unwrap_or(self.horizon)
    }
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            horizon: 0,
            visibility_depth: None,
            metric: MetricKind::default(),
            threshold: ProbabilityClass::DEFAULT_THRESHOLD,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`ShieldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Threshold is NaN, infinite, or outside `[0, 1]`.
    InvalidThreshold {
        /// The rejected value.
        value: f64,
    },
    /// Horizon exceeds [`ShieldConfig::MAX_HORIZON`].
    HorizonTooLarge {
        /// The rejected horizon.
        horizon: u32,
        /// The largest accepted horizon.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { value } => {
                write!(f, "threshold must be finite and in [0, 1], got {value}")
            }
            Self::HorizonTooLarge { horizon, max } => {
                write!(f, "horizon {horizon} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}
