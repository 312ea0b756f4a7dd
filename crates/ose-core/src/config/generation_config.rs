//! Random spec generation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Bounds and seed used when a spec is generated instead of supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for reproducible draws. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Lower bound of the open `rho` interval. Default: 0.01.
    pub rho_low: Option<f64>,
    /// Upper bound of the open `rho` interval. Default: 0.99.
    pub rho_high: Option<f64>,
    /// Inclusive lower bound for `periods`. Default: 1.
    pub periods_low: Option<i64>,
    /// Exclusive upper bound for `periods`. Default: 10.
    pub periods_high: Option<i64>,
}

impl GenerationConfig {
    pub fn effective_rho_low(&self) -> f64 {
        self.rho_low.unwrap_or(constants::DEFAULT_RHO_LOW)
    }

    pub fn effective_rho_high(&self) -> f64 {
        self.rho_high.unwrap_or(constants::DEFAULT_RHO_HIGH)
    }

    pub fn effective_periods_low(&self) -> i64 {
        self.periods_low.unwrap_or(constants::DEFAULT_PERIODS_LOW)
    }

    pub fn effective_periods_high(&self) -> i64 {
        self.periods_high.unwrap_or(constants::DEFAULT_PERIODS_HIGH)
    }

    /// Check that both draw ranges are non-empty.
    ///
    /// `rho` is drawn from an open interval, so at least one float must lie
    /// strictly between the bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rho_low, rho_high) = (self.effective_rho_low(), self.effective_rho_high());
        if !rho_low.is_finite() || !rho_high.is_finite() || rho_low >= rho_high {
            return Err(ConfigError::ValidationFailed {
                field: "generation.rho_low".to_string(),
                message: format!("must be finite and below rho_high ({rho_low} >= {rho_high})"),
            });
        }
        if !(rho_high - rho_low).is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "generation.rho_high".to_string(),
                message: format!("range width overflows ({rho_low}..{rho_high})"),
            });
        }
        let mid = rho_low / 2.0 + rho_high / 2.0;
        if mid <= rho_low || mid >= rho_high {
            return Err(ConfigError::ValidationFailed {
                field: "generation.rho_high".to_string(),
                message: format!("no float lies strictly between {rho_low} and {rho_high}"),
            });
        }

        let (periods_low, periods_high) = (
            self.effective_periods_low(),
            self.effective_periods_high(),
        );
        if periods_low < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "generation.periods_low".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if periods_low >= periods_high {
            return Err(ConfigError::ValidationFailed {
                field: "generation.periods_high".to_string(),
                message: format!("must be greater than periods_low ({periods_high} <= {periods_low})"),
            });
        }
        Ok(())
    }
}
