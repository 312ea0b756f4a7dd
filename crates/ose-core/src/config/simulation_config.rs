//! Simulation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the first element of a simulated sequence is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialValue {
    /// `x[0] = 0`.
    Zero,
    /// `x[0] ~ N(0, 1)`.
    #[default]
    StandardNormal,
}

impl InitialValue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::StandardNormal => "standard_normal",
        }
    }
}

impl fmt::Display for InitialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InitialValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "standard_normal" => Ok(Self::StandardNormal),
            other => Err(format!(
                "unknown initial value '{other}', expected 'zero' or 'standard_normal'"
            )),
        }
    }
}

/// Configuration for the AR(1) simulator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for reproducible realizations. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Initial-value policy. Default: `standard_normal`.
    pub initial_value: Option<InitialValue>,
}

impl SimulationConfig {
    pub fn effective_initial_value(&self) -> InitialValue {
        self.initial_value.unwrap_or_default()
    }
}
