//! Top-level OSE configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GenerationConfig, InitialValue, SimulationConfig, TestingConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OSE_*`)
/// 2. Project config (`ose.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OseConfig {
    pub generation: GenerationConfig,
    pub simulation: SimulationConfig,
    pub testing: TestingConfig,
}

impl OseConfig {
    /// Load configuration with 3-layer resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &OseConfig) -> Result<(), ConfigError> {
        config.generation.validate()?;

        let testing = &config.testing;
        for (field, minutes) in [
            ("testing.property_minutes", testing.property_minutes),
            ("testing.robustness_minutes", testing.robustness_minutes),
        ] {
            if let Some(m) = minutes {
                if !m.is_finite() || m < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite, non-negative number of minutes".to_string(),
                    });
                }
            }
        }
        if testing.effective_testdir_length() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "testing.testdir_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut OseConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OseConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut OseConfig, other: &OseConfig) {
        // Generation
        if other.generation.seed.is_some() {
            base.generation.seed = other.generation.seed;
        }
        if other.generation.rho_low.is_some() {
            base.generation.rho_low = other.generation.rho_low;
        }
        if other.generation.rho_high.is_some() {
            base.generation.rho_high = other.generation.rho_high;
        }
        if other.generation.periods_low.is_some() {
            base.generation.periods_low = other.generation.periods_low;
        }
        if other.generation.periods_high.is_some() {
            base.generation.periods_high = other.generation.periods_high;
        }

        // Simulation
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }
        if other.simulation.initial_value.is_some() {
            base.simulation.initial_value = other.simulation.initial_value;
        }

        // Testing
        if other.testing.property_minutes.is_some() {
            base.testing.property_minutes = other.testing.property_minutes;
        }
        if other.testing.robustness_minutes.is_some() {
            base.testing.robustness_minutes = other.testing.robustness_minutes;
        }
        if other.testing.regression_tests.is_some() {
            base.testing.regression_tests = other.testing.regression_tests;
        }
        if other.testing.testdir_length.is_some() {
            base.testing.testdir_length = other.testing.testdir_length;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `OSE_SEED`, `OSE_RHO_LOW`, `OSE_INITIAL_VALUE`, etc.
    /// Unparseable values are skipped with a warning.
    fn apply_env_overrides(config: &mut OseConfig) {
        if let Some(v) = env_parse::<u64>("OSE_SEED") {
            config.generation.seed = Some(v);
            config.simulation.seed = Some(v);
        }
        if let Some(v) = env_parse::<f64>("OSE_RHO_LOW") {
            config.generation.rho_low = Some(v);
        }
        if let Some(v) = env_parse::<f64>("OSE_RHO_HIGH") {
            config.generation.rho_high = Some(v);
        }
        if let Some(v) = env_parse::<i64>("OSE_PERIODS_LOW") {
            config.generation.periods_low = Some(v);
        }
        if let Some(v) = env_parse::<i64>("OSE_PERIODS_HIGH") {
            config.generation.periods_high = Some(v);
        }
        if let Some(v) = env_parse::<InitialValue>("OSE_INITIAL_VALUE") {
            config.simulation.initial_value = Some(v);
        }
        if let Some(v) = env_parse::<f64>("OSE_PROPERTY_MINUTES") {
            config.testing.property_minutes = Some(v);
        }
        if let Some(v) = env_parse::<f64>("OSE_ROBUSTNESS_MINUTES") {
            config.testing.robustness_minutes = Some(v);
        }
        if let Some(v) = env_parse::<usize>("OSE_REGRESSION_TESTS") {
            config.testing.regression_tests = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
