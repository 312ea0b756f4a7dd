//! Testing-harness configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Budgets and sizes for property, regression, and robustness runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestingConfig {
    /// Wall-clock budget for property runs, in minutes. Default: 1.
    pub property_minutes: Option<f64>,
    /// Wall-clock budget for robustness runs, in minutes. Default: 60.
    pub robustness_minutes: Option<f64>,
    /// Seeds recorded in a regression vault. Default: 100.
    pub regression_tests: Option<usize>,
    /// Length of random scratch directory names. Default: 6.
    pub testdir_length: Option<usize>,
}

impl TestingConfig {
    pub fn effective_property_budget(&self) -> Duration {
        minutes(self.property_minutes.unwrap_or(constants::DEFAULT_PROPERTY_MINUTES))
    }

    pub fn effective_robustness_budget(&self) -> Duration {
        minutes(
            self.robustness_minutes
                .unwrap_or(constants::DEFAULT_ROBUSTNESS_MINUTES),
        )
    }

    pub fn effective_regression_tests(&self) -> usize {
        self.regression_tests
            .unwrap_or(constants::DEFAULT_REGRESSION_TESTS)
    }

    pub fn effective_testdir_length(&self) -> usize {
        self.testdir_length
            .unwrap_or(constants::DEFAULT_TESTDIR_LENGTH)
    }
}

fn minutes(value: f64) -> Duration {
    Duration::from_secs_f64(value.max(0.0) * 60.0)
}
