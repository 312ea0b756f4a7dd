//! Testing-harness errors: property, regression, and robustness runs.

use super::error_code::{self, OseErrorCode};

/// Errors raised by the testing harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("No property tests registered")]
    NoTestsRegistered,

    #[error("Property test {name} failed on iteration {iteration}: {message}")]
    PropertyFailed {
        name: String,
        iteration: u64,
        message: String,
    },

    #[error("Robustness check failed on iteration {iteration}: {message}")]
    RobustnessFailed { iteration: u64, message: String },

    #[error("Regression mismatch for seed {seed}")]
    RegressionMismatch { seed: u64 },

    #[error("Vault I/O error on {path}: {message}")]
    VaultIo { path: String, message: String },

    #[error("Vault format error in {path}: {message}")]
    VaultFormat { path: String, message: String },

    #[error("Scratch directory error in {path}: {message}")]
    Scratch { path: String, message: String },
}

impl OseErrorCode for HarnessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoTestsRegistered => error_code::NO_TESTS_REGISTERED,
            Self::PropertyFailed { .. } => error_code::PROPERTY_FAILED,
            Self::RobustnessFailed { .. } => error_code::ROBUSTNESS_FAILED,
            Self::RegressionMismatch { .. } => error_code::REGRESSION_MISMATCH,
            Self::VaultIo { .. } | Self::VaultFormat { .. } => error_code::VAULT_ERROR,
            Self::Scratch { .. } => error_code::SCRATCH_ERROR,
        }
    }
}
