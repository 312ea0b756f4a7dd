//! Seeded regression vaults.
//!
//! A vault stores `func(seed)` for seeds `0..n`. Checking re-evaluates the
//! function and compares against the stored results, so any change in the
//! numerical output of a seeded computation is caught.

use std::fmt::Debug;
use std::path::Path;

use ose_core::config::TestingConfig;
use ose_core::constants;
use ose_core::errors::HarnessError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::scratch::with_fresh_directory;

/// One recorded evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionEntry<T> {
    pub seed: u64,
    pub result: T,
}

/// Recorded `seed -> result` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegressionVault<T> {
    entries: Vec<RegressionEntry<T>>,
}

impl<T> RegressionVault<T>
where
    T: PartialEq + Debug + Serialize + DeserializeOwned,
{
    /// Evaluate `func` for seeds `0..num_tests`.
    pub fn create(mut func: impl FnMut(u64) -> T, num_tests: usize) -> Self {
        let entries = (0..num_tests as u64)
            .map(|seed| RegressionEntry {
                seed,
                result: func(seed),
            })
            .collect();
        Self { entries }
    }

    /// [`RegressionVault::create`] with the seed count from `config`.
    pub fn create_configured(func: impl FnMut(u64) -> T, config: &TestingConfig) -> Self {
        Self::create(func, config.effective_regression_tests())
    }

    pub fn entries(&self) -> &[RegressionEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-evaluate the first `num_tests` entries inside a fresh directory
    /// under `base`.
    ///
    /// Fails on the first seed whose result differs from the recorded one.
    pub fn check(
        &self,
        func: impl FnMut(u64) -> T,
        num_tests: usize,
        base: &Path,
    ) -> Result<(), HarnessError> {
        self.check_in(func, num_tests, base, constants::DEFAULT_TESTDIR_LENGTH)
    }

    /// [`RegressionVault::check`] with the seed count and directory settings
    /// from `config`.
    pub fn check_configured(
        &self,
        func: impl FnMut(u64) -> T,
        config: &TestingConfig,
        base: &Path,
    ) -> Result<(), HarnessError> {
        self.check_in(
            func,
            config.effective_regression_tests(),
            base,
            config.effective_testdir_length(),
        )
    }

    fn check_in(
        &self,
        mut func: impl FnMut(u64) -> T,
        num_tests: usize,
        base: &Path,
        testdir_length: usize,
    ) -> Result<(), HarnessError> {
        with_fresh_directory(base, testdir_length, |_| {
            for entry in self.entries.iter().take(num_tests) {
                let actual = func(entry.seed);
                if actual != entry.result {
                    warn!(
                        seed = entry.seed,
                        expected = ?entry.result,
                        actual = ?actual,
                        "regression mismatch"
                    );
                    return Err(HarnessError::RegressionMismatch { seed: entry.seed });
                }
            }
            info!(
                checked = num_tests.min(self.entries.len()),
                "regression vault checked"
            );
            Ok(())
        })?
    }

    /// Write the vault as JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), HarnessError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| HarnessError::VaultFormat {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| HarnessError::VaultIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| HarnessError::VaultIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| HarnessError::VaultFormat {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
