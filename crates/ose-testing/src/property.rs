//! Time-budgeted property runs.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ose_core::config::TestingConfig;
use ose_core::constants;
use ose_core::errors::HarnessError;
use tracing::info;

use crate::scratch::with_fresh_directory;

type PropertyFn = Box<dyn Fn(&Path) -> Result<(), String>>;

/// A named collection of property tests.
///
/// Each test receives a fresh scratch directory and reports failure as an
/// error message.
pub struct PropertySuite {
    tests: Vec<(String, PropertyFn)>,
    base_dir: PathBuf,
    testdir_length: usize,
}

/// Outcome of a completed property run.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyReport {
    /// Full passes over the suite.
    pub rounds: u64,
    /// Individual test invocations.
    pub executions: u64,
    pub elapsed: Duration,
}

impl PropertySuite {
    pub fn new() -> Self {
        Self {
            tests: Vec::new(),
            base_dir: std::env::temp_dir(),
            testdir_length: constants::DEFAULT_TESTDIR_LENGTH,
        }
    }

    /// Directory under which scratch directories are created.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_testdir_length(mut self, length: usize) -> Self {
        self.testdir_length = length;
        self
    }

    /// Add a test. Names should be unique; they only appear in reports.
    pub fn register(
        mut self,
        name: impl Into<String>,
        test: impl Fn(&Path) -> Result<(), String> + 'static,
    ) -> Self {
        self.tests.push((name.into(), Box::new(test)));
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Run with the budget and directory settings from `config`.
    pub fn run_configured(self, config: &TestingConfig) -> Result<PropertyReport, HarnessError> {
        self.with_testdir_length(config.effective_testdir_length())
            .run_for(config.effective_property_budget())
    }

    /// Run every test repeatedly until `budget` has elapsed.
    ///
    /// The suite always completes at least one full round. The first failing
    /// test stops the run.
    pub fn run_for(&self, budget: Duration) -> Result<PropertyReport, HarnessError> {
        if self.tests.is_empty() {
            return Err(HarnessError::NoTestsRegistered);
        }

        let start = Instant::now();
        let stop = start + budget;
        let mut rounds = 0u64;
        let mut executions = 0u64;

        loop {
            for (name, test) in &self.tests {
                with_fresh_directory(&self.base_dir, self.testdir_length, |dir| test(dir))?
                    .map_err(|message| HarnessError::PropertyFailed {
                        name: name.clone(),
                        iteration: rounds,
                        message,
                    })?;
                executions += 1;
            }
            rounds += 1;
            if Instant::now() >= stop {
                break;
            }
        }

        let report = PropertyReport {
            rounds,
            executions,
            elapsed: start.elapsed(),
        };
        info!(
            rounds = report.rounds,
            executions = report.executions,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "property run finished"
        );
        Ok(report)
    }
}

impl Default for PropertySuite {
    fn default() -> Self {
        Self::new()
    }
}
