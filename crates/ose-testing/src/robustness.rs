//! Time-budgeted robustness runs.

use std::path::Path;
use std::time::{Duration, Instant};

use ose_core::config::TestingConfig;
use ose_core::constants;
use ose_core::errors::HarnessError;
use tracing::info;

use crate::scratch::with_fresh_directory;

/// Outcome of a completed robustness run.
#[derive(Debug, Clone, PartialEq)]
pub struct RobustnessReport {
    pub iterations: u64,
    pub elapsed: Duration,
}

/// Evaluate generated requests until `budget` has elapsed.
///
/// All evaluations share one fresh directory under `base`. At least one
/// request is evaluated; the first failure stops the run.
pub fn run_robustness<R>(
    generate: impl FnMut() -> R,
    evaluate: impl FnMut(R, &Path) -> Result<(), String>,
    budget: Duration,
    base: &Path,
) -> Result<RobustnessReport, HarnessError> {
    robustness_loop(
        generate,
        evaluate,
        budget,
        base,
        constants::DEFAULT_TESTDIR_LENGTH,
    )
}

/// [`run_robustness`] with the budget and directory settings from `config`.
pub fn run_robustness_configured<R>(
    generate: impl FnMut() -> R,
    evaluate: impl FnMut(R, &Path) -> Result<(), String>,
    config: &TestingConfig,
    base: &Path,
) -> Result<RobustnessReport, HarnessError> {
    robustness_loop(
        generate,
        evaluate,
        config.effective_robustness_budget(),
        base,
        config.effective_testdir_length(),
    )
}

fn robustness_loop<R>(
    mut generate: impl FnMut() -> R,
    mut evaluate: impl FnMut(R, &Path) -> Result<(), String>,
    budget: Duration,
    base: &Path,
    testdir_length: usize,
) -> Result<RobustnessReport, HarnessError> {
    with_fresh_directory(base, testdir_length, |dir| {
        let start = Instant::now();
        let stop = start + budget;
        let mut iterations = 0u64;
        loop {
            evaluate(generate(), dir).map_err(|message| HarnessError::RobustnessFailed {
                iteration: iterations,
                message,
            })?;
            iterations += 1;
            if Instant::now() >= stop {
                break;
            }
        }
        let report = RobustnessReport {
            iterations,
            elapsed: start.elapsed(),
        };
        info!(
            iterations = report.iterations,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "robustness run finished"
        );
        Ok(report)
    })?
}
