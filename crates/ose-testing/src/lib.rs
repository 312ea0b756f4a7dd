//! # ose-testing
//!
//! Harness shared by OSE simulation projects.
//!
//! - [`scratch`]: run a closure inside a freshly created, randomly named
//!   directory that is removed afterwards.
//! - [`property`]: loop a suite of property tests until a wall-clock budget
//!   runs out.
//! - [`regression`]: record `seed -> result` pairs once, check them later.
//! - [`robustness`]: evaluate randomly generated requests until a budget
//!   runs out.
//!
//! Scratch directories are handed to the test body as a path. The process
//! working directory is never changed.

pub mod property;
pub mod regression;
pub mod robustness;
pub mod scratch;

pub use property::{PropertyReport, PropertySuite};
pub use regression::{RegressionEntry, RegressionVault};
pub use robustness::{run_robustness, run_robustness_configured, RobustnessReport};
pub use scratch::{random_dirname, with_fresh_directory};
