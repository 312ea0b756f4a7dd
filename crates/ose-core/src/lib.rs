//! # ose-core
//!
//! Foundation crate for the OSE model-spec workspace.
//! Defines errors, error codes, layered configuration, tracing setup,
//! and the compiled defaults every other crate falls back to.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::OseConfig;
pub use errors::{ConfigError, HarnessError, OseErrorCode, SimulationError, SpecError};
