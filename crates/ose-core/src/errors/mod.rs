//! Error handling for the OSE workspace.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod harness_error;
pub mod simulation_error;
pub mod spec_error;

pub use config_error::ConfigError;
pub use error_code::OseErrorCode;
pub use harness_error::HarnessError;
pub use simulation_error::SimulationError;
pub use spec_error::SpecError;
