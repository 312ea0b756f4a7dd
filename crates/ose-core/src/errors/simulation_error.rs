//! Simulation errors.

use super::error_code::{self, OseErrorCode};

/// Errors raised while setting up or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid noise distribution: {message}")]
    Distribution { message: String },
}

impl OseErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        error_code::SIMULATION_ERROR
    }
}
