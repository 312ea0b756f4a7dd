//! Configuration system for the OSE workspace.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod generation_config;
pub mod ose_config;
pub mod simulation_config;
pub mod testing_config;

pub use generation_config::GenerationConfig;
pub use ose_config::OseConfig;
pub use simulation_config::{InitialValue, SimulationConfig};
pub use testing_config::TestingConfig;
