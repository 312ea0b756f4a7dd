//! OseErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// error code alongside its human-readable message.
pub trait OseErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SIMULATION_ERROR: &str = "SIMULATION_ERROR";
pub const NO_TESTS_REGISTERED: &str = "NO_TESTS_REGISTERED";
pub const PROPERTY_FAILED: &str = "PROPERTY_FAILED";
pub const ROBUSTNESS_FAILED: &str = "ROBUSTNESS_FAILED";
pub const REGRESSION_MISMATCH: &str = "REGRESSION_MISMATCH";
pub const VAULT_ERROR: &str = "VAULT_ERROR";
pub const SCRATCH_ERROR: &str = "SCRATCH_ERROR";
