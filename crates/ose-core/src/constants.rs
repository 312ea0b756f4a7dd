/// Name of the `periods` field in the model-spec schema.
pub const FIELD_PERIODS: &str = "periods";

/// Name of the `rho` field in the model-spec schema.
pub const FIELD_RHO: &str = "rho";

/// Lower bound of the open interval `rho` is drawn from.
pub const DEFAULT_RHO_LOW: f64 = 0.01;

/// Upper bound of the open interval `rho` is drawn from.
pub const DEFAULT_RHO_HIGH: f64 = 0.99;

/// Inclusive lower bound for randomly drawn `periods`.
pub const DEFAULT_PERIODS_LOW: i64 = 1;

/// Exclusive upper bound for randomly drawn `periods`.
pub const DEFAULT_PERIODS_HIGH: i64 = 10;

/// Length of randomly named scratch directories.
pub const DEFAULT_TESTDIR_LENGTH: usize = 6;

/// Wall-clock budget for a property run, in minutes.
pub const DEFAULT_PROPERTY_MINUTES: f64 = 1.0;

/// Wall-clock budget for a robustness run, in minutes.
pub const DEFAULT_ROBUSTNESS_MINUTES: f64 = 60.0;

/// Number of seeds recorded in a regression vault.
pub const DEFAULT_REGRESSION_TESTS: usize = 100;

/// Project-level configuration file name.
pub const CONFIG_FILE_NAME: &str = "ose.toml";
