//! Model-spec construction and validation errors.

use super::config_error::ConfigError;
use super::error_code::{self, OseErrorCode};

/// Errors raised while building, validating, or persisting a model spec.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// The supplied field set does not match the closed schema.
    #[error(
        "Schema mismatch: missing fields [{}], unexpected fields [{}]",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    Schema {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Spec file not found: {path}")]
    NotFound { path: String },

    /// Malformed document, or a well-formed document with the wrong keys.
    #[error("Spec parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A field is present but violates its rule.
    #[error("Validation failed for {field}: {rule}")]
    Validation { field: String, rule: String },

    #[error("Spec I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Generation settings that leave nothing to draw from.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SpecError {
    /// The offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl OseErrorCode for SpecError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Schema { .. } => error_code::SCHEMA_ERROR,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Parse { .. } => error_code::PARSE_ERROR,
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Config(e) => e.error_code(),
        }
    }
}
