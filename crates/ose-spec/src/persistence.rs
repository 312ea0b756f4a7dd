//! YAML persistence of model specs.
//!
//! The document holds exactly the two schema keys:
//!
//! ```text
//! periods: 2
//! rho: 0.5
//! ```
//!
//! Writes overwrite in place; there is no atomic rename or backup.

use std::io::ErrorKind;
use std::path::Path;

use ose_core::errors::SpecError;

use crate::model_spec::{ModelSpec, UnvalidatedSpec};
use crate::value::SpecMapping;

/// Render `spec` as a YAML document.
pub fn to_yaml_string(spec: &ModelSpec) -> Result<String, SpecError> {
    serde_yaml::to_string(&spec.to_mapping()).map_err(|e| SpecError::Parse {
        path: "<serialization>".to_string(),
        message: e.to_string(),
    })
}

/// Parse a YAML document into a validated spec.
///
/// `origin` names the document in errors. Wrong key sets are reported as
/// parse errors; wrongly typed values as validation errors.
pub fn from_yaml_str(content: &str, origin: &str) -> Result<ModelSpec, SpecError> {
    let mapping: SpecMapping = serde_yaml::from_str(content).map_err(|e| SpecError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;

    let raw = UnvalidatedSpec::from_mapping(mapping).map_err(|e| SpecError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    raw.validate()
}

/// Write `spec` to `path`, replacing any existing file.
pub fn serialize(spec: &ModelSpec, path: &Path) -> Result<(), SpecError> {
    let yaml = to_yaml_string(spec)?;
    std::fs::write(path, yaml).map_err(|e| SpecError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "model spec serialized");
    Ok(())
}

/// Read a spec written by [`serialize`].
pub fn deserialize(path: &Path) -> Result<ModelSpec, SpecError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SpecError::NotFound {
            path: path.display().to_string(),
        },
        _ => SpecError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })?;
    let spec = from_yaml_str(&content, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), "model spec deserialized");
    Ok(spec)
}
