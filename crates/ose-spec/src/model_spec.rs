//! The immutable model spec and its unvalidated precursor.

use ose_core::constants::{FIELD_PERIODS, FIELD_RHO};
use ose_core::errors::SpecError;
use serde::{Deserialize, Serialize};

use crate::schema;
use crate::value::{FieldValue, SpecMapping};

/// Raw record after the schema check, before validation.
///
/// The only way out is [`UnvalidatedSpec::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnvalidatedSpec {
    fields: SpecMapping,
}

impl UnvalidatedSpec {
    /// Accept `mapping` if its keys are exactly the schema fields.
    pub fn from_mapping(mapping: SpecMapping) -> Result<Self, SpecError> {
        schema::check_field_set(&mapping)?;
        Ok(Self { fields: mapping })
    }

    /// Run every field through its rule and produce a [`ModelSpec`].
    pub fn validate(self) -> Result<ModelSpec, SpecError> {
        validate_mapping(&self.fields)?;

        let periods = self
            .fields
            .get(FIELD_PERIODS)
            .and_then(FieldValue::as_integer)
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| rule_violation(FIELD_PERIODS))?;
        let rho = self
            .fields
            .get(FIELD_RHO)
            .and_then(FieldValue::as_float)
            .ok_or_else(|| rule_violation(FIELD_RHO))?;

        Ok(ModelSpec { periods, rho })
    }
}

/// Check every entry of `mapping` against its rule.
///
/// An entry without a rule is a schema error.
pub fn validate_mapping(mapping: &SpecMapping) -> Result<(), SpecError> {
    for (field, value) in mapping {
        let rule = schema::rule_for(field).ok_or_else(|| SpecError::Schema {
            missing: Vec::new(),
            unexpected: vec![field.clone()],
        })?;
        rule.check(field, value)?;
    }
    Ok(())
}

fn rule_violation(field: &str) -> SpecError {
    let rule = schema::rule_for(field).map_or("missing rule", |r| r.description());
    SpecError::Validation {
        field: field.to_string(),
        rule: rule.to_string(),
    }
}

/// Immutable parameters of one AR(1) simulation.
///
/// Fields are private; there are no setters. A spec can only be obtained
/// through validation, so every `ModelSpec` a caller holds is valid.
///
/// ```compile_fail
/// let spec = ose_spec::ModelSpec::new(2, 0.5).unwrap();
/// spec.periods = 1;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpecMapping", into = "SpecMapping")]
pub struct ModelSpec {
    periods: u64,
    rho: f64,
}

impl ModelSpec {
    /// Validate typed values into a spec.
    pub fn new(periods: u64, rho: f64) -> Result<Self, SpecError> {
        let periods = i64::try_from(periods).map_err(|_| SpecError::Validation {
            field: FIELD_PERIODS.to_string(),
            rule: format!("must fit a signed 64-bit integer (got {periods})"),
        })?;
        let mut mapping = SpecMapping::new();
        mapping.insert(FIELD_PERIODS.to_string(), FieldValue::Integer(periods));
        mapping.insert(FIELD_RHO.to_string(), FieldValue::Float(rho));
        Self::from_mapping(mapping)
    }

    /// Schema check, then validation.
    pub fn from_mapping(mapping: SpecMapping) -> Result<Self, SpecError> {
        UnvalidatedSpec::from_mapping(mapping)?.validate()
    }

    /// Number of time steps to simulate.
    pub fn periods(&self) -> u64 {
        self.periods
    }

    /// Serial-correlation coefficient.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Plain field-name-to-value view.
    pub fn to_mapping(&self) -> SpecMapping {
        let mut mapping = SpecMapping::new();
        // `periods` is bounded by i64::MAX at validation time.
        mapping.insert(
            FIELD_PERIODS.to_string(),
            FieldValue::Integer(self.periods as i64),
        );
        mapping.insert(FIELD_RHO.to_string(), FieldValue::Float(self.rho));
        mapping
    }

    /// A new spec equal to `self` except for the fields in `replacements`.
    ///
    /// `self` is untouched. The derived spec is validated before it is
    /// returned; unknown field names are a schema error.
    pub fn with_replacements(&self, replacements: &SpecMapping) -> Result<Self, SpecError> {
        let unexpected = schema::unexpected_fields(replacements);
        if !unexpected.is_empty() {
            return Err(SpecError::Schema {
                missing: Vec::new(),
                unexpected,
            });
        }

        let mut mapping = self.to_mapping();
        mapping.extend(replacements.iter().map(|(k, v)| (k.clone(), v.clone())));
        tracing::debug!(
            replaced = replacements.len(),
            "deriving model spec with replacements"
        );
        Self::from_mapping(mapping)
    }

    /// Re-run the field rules over this spec.
    ///
    /// Holds for every constructed spec; exposed so callers can assert it.
    pub fn validate(&self) -> Result<(), SpecError> {
        let mapping = self.to_mapping();
        schema::check_field_set(&mapping)?;
        validate_mapping(&mapping)
    }
}

impl TryFrom<SpecMapping> for ModelSpec {
    type Error = SpecError;

    fn try_from(mapping: SpecMapping) -> Result<Self, Self::Error> {
        Self::from_mapping(mapping)
    }
}

impl From<ModelSpec> for SpecMapping {
    fn from(spec: ModelSpec) -> Self {
        spec.to_mapping()
    }
}
