//! The closed two-field schema and its validation rules.
//!
//! Every field the schema accepts has exactly one [`FieldRule`]. A field
//! without a rule is rejected, never passed through.

use ose_core::constants::{FIELD_PERIODS, FIELD_RHO};
use ose_core::errors::SpecError;

use crate::value::{FieldValue, SpecMapping};

/// A type-and-constraint rule attached to one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// An integer strictly greater than zero.
    PositiveInteger,
    /// A finite floating-point number. No range restriction.
    Float,
}

/// Field name to rule, in declaration order.
pub const SCHEMA: &[(&str, FieldRule)] = &[
    (FIELD_PERIODS, FieldRule::PositiveInteger),
    (FIELD_RHO, FieldRule::Float),
];

impl FieldRule {
    pub fn description(self) -> &'static str {
        match self {
            Self::PositiveInteger => "must be an integer strictly greater than zero",
            Self::Float => "must be a finite floating-point number",
        }
    }

    /// Check `value` against this rule, naming `field` on failure.
    pub fn check(self, field: &str, value: &FieldValue) -> Result<(), SpecError> {
        let ok = match (self, value) {
            (Self::PositiveInteger, FieldValue::Integer(n)) => *n > 0,
            (Self::Float, FieldValue::Float(x)) => x.is_finite(),
            _ => false,
        };
        if ok {
            return Ok(());
        }
        Err(SpecError::Validation {
            field: field.to_string(),
            rule: format!(
                "{} (got {} {})",
                self.description(),
                value.kind(),
                value
            ),
        })
    }
}

/// The rule for `field`, or `None` if the schema does not declare it.
pub fn rule_for(field: &str) -> Option<FieldRule> {
    SCHEMA
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, rule)| *rule)
}

/// Names of all declared fields.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|(name, _)| *name)
}

/// Reject a mapping whose key set differs from the schema.
pub fn check_field_set(mapping: &SpecMapping) -> Result<(), SpecError> {
    let missing: Vec<String> = field_names()
        .filter(|name| !mapping.contains_key(*name))
        .map(str::to_string)
        .collect();
    let unexpected = unexpected_fields(mapping);
    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(SpecError::Schema {
            missing,
            unexpected,
        })
    }
}

/// Keys of `mapping` that have no rule.
pub fn unexpected_fields(mapping: &SpecMapping) -> Vec<String> {
    mapping
        .keys()
        .filter(|key| rule_for(key).is_none())
        .cloned()
        .collect()
}
