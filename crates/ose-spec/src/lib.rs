//! # ose-spec
//!
//! Immutable model specifications for OSE simulation projects.
//!
//! A [`ModelSpec`] is only ever handed out after validation. Raw input
//! (a mapping, a YAML file, or a random draw) is first checked against the
//! closed [`schema`], held as an [`UnvalidatedSpec`], and validated exactly
//! once on its way out of the [`SpecBuilder`].

pub mod builder;
pub mod model_spec;
pub mod persistence;
pub mod schema;
pub mod source;
pub mod value;

pub use builder::SpecBuilder;
pub use model_spec::{ModelSpec, UnvalidatedSpec};
pub use persistence::{deserialize, serialize};
pub use schema::FieldRule;
pub use source::SpecSource;
pub use value::{spec_mapping, FieldValue, SpecMapping};
