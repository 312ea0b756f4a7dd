//! Spec builder: one entry point for every input form.

use ose_core::config::{GenerationConfig, OseConfig};
use ose_core::constants::{FIELD_PERIODS, FIELD_RHO};
use ose_core::errors::SpecError;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::{debug, info, warn};

use crate::model_spec::{ModelSpec, UnvalidatedSpec};
use crate::persistence;
use crate::schema;
use crate::source::SpecSource;
use crate::value::{FieldValue, SpecMapping};

/// Builds validated [`ModelSpec`]s from mappings, YAML files, or random draws.
///
/// Holds the PRNG used for random generation, so a seeded builder produces
/// the same sequence of specs on every run.
pub struct SpecBuilder {
    rng: Pcg64,
    generation: GenerationConfig,
}

impl SpecBuilder {
    /// Create a builder from generation settings.
    ///
    /// Seeds the PRNG from `config.seed`, or from OS entropy when unset.
    pub fn new(config: &GenerationConfig) -> Self {
        let rng = match config.seed {
            Some(s) => Pcg64::seed_from_u64(s),
            None => Pcg64::from_entropy(),
        };
        Self {
            rng,
            generation: config.clone(),
        }
    }

    pub fn from_config(config: &OseConfig) -> Self {
        Self::new(&config.generation)
    }

    /// Default bounds with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(&GenerationConfig {
            seed: Some(seed),
            ..GenerationConfig::default()
        })
    }

    /// Build a validated spec from `source`.
    ///
    /// `constraints` only apply to [`SpecSource::Random`], where they
    /// override the drawn values.
    pub fn construct(
        &mut self,
        source: SpecSource,
        constraints: Option<&SpecMapping>,
    ) -> Result<ModelSpec, SpecError> {
        let kind = source.kind();
        let spec = match source {
            SpecSource::Mapping(mapping) => {
                warn_ignored_constraints(kind, constraints);
                UnvalidatedSpec::from_mapping(mapping)?.validate()?
            }
            SpecSource::Path(path) => {
                warn_ignored_constraints(kind, constraints);
                persistence::deserialize(&path)?
            }
            SpecSource::Random => self.generate(constraints)?,
        };
        info!(
            source = kind,
            periods = spec.periods(),
            rho = spec.rho(),
            "model spec constructed"
        );
        Ok(spec)
    }

    /// Draw a spec at random, then apply `constraints` on top of the draw.
    ///
    /// `rho` comes from the open interval `(rho_low, rho_high)`, `periods`
    /// from `[periods_low, periods_high)`. Bounds that leave either range
    /// empty are a [`SpecError::Config`] error.
    pub fn generate(&mut self, constraints: Option<&SpecMapping>) -> Result<ModelSpec, SpecError> {
        self.generation.validate()?;
        if let Some(constraints) = constraints {
            let unexpected = schema::unexpected_fields(constraints);
            if !unexpected.is_empty() {
                return Err(SpecError::Schema {
                    missing: Vec::new(),
                    unexpected,
                });
            }
        }

        let mut mapping = SpecMapping::new();
        mapping.insert(FIELD_RHO.to_string(), FieldValue::Float(self.draw_rho()));
        mapping.insert(
            FIELD_PERIODS.to_string(),
            FieldValue::Integer(self.draw_periods()),
        );
        debug!(?mapping, "drew random model spec fields");

        if let Some(constraints) = constraints {
            mapping.extend(constraints.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        UnvalidatedSpec::from_mapping(mapping)?.validate()
    }

    fn draw_rho(&mut self) -> f64 {
        let low = self.generation.effective_rho_low();
        let high = self.generation.effective_rho_high();
        // gen_range is half-open; redraw the lower endpoint.
        loop {
            let rho = self.rng.gen_range(low..high);
            if rho > low {
                return rho;
            }
        }
    }

    fn draw_periods(&mut self) -> i64 {
        let low = self.generation.effective_periods_low();
        let high = self.generation.effective_periods_high();
        self.rng.gen_range(low..high)
    }
}

impl Default for SpecBuilder {
    fn default() -> Self {
        Self::new(&GenerationConfig::default())
    }
}

fn warn_ignored_constraints(kind: &str, constraints: Option<&SpecMapping>) {
    if constraints.is_some_and(|c| !c.is_empty()) {
        warn!(source = kind, "constraints only apply to random generation; ignoring");
    }
}
