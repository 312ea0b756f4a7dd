use ose_core::config::{InitialValue, OseConfig, SimulationConfig};
use ose_core::errors::SimulationError;
use ose_spec::ModelSpec;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use statrs::distribution::Normal;
use tracing::debug;

/// AR(1) simulator with its own PRNG.
pub struct Ar1Simulator {
    rng: Pcg64,
    noise: Normal,
    initial_value: InitialValue,
}

impl Ar1Simulator {
    /// Create a simulator from simulation settings.
    ///
    /// Seeds the PRNG from `config.seed`, or from OS entropy when unset.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        let rng = match config.seed {
            Some(s) => Pcg64::seed_from_u64(s),
            None => Pcg64::from_entropy(),
        };
        Ok(Self {
            rng,
            noise: standard_normal()?,
            initial_value: config.effective_initial_value(),
        })
    }

    pub fn from_config(config: &OseConfig) -> Result<Self, SimulationError> {
        Self::new(&config.simulation)
    }

    /// Default settings with a fixed seed.
    pub fn seeded(seed: u64) -> Result<Self, SimulationError> {
        Self::new(&SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::default()
        })
    }

    /// Replace the initial-value policy.
    pub fn with_initial_value(mut self, initial_value: InitialValue) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn initial_value(&self) -> InitialValue {
        self.initial_value
    }

    /// Simulate `spec.periods()` values using the simulator's PRNG.
    pub fn simulate(&mut self, spec: &ModelSpec) -> Vec<f64> {
        recurrence(spec, self.initial_value, &self.noise, &mut self.rng)
    }

    /// Simulate using a caller-supplied PRNG.
    pub fn simulate_with_rng<R: Rng + ?Sized>(&self, spec: &ModelSpec, rng: &mut R) -> Vec<f64> {
        recurrence(spec, self.initial_value, &self.noise, rng)
    }
}

fn standard_normal() -> Result<Normal, SimulationError> {
    Normal::new(0.0, 1.0).map_err(|e| SimulationError::Distribution {
        message: e.to_string(),
    })
}

fn recurrence<R: Rng + ?Sized>(
    spec: &ModelSpec,
    initial_value: InitialValue,
    noise: &Normal,
    rng: &mut R,
) -> Vec<f64> {
    let periods = spec.periods() as usize;
    let rho = spec.rho();
    debug!(periods, rho, initial = %initial_value, "simulating AR(1)");

    let mut x = Vec::with_capacity(periods);
    let first = match initial_value {
        InitialValue::Zero => 0.0,
        InitialValue::StandardNormal => noise.sample(rng),
    };
    x.push(first);
    for i in 1..periods {
        let eps = noise.sample(rng);
        x.push(eps + rho * x[i - 1]);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_initial_value_starts_at_zero() {
        let spec = ModelSpec::new(5, 0.5).unwrap();
        let mut sim = Ar1Simulator::seeded(1)
            .unwrap()
            .with_initial_value(InitialValue::Zero);
        let x = sim.simulate(&spec);
        assert_eq!(x[0], 0.0);
    }

    #[test]
    fn zero_rho_is_white_noise_after_the_first_step() {
        let spec = ModelSpec::new(4, 0.0).unwrap();
        let sim = Ar1Simulator::seeded(9).unwrap();

        let mut rng_a = Pcg64::seed_from_u64(77);
        let x = sim.simulate_with_rng(&spec, &mut rng_a);

        let mut rng_b = Pcg64::seed_from_u64(77);
        let noise = standard_normal().unwrap();
        let draws: Vec<f64> = (0..4).map(|_| noise.sample(&mut rng_b)).collect();
        assert_eq!(x, draws);
    }
}
