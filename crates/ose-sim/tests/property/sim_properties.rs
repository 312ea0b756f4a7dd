use ose_core::config::InitialValue;
use ose_sim::Ar1Simulator;
use ose_spec::ModelSpec;
use proptest::prelude::*;

fn arb_initial_value() -> impl Strategy<Value = InitialValue> {
    prop_oneof![Just(InitialValue::Zero), Just(InitialValue::StandardNormal)]
}

// ── Exactly T values, none NaN ───────────────────────────────────────────

proptest! {
    #[test]
    fn length_matches_periods_and_no_nan(
        periods in 1u64..500,
        rho in -3.0f64..3.0,
        seed in any::<u64>(),
        initial in arb_initial_value(),
    ) {
        let spec = ModelSpec::new(periods, rho).unwrap();
        let mut sim = Ar1Simulator::seeded(seed).unwrap().with_initial_value(initial);
        let x = sim.simulate(&spec);
        prop_assert_eq!(x.len() as u64, periods);
        prop_assert!(x.iter().all(|v| !v.is_nan()));
    }
}

// ── Same seed, same path ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn reproducible_under_seed(periods in 1u64..100, rho in -1.0f64..1.0, seed in any::<u64>()) {
        let spec = ModelSpec::new(periods, rho).unwrap();
        let a = Ar1Simulator::seeded(seed).unwrap().simulate(&spec);
        let b = Ar1Simulator::seeded(seed).unwrap().simulate(&spec);
        prop_assert_eq!(a, b);
    }
}
