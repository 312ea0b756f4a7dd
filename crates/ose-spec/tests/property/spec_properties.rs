use ose_core::errors::SpecError;
use ose_spec::{deserialize, serialize, spec_mapping, ModelSpec, SpecBuilder, SpecSource};
use proptest::prelude::*;

fn arb_spec() -> impl Strategy<Value = ModelSpec> {
    (1u64..10_000, -5.0f64..5.0).prop_map(|(periods, rho)| ModelSpec::new(periods, rho).unwrap())
}

// ── Every constructed spec passes validation ─────────────────────────────

proptest! {
    #[test]
    fn constructed_specs_always_validate(seed in any::<u64>()) {
        let mut builder = SpecBuilder::seeded(seed);
        let spec = builder.construct(SpecSource::Random, None).unwrap();
        prop_assert!(spec.validate().is_ok());
    }
}

// ── construct(to_mapping(s)) == s ────────────────────────────────────────

proptest! {
    #[test]
    fn mapping_round_trip(spec in arb_spec()) {
        let mut builder = SpecBuilder::seeded(0);
        let rebuilt = builder.construct(spec.to_mapping().into(), None).unwrap();
        prop_assert_eq!(rebuilt, spec);
    }
}

// ── deserialize(serialize(s)) == s ───────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn file_round_trip(spec in arb_spec()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.yml");
        serialize(&spec, &path).unwrap();
        prop_assert_eq!(deserialize(&path).unwrap(), spec);
    }
}

// ── Replacing rho changes nothing else ───────────────────────────────────

proptest! {
    #[test]
    fn replace_rho_only_touches_rho(spec in arb_spec(), rho in -5.0f64..5.0) {
        let derived = spec.with_replacements(&spec_mapping([("rho", rho)])).unwrap();
        prop_assert_eq!(derived.rho(), rho);
        prop_assert_eq!(derived.periods(), spec.periods());
    }
}

// ── Constraints always win over the draw ─────────────────────────────────

proptest! {
    #[test]
    fn periods_constraint_always_wins(seed in any::<u64>()) {
        let mut builder = SpecBuilder::seeded(seed);
        let spec = builder
            .construct(SpecSource::Random, Some(&spec_mapping([("periods", 4_i64)])))
            .unwrap();
        prop_assert_eq!(spec.periods(), 4);
        prop_assert!(spec.rho() > 0.01 && spec.rho() < 0.99);
    }
}

// ── Non-positive periods never validate ──────────────────────────────────

proptest! {
    #[test]
    fn non_positive_periods_rejected(periods in i64::MIN..=0, rho in -1.0f64..1.0) {
        let result = ModelSpec::from_mapping(spec_mapping([
            ("periods", ose_spec::FieldValue::Integer(periods)),
            ("rho", ose_spec::FieldValue::Float(rho)),
        ]));
        prop_assert!(
            matches!(result, Err(SpecError::Validation { ref field, .. }) if field == "periods"),
            "expected periods validation error"
        );
    }
}
