//! Harness tests driven by real spec construction and simulation.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use ose_core::config::TestingConfig;
use ose_core::errors::HarnessError;
use ose_sim::Ar1Simulator;
use ose_spec::{deserialize, serialize, ModelSpec, SpecBuilder, SpecSource};
use ose_testing::{
    run_robustness, run_robustness_configured, with_fresh_directory, PropertySuite,
    RegressionVault,
};

/// Seed -> simulated path of a randomly generated spec.
fn seeded_path(seed: u64) -> Vec<f64> {
    let spec = SpecBuilder::seeded(seed)
        .construct(SpecSource::Random, None)
        .unwrap();
    Ar1Simulator::seeded(seed).unwrap().simulate(&spec)
}

fn file_round_trip(dir: &std::path::Path) -> Result<(), String> {
    let spec = SpecBuilder::default()
        .generate(None)
        .map_err(|e| e.to_string())?;
    let path = dir.join("spec.yml");
    serialize(&spec, &path).map_err(|e| e.to_string())?;
    let restored = deserialize(&path).map_err(|e| e.to_string())?;
    if restored == spec {
        Ok(())
    } else {
        Err(format!("{restored:?} != {spec:?}"))
    }
}

#[test]
fn empty_suite_reports_no_tests() {
    let err = PropertySuite::new().run_for(Duration::ZERO).unwrap_err();
    assert!(matches!(err, HarnessError::NoTestsRegistered));
}

#[test]
fn property_suite_runs_at_least_one_round() {
    let base = tempfile::tempdir().unwrap();
    let report = PropertySuite::new()
        .with_base_dir(base.path())
        .register("file_round_trip", file_round_trip)
        .register("simulation_length", |_dir: &std::path::Path| {
            let spec = ModelSpec::new(7, 0.4).map_err(|e| e.to_string())?;
            let n = Ar1Simulator::seeded(1).map_err(|e| e.to_string())?.simulate(&spec).len();
            if n == 7 {
                Ok(())
            } else {
                Err(format!("expected 7 values, got {n}"))
            }
        })
        .run_for(Duration::ZERO)
        .unwrap();
    assert_eq!(report.rounds, 1);
    assert_eq!(report.executions, 2);
    // Every scratch directory was cleaned up.
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
}

#[test]
fn property_suite_loops_until_budget() {
    let base = tempfile::tempdir().unwrap();
    let report = PropertySuite::new()
        .with_base_dir(base.path())
        .register("file_round_trip", file_round_trip)
        .run_for(Duration::from_millis(50))
        .unwrap();
    assert!(report.elapsed >= Duration::from_millis(50));
    assert!(report.rounds >= 1);
}

#[test]
fn failing_property_names_the_test() {
    let base = tempfile::tempdir().unwrap();
    let err = PropertySuite::new()
        .with_base_dir(base.path())
        .register("always_fails", |_: &std::path::Path| Err("boom".to_string()))
        .run_for(Duration::ZERO)
        .unwrap_err();
    match err {
        HarnessError::PropertyFailed { name, iteration, message } => {
            assert_eq!(name, "always_fails");
            assert_eq!(iteration, 0);
            assert_eq!(message, "boom");
        }
        other => panic!("expected PropertyFailed, got {other:?}"),
    }
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
}

#[test]
fn configured_run_uses_testing_budget() {
    let base = tempfile::tempdir().unwrap();
    let config = TestingConfig {
        property_minutes: Some(0.0),
        testdir_length: Some(4),
        ..TestingConfig::default()
    };
    let report = PropertySuite::new()
        .with_base_dir(base.path())
        .register("file_round_trip", file_round_trip)
        .run_configured(&config)
        .unwrap();
    assert_eq!(report.rounds, 1);
}

#[test]
fn regression_vault_checks_clean_against_itself() {
    let base = tempfile::tempdir().unwrap();
    let vault = RegressionVault::create(seeded_path, 10);
    assert_eq!(vault.len(), 10);
    assert_eq!(vault.entries()[3].seed, 3);
    vault.check(seeded_path, 10, base.path()).unwrap();
}

#[test]
fn regression_vault_reports_first_mismatching_seed() {
    let base = tempfile::tempdir().unwrap();
    let vault = RegressionVault::create(seeded_path, 5);
    let drifted = |seed: u64| {
        let mut path = seeded_path(seed);
        if seed >= 2 {
            path[0] += 1.0;
        }
        path
    };
    match vault.check(drifted, 5, base.path()).unwrap_err() {
        HarnessError::RegressionMismatch { seed } => assert_eq!(seed, 2),
        other => panic!("expected RegressionMismatch, got {other:?}"),
    }
    // Only the first two entries are checked, and they still agree.
    vault.check(drifted, 2, base.path()).unwrap();
}

#[test]
fn regression_vault_survives_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vault.json");
    let vault = RegressionVault::create(seeded_path, 8);
    vault.save(&path).unwrap();

    let loaded: RegressionVault<Vec<f64>> = RegressionVault::load(&path).unwrap();
    assert_eq!(loaded, vault);
    loaded.check(seeded_path, 8, dir.path()).unwrap();
}

#[test]
fn loading_a_corrupt_vault_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vault.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = RegressionVault::<Vec<f64>>::load(&path).unwrap_err();
    assert!(matches!(err, HarnessError::VaultFormat { .. }));
}

#[test]
fn robustness_run_evaluates_random_specs() {
    let base = tempfile::tempdir().unwrap();
    let mut builder = SpecBuilder::seeded(17);
    let mut sim = Ar1Simulator::seeded(17).unwrap();
    let report = run_robustness(
        || builder.generate(None).unwrap(),
        |spec: ModelSpec, dir| {
            let path = dir.join("request.yml");
            serialize(&spec, &path).map_err(|e| e.to_string())?;
            let x = sim.simulate(&deserialize(&path).map_err(|e| e.to_string())?);
            if x.len() as u64 == spec.periods() && x.iter().all(|v| !v.is_nan()) {
                Ok(())
            } else {
                Err(format!("bad path for {spec:?}"))
            }
        },
        Duration::from_millis(20),
        base.path(),
    )
    .unwrap();
    assert!(report.iterations >= 1);
}

#[test]
fn robustness_failure_stops_the_run() {
    let base = tempfile::tempdir().unwrap();
    let calls = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&calls);
    let err = run_robustness(
        move || {
            counter.set(counter.get() + 1);
            counter.get()
        },
        |n, _| if n < 3 { Ok(()) } else { Err(format!("request {n}")) },
        Duration::from_secs(60),
        base.path(),
    )
    .unwrap_err();
    assert!(matches!(err, HarnessError::RobustnessFailed { iteration: 2, .. }));
    assert_eq!(calls.get(), 3);
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
}

#[test]
fn configured_robustness_run_uses_testing_settings() {
    let base = tempfile::tempdir().unwrap();
    let config = TestingConfig {
        robustness_minutes: Some(0.0),
        testdir_length: Some(3),
        ..TestingConfig::default()
    };
    let mut builder = SpecBuilder::seeded(5);
    let report = run_robustness_configured(
        || builder.generate(None).unwrap(),
        |_spec: ModelSpec, dir| {
            let name_len = dir.file_name().map_or(0, |n| n.len());
            if name_len == 3 {
                Ok(())
            } else {
                Err(format!("scratch name has {name_len} characters"))
            }
        },
        &config,
        base.path(),
    )
    .unwrap();
    assert_eq!(report.iterations, 1);
}

#[test]
fn configured_vault_uses_regression_test_count() {
    let base = tempfile::tempdir().unwrap();
    let recorded = TestingConfig {
        regression_tests: Some(6),
        testdir_length: Some(3),
        ..TestingConfig::default()
    };
    let vault = RegressionVault::create_configured(seeded_path, &recorded);
    assert_eq!(vault.len(), 6);

    let drifted = |seed: u64| {
        let mut path = seeded_path(seed);
        if seed == 4 {
            path[0] += 1.0;
        }
        path
    };
    let short = TestingConfig {
        regression_tests: Some(3),
        ..recorded.clone()
    };
    vault.check_configured(drifted, &short, base.path()).unwrap();
    match vault.check_configured(drifted, &recorded, base.path()).unwrap_err() {
        HarnessError::RegressionMismatch { seed } => assert_eq!(seed, 4),
        other => panic!("expected RegressionMismatch, got {other:?}"),
    }
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
}

#[test]
fn fresh_directory_is_removed_when_the_body_panics() {
    let base = tempfile::tempdir().unwrap();
    let outcome = std::panic::catch_unwind(|| {
        with_fresh_directory::<()>(base.path(), 6, |dir| {
            std::fs::write(dir.join("partial.txt"), "x").unwrap();
            panic!("body failed");
        })
    });
    assert!(outcome.is_err());
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
}
