//! Tests for the simulation engine
//!
//! Covers construction-time validation, the per-minute update rules, and
//! the in-place same-minute ordering semantics of the transition loop.

use pk_simulator_core_rs::{
    Compartment, Dosing, Simulation, SimulationError, Transition, TransitionMatrix,
};

fn two_compartment_chain(dose: f64, k: f64, horizon: usize) -> Simulation {
    let compartments = vec![
        Compartment::new("Source".to_string(), Dosing::bolus(dose)),
        Compartment::new("Sink".to_string(), Dosing::none()),
    ];
    let mut matrix = TransitionMatrix::null(2);
    matrix.set(0, 1, Transition::first_order(k).unwrap());

    Simulation::new(compartments, matrix, horizon).unwrap()
}

#[test]
fn test_dimension_mismatch_fails_at_construction() {
    let compartments = vec![
        Compartment::new("A".to_string(), Dosing::bolus(100.0)),
        Compartment::new("B".to_string(), Dosing::none()),
        Compartment::new("C".to_string(), Dosing::none()),
    ];

    let result = Simulation::new(compartments, TransitionMatrix::null(2), 500);
    assert_eq!(
        result.unwrap_err(),
        SimulationError::DimensionMismatch {
            matrix_size: 2,
            num_compartments: 3,
        }
    );
}

#[test]
fn test_zero_horizon_rejected() {
    let compartments = vec![Compartment::new("A".to_string(), Dosing::none())];
    let result = Simulation::new(compartments, TransitionMatrix::null(1), 0);
    assert_eq!(result.unwrap_err(), SimulationError::ZeroHorizon);
}

#[test]
fn test_initial_condition_from_dosing() {
    let mut sim = two_compartment_chain(75.0, 0.1, 20);
    let table = sim.run();

    assert_eq!(table.value("Source", 0), Some(75.0));
    assert_eq!(table.value("Sink", 0), Some(0.0));
}

#[test]
fn test_first_order_per_step_decay_relation() {
    let k = 0.05;
    let mut sim = two_compartment_chain(100.0, k, 200);
    let table = sim.run();

    let source = table.column("Source").unwrap();
    for t in 1..source.len() {
        let expected = source[t - 1] * (-k).exp();
        assert!(
            (source[t] - expected).abs() < 1e-12,
            "minute {}: {} != {}",
            t,
            source[t],
            expected
        );
    }
}

#[test]
fn test_mass_conservation_in_closed_system() {
    let mut sim = two_compartment_chain(100.0, 0.3, 300);
    let table = sim.run();

    let source = table.column("Source").unwrap();
    let sink = table.column("Sink").unwrap();
    for t in 0..source.len() {
        let total = source[t] + sink[t];
        assert!(
            (total - 100.0).abs() < 1e-9,
            "minute {}: total mass {}",
            t,
            total
        );
    }
}

#[test]
fn test_same_minute_updates_cascade_down_a_chain() {
    // A -> B -> C, both first-order. The (B, C) pair is visited after
    // (A, B) within the same minute, so it sees B's already-incremented
    // mass. With a frozen pre-minute snapshot, C would stay 0 at minute 1.
    let ka = 0.1;
    let kb = 0.2;
    let compartments = vec![
        Compartment::new("A".to_string(), Dosing::bolus(100.0)),
        Compartment::new("B".to_string(), Dosing::none()),
        Compartment::new("C".to_string(), Dosing::none()),
    ];
    let mut matrix = TransitionMatrix::null(3);
    matrix.set(0, 1, Transition::first_order(ka).unwrap());
    matrix.set(1, 2, Transition::first_order(kb).unwrap());

    let mut sim = Simulation::new(compartments, matrix, 1).unwrap();
    let table = sim.run();

    let fa = 1.0 - (-ka).exp();
    let fb = 1.0 - (-kb).exp();
    let into_b = 100.0 * fa;
    let into_c = into_b * fb;

    assert!((table.value("A", 1).unwrap() - (100.0 - into_b)).abs() < 1e-12);
    assert!((table.value("B", 1).unwrap() - (into_b - into_c)).abs() < 1e-12);

    let c1 = table.value("C", 1).unwrap();
    assert!(c1 > 0.0, "C must receive mass within the first minute");
    assert!((c1 - into_c).abs() < 1e-12);
}

#[test]
fn test_periodic_dosing_feeds_the_run() {
    // 2 mg every minute from minute 0 onwards, no outflow
    let dosing = Dosing::new(vec![], vec![2.0]).unwrap();
    let compartments = vec![Compartment::new("Depot".to_string(), dosing)];

    let mut sim = Simulation::new(compartments, TransitionMatrix::null(1), 10).unwrap();
    let table = sim.run();

    let depot = table.column("Depot").unwrap();
    for (t, &mass) in depot.iter().enumerate() {
        assert_eq!(mass, 2.0 * (t as f64 + 1.0), "minute {}", t);
    }
}

#[test]
fn test_run_is_repeatable() {
    let mut sim = two_compartment_chain(100.0, 0.05, 50);

    let first = sim.run();
    let second = sim.run();
    assert_eq!(first, second);
}

#[test]
fn test_table_shape_and_names() {
    let mut sim = two_compartment_chain(100.0, 0.05, 42);
    let table = sim.run();

    assert_eq!(table.num_rows(), 43);
    assert_eq!(table.horizon(), 42);
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.column_names(), vec!["Source", "Sink"]);
    assert!(table.column("Liver").is_none());
}

#[test]
fn test_compartment_lookup_by_name() {
    let sim = two_compartment_chain(100.0, 0.05, 10);

    assert!(sim.compartment("Source").is_some());
    assert!(sim.compartment("Nowhere").is_none());
    assert_eq!(sim.num_compartments(), 2);
    assert_eq!(sim.horizon(), 10);
}
