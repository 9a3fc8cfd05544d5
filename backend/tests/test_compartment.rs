//! Tests for the Compartment model

use pk_simulator_core_rs::{Compartment, CompartmentError, Dosing};

#[test]
fn test_new_compartment_has_no_series() {
    let plasma = Compartment::new("Plasma".to_string(), Dosing::none());

    assert_eq!(plasma.name(), "Plasma");
    assert_eq!(plasma.volume(), 1.0);
    assert!(plasma.mass().is_empty());
}

#[test]
fn test_reset_seeds_initial_condition_from_dosing() {
    let dosing = Dosing::new(vec![5.0, 3.0], vec![1.0, 2.0]).unwrap();
    let mut comp = Compartment::new("Arzneiform".to_string(), dosing);

    comp.reset(500);

    // mass[0] == dosing.get(0), nothing else populated yet
    assert_eq!(comp.mass().len(), 1);
    assert_eq!(comp.mass()[0], 5.0);
}

#[test]
fn test_reset_with_no_dosing_starts_empty_pool() {
    let mut comp = Compartment::new("Plasma".to_string(), Dosing::none());

    comp.reset(100);
    assert_eq!(comp.mass()[0], 0.0);
}

#[test]
fn test_concentration_divides_by_volume() {
    let mut comp =
        Compartment::with_volume("Plasma".to_string(), Dosing::bolus(100.0), 4.0);
    comp.reset(10);

    let concentration = comp.concentration().unwrap();
    assert_eq!(concentration, vec![25.0]);
}

#[test]
fn test_concentration_before_reset_is_empty() {
    let comp = Compartment::with_volume("Plasma".to_string(), Dosing::none(), 2.0);
    assert_eq!(comp.concentration().unwrap(), Vec::<f64>::new());
}

#[test]
fn test_concentration_rejects_non_positive_volume() {
    let zero = Compartment::with_volume("Plasma".to_string(), Dosing::none(), 0.0);
    assert_eq!(
        zero.concentration(),
        Err(CompartmentError::NonPositiveVolume { volume: 0.0 })
    );

    let negative = Compartment::with_volume("Plasma".to_string(), Dosing::none(), -1.0);
    assert!(negative.concentration().is_err());
}

#[test]
fn test_dosing_accessor() {
    let comp = Compartment::new("Arzneiform".to_string(), Dosing::bolus(100.0));
    assert_eq!(comp.dosing().get(0), 100.0);
}
