//! Tests for the Dosing schedule
//!
//! CRITICAL: All mass values are f64 (mg)

use pk_simulator_core_rs::{Dosing, DosingError};

#[test]
fn test_initial_then_periodic_lookup() {
    let dosing = Dosing::new(vec![5.0, 3.0], vec![1.0, 2.0]).unwrap();

    assert_eq!(dosing.get(0), 5.0);
    assert_eq!(dosing.get(1), 3.0);
    assert_eq!(dosing.get(2), 1.0);
    assert_eq!(dosing.get(3), 2.0);
    assert_eq!(dosing.get(4), 1.0);
    assert_eq!(dosing.get(5), 2.0);
}

#[test]
fn test_periodic_cycle_far_into_the_future() {
    let dosing = Dosing::new(vec![10.0], vec![0.0, 0.0, 7.0]).unwrap();

    // After the single initial minute, the cycle index is (i - 1) % 3
    assert_eq!(dosing.get(1), 0.0);
    assert_eq!(dosing.get(3), 7.0);
    assert_eq!(dosing.get(3 + 3 * 1000), 7.0);
    assert_eq!(dosing.get(4 + 3 * 1000), 0.0);
}

#[test]
fn test_bolus_applies_once_at_minute_zero() {
    let bolus = Dosing::bolus(100.0);

    assert_eq!(bolus.get(0), 100.0);
    for minute in 1..600 {
        assert_eq!(bolus.get(minute), 0.0);
    }
}

#[test]
fn test_none_is_zero_everywhere() {
    let nothing = Dosing::none();

    assert_eq!(nothing.get(0), 0.0);
    assert_eq!(nothing.get(1), 0.0);
    assert_eq!(nothing.get(10_000), 0.0);
}

#[test]
fn test_get_is_pure() {
    let dosing = Dosing::new(vec![2.0], vec![1.0, 0.0]).unwrap();

    // Repeated lookups at the same index always agree
    assert_eq!(dosing.get(7), dosing.get(7));
    assert_eq!(dosing.get(0), dosing.get(0));
}

#[test]
fn test_empty_periodic_rejected() {
    let result = Dosing::new(vec![1.0, 2.0], vec![]);
    assert_eq!(result, Err(DosingError::EmptyPeriodic));
}

#[test]
fn test_negative_increment_rejected() {
    let result = Dosing::new(vec![1.0], vec![-0.5]);
    assert_eq!(
        result,
        Err(DosingError::NegativeDose {
            index: 1,
            value: -0.5
        })
    );
}

#[test]
fn test_sequence_lengths() {
    let dosing = Dosing::new(vec![5.0, 3.0], vec![1.0, 2.0, 0.0]).unwrap();
    assert_eq!(dosing.initial_len(), 2);
    assert_eq!(dosing.cycle_len(), 3);

    let bolus = Dosing::bolus(50.0);
    assert_eq!(bolus.initial_len(), 1);
    assert_eq!(bolus.cycle_len(), 1);
}
