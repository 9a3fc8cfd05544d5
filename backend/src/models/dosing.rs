//! Dosing schedule model
//!
//! Describes how much drug mass enters a compartment at each discrete minute.
//! A schedule is a pair of sequences: the elements of the first are applied
//! once, then the elements of the second repeat cyclically forever.
//!
//! A bolus (the whole dose at minute 0) and the "no dosing" schedule are both
//! expressed through the same representation, so callers only ever deal with
//! one type and one `get(minute)` contract.
//!
//! CRITICAL: All mass values are f64 (mg)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a dosing schedule
#[derive(Debug, Error, PartialEq)]
pub enum DosingError {
    #[error("Periodic dosing sequence must be non-empty")]
    EmptyPeriodic,

    #[error("Dose increments must be non-negative, got {value} at index {index}")]
    NegativeDose { index: usize, value: f64 },
}

/// Dosing schedule of a drug for one compartment
///
/// `get(i)` is a pure function from minute index to the mass increment
/// administered exactly at that minute: the initial sequence is consumed
/// once, then the periodic sequence repeats forever.
///
/// # Example
/// ```
/// use pk_simulator_core_rs::Dosing;
///
/// // 5 mg then 3 mg once, afterwards alternating 1 mg / 2 mg forever
/// let dosing = Dosing::new(vec![5.0, 3.0], vec![1.0, 2.0]).unwrap();
/// assert_eq!(dosing.get(0), 5.0);
/// assert_eq!(dosing.get(1), 3.0);
/// assert_eq!(dosing.get(2), 1.0);
/// assert_eq!(dosing.get(3), 2.0);
/// assert_eq!(dosing.get(4), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dosing {
    /// Mass increments applied once, starting at minute 0
    initial: Vec<f64>,
    /// Mass increments repeated cyclically after `initial` is exhausted
    periodic: Vec<f64>,
}

impl Dosing {
    /// Create a dosing schedule from an initial and a periodic sequence
    ///
    /// # Arguments
    /// * `initial` - Increments applied once, starting at minute 0 (may be empty)
    /// * `periodic` - Increments repeated forever afterwards (must be non-empty)
    ///
    /// # Returns
    /// - `Ok(Dosing)` if both sequences are valid
    /// - `Err(DosingError::EmptyPeriodic)` if the periodic sequence is empty
    /// - `Err(DosingError::NegativeDose)` if any increment is negative
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::{Dosing, DosingError};
    ///
    /// let infusion = Dosing::new(vec![], vec![2.5]).unwrap();
    /// assert_eq!(infusion.get(17), 2.5);
    ///
    /// assert_eq!(Dosing::new(vec![1.0], vec![]), Err(DosingError::EmptyPeriodic));
    /// ```
    pub fn new(initial: Vec<f64>, periodic: Vec<f64>) -> Result<Self, DosingError> {
        if periodic.is_empty() {
            return Err(DosingError::EmptyPeriodic);
        }

        for (index, &value) in initial.iter().chain(periodic.iter()).enumerate() {
            if value < 0.0 {
                return Err(DosingError::NegativeDose { index, value });
            }
        }

        Ok(Self { initial, periodic })
    }

    /// Administer the whole dose at once, at minute 0
    ///
    /// # Arguments
    /// * `dose` - Mass administered at minute 0 (mg, must be non-negative)
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::Dosing;
    ///
    /// let bolus = Dosing::bolus(100.0);
    /// assert_eq!(bolus.get(0), 100.0);
    /// assert_eq!(bolus.get(1), 0.0);
    /// assert_eq!(bolus.get(500), 0.0);
    /// ```
    pub fn bolus(dose: f64) -> Self {
        assert!(dose >= 0.0, "dose must be non-negative");
        Self {
            initial: vec![dose],
            periodic: vec![0.0],
        }
    }

    /// No drug is given
    ///
    /// Zero-argument factory for the shared "no dosing" schedule. The value
    /// is immutable, so sharing clones of it is always safe.
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::Dosing;
    ///
    /// let nothing = Dosing::none();
    /// assert_eq!(nothing.get(0), 0.0);
    /// assert_eq!(nothing.get(42), 0.0);
    /// ```
    pub fn none() -> Self {
        Self::bolus(0.0)
    }

    /// Mass increment administered exactly at the given minute
    ///
    /// Pure lookup: `initial[i]` while the initial sequence lasts, then
    /// `periodic[(i - initial.len()) % periodic.len()]`.
    pub fn get(&self, minute: usize) -> f64 {
        if minute < self.initial.len() {
            self.initial[minute]
        } else {
            self.periodic[(minute - self.initial.len()) % self.periodic.len()]
        }
    }

    /// Length of the initial (apply-once) sequence
    pub fn initial_len(&self) -> usize {
        self.initial.len()
    }

    /// Length of the repeating cycle
    pub fn cycle_len(&self) -> usize {
        self.periodic.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "dose must be non-negative")]
    fn test_negative_bolus_panics() {
        Dosing::bolus(-1.0);
    }

    #[test]
    fn test_empty_initial_starts_cycle_at_minute_zero() {
        let dosing = Dosing::new(vec![], vec![4.0, 0.0]).unwrap();
        assert_eq!(dosing.get(0), 4.0);
        assert_eq!(dosing.get(1), 0.0);
        assert_eq!(dosing.get(2), 4.0);
    }
}
