//! Compartment model
//!
//! A compartment is a fictitious volume in which the drug distributes
//! instantaneously and homogeneously. Each compartment has:
//! - A name, used as the column label in the result table
//! - A volume of distribution (liters), used only to derive concentration
//! - A dosing schedule describing mass input over time
//! - A mass time series, one value per simulated minute
//!
//! The mass series is allocated by `reset` at the start of a simulation run
//! and then written exclusively by the engine. No other component mutates
//! compartment mass between `reset` and completion of the run; the
//! fine-grained per-minute mutators are therefore crate-private.
//!
//! CRITICAL: All mass values are f64 (mg)

use crate::models::dosing::Dosing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during compartment queries
#[derive(Debug, Error, PartialEq)]
pub enum CompartmentError {
    #[error("Volume of distribution must be positive to derive concentration, got {volume}")]
    NonPositiveVolume { volume: f64 },
}

/// A named pool of drug mass with an associated dosing schedule
///
/// # Example
/// ```
/// use pk_simulator_core_rs::{Compartment, Dosing};
///
/// let plasma = Compartment::new("Plasma".to_string(), Dosing::none());
/// assert_eq!(plasma.name(), "Plasma");
/// assert!(plasma.mass().is_empty()); // no simulation run yet
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    /// Column label in the result table
    name: String,

    /// Volume of distribution (liters); only used for concentration
    volume: f64,

    /// Mass input schedule
    dosing: Dosing,

    /// Mass per minute (mg), indexed 0..=horizon; empty until `reset`
    mass: Vec<f64>,
}

impl Compartment {
    /// Create a compartment with the default volume of distribution (1 L)
    ///
    /// # Arguments
    /// * `name` - Column label in the result table
    /// * `dosing` - Mass input schedule (`Dosing::none()` for no input)
    pub fn new(name: String, dosing: Dosing) -> Self {
        Self::with_volume(name, dosing, 1.0)
    }

    /// Create a compartment with an explicit volume of distribution
    ///
    /// The volume is not validated here; `concentration` fails if it is not
    /// positive at query time.
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::{Compartment, Dosing};
    ///
    /// let plasma = Compartment::with_volume("Plasma".to_string(), Dosing::none(), 42.0);
    /// assert_eq!(plasma.volume(), 42.0);
    /// ```
    pub fn with_volume(name: String, dosing: Dosing, volume: f64) -> Self {
        Self {
            name,
            volume,
            dosing,
            mass: Vec::new(),
        }
    }

    /// Compartment name (result table column label)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Volume of distribution (liters)
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Dosing schedule
    pub fn dosing(&self) -> &Dosing {
        &self.dosing
    }

    /// Mass time series (mg per minute)
    ///
    /// Empty until a simulation run has called `reset`; fully populated
    /// (length horizon + 1) after a run completes.
    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    /// Concentration time series: mass divided element-wise by volume
    ///
    /// # Returns
    /// - `Ok(Vec<f64>)` - One concentration value per simulated minute
    ///   (empty if no run has populated the mass series yet)
    /// - `Err(CompartmentError::NonPositiveVolume)` if volume <= 0
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::{Compartment, Dosing};
    ///
    /// let bad = Compartment::with_volume("Plasma".to_string(), Dosing::none(), 0.0);
    /// assert!(bad.concentration().is_err());
    /// ```
    pub fn concentration(&self) -> Result<Vec<f64>, CompartmentError> {
        if self.volume <= 0.0 {
            return Err(CompartmentError::NonPositiveVolume {
                volume: self.volume,
            });
        }
        Ok(self.mass.iter().map(|m| m / self.volume).collect())
    }

    /// Reallocate the mass series for a run over `horizon` minutes
    ///
    /// Index 0 is seeded with `dosing.get(0)`; minutes 1..=horizon are
    /// appended by the engine as the simulation advances.
    pub fn reset(&mut self, horizon: usize) {
        self.mass.clear();
        self.mass.reserve(horizon + 1);
        self.mass.push(self.dosing.get(0));
    }

    /// Mass at a given minute (engine-internal)
    pub(crate) fn mass_at(&self, minute: usize) -> f64 {
        self.mass[minute]
    }

    /// Append the next minute's pre-transition mass (engine-internal)
    pub(crate) fn push_minute(&mut self, mass: f64) {
        self.mass.push(mass);
    }

    /// Apply a signed mass delta at a given minute (engine-internal)
    pub(crate) fn apply_diff(&mut self, minute: usize, delta: f64) {
        self.mass[minute] += delta;
    }
}
