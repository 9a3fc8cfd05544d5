//! PyO3 wrapper for the simulation engine
//!
//! This module provides the Python interface to the Rust engine. The
//! configuration surface is four scalars (dose, two rates, horizon), so the
//! boundary works with plain values rather than a dict-parsing layer.

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::models::table::MassTable;
use crate::orchestrator::engine::Simulation as RustSimulation;
use crate::presets::{bateman_first_order, bateman_zero_order, BatemanConfig};

/// Python wrapper for a compartment model simulation
///
/// # Example (from Python)
///
/// ```python
/// from pk_simulator_core_rs import Simulation
///
/// sim = Simulation.bateman_first_order(
///     dose=100.0,
///     absorption_rate=0.04,   # 1/min
///     elimination_rate=0.02,  # 1/min
///     horizon=500,
/// )
/// sim.run()
/// plasma = sim.column("Plasma")   # list of 501 floats, minute 0..=500
/// ```
#[pyclass(name = "Simulation")]
pub struct PySimulation {
    inner: RustSimulation,
    result: Option<MassTable>,
}

impl PySimulation {
    fn from_config(
        config: BatemanConfig,
        build: fn(&BatemanConfig) -> Result<RustSimulation, crate::SimulationError>,
    ) -> PyResult<Self> {
        if config.dose < 0.0 {
            return Err(PyValueError::new_err(format!(
                "dose must be non-negative, got {}",
                config.dose
            )));
        }

        let inner = build(&config)
            .map_err(|e| PyValueError::new_err(format!("Failed to create simulation: {}", e)))?;

        Ok(Self {
            inner,
            result: None,
        })
    }
}

#[pymethods]
impl PySimulation {
    /// Bateman model with first-order absorption and elimination
    ///
    /// # Arguments
    ///
    /// * `dose` - Bolus dose at minute 0 (mg, >= 0)
    /// * `absorption_rate` - Absorption rate constant (1/min, > 0)
    /// * `elimination_rate` - Elimination rate constant (1/min, > 0)
    /// * `horizon` - Number of minutes to simulate (>= 1)
    ///
    /// # Errors
    ///
    /// Raises ValueError on a negative dose, non-positive rate, or zero
    /// horizon.
    #[staticmethod]
    fn bateman_first_order(
        dose: f64,
        absorption_rate: f64,
        elimination_rate: f64,
        horizon: usize,
    ) -> PyResult<Self> {
        Self::from_config(
            BatemanConfig {
                dose,
                absorption_rate,
                elimination_rate,
                horizon,
            },
            bateman_first_order,
        )
    }

    /// Bateman model with zero-order (constant-rate) absorption
    ///
    /// # Arguments
    ///
    /// * `dose` - Bolus dose at minute 0 (mg, >= 0)
    /// * `absorption_rate` - Constant release rate (mg/min, >= 0)
    /// * `elimination_rate` - Elimination rate constant (1/min, > 0)
    /// * `horizon` - Number of minutes to simulate (>= 1)
    #[staticmethod]
    fn bateman_zero_order(
        dose: f64,
        absorption_rate: f64,
        elimination_rate: f64,
        horizon: usize,
    ) -> PyResult<Self> {
        Self::from_config(
            BatemanConfig {
                dose,
                absorption_rate,
                elimination_rate,
                horizon,
            },
            bateman_zero_order,
        )
    }

    /// Execute the full simulation run
    ///
    /// Idempotent from Python's point of view: each call replays the whole
    /// horizon and replaces the stored result table.
    fn run(&mut self) {
        self.result = Some(self.inner.run());
    }

    /// Mass-over-time column for one compartment
    ///
    /// # Arguments
    ///
    /// * `name` - Compartment name ("Arzneiform", "Plasma", "Elimination")
    ///
    /// # Returns
    ///
    /// List of horizon + 1 floats, one per minute
    ///
    /// # Errors
    ///
    /// Raises RuntimeError if `run()` has not been called yet, KeyError if
    /// no compartment has the given name.
    fn column(&self, name: &str) -> PyResult<Vec<f64>> {
        let table = self
            .result
            .as_ref()
            .ok_or_else(|| PyRuntimeError::new_err("Simulation has not been run yet"))?;

        table
            .column(name)
            .map(|values| values.to_vec())
            .ok_or_else(|| PyKeyError::new_err(format!("No compartment named '{}'", name)))
    }

    /// Names of all compartments, in model order
    fn column_names(&self) -> Vec<String> {
        match &self.result {
            Some(table) => table.column_names().iter().map(|s| s.to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Simulation horizon in minutes
    fn horizon(&self) -> usize {
        self.inner.horizon()
    }
}
