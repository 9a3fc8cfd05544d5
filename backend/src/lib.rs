//! Pharmacokinetic Compartment Simulator - Rust Engine
//!
//! Finite-difference simulation of drug mass movement through a small
//! network of physiological compartments over discrete one-minute steps,
//! with configurable absorption/elimination kinetics. Produces the
//! mass-over-time curves of the didactic Bateman-type one-compartment
//! models.
//!
//! # Architecture
//!
//! - **models**: Domain types (Dosing, Compartment, Transition, MassTable)
//! - **orchestrator**: Main simulation loop
//! - **presets**: Ready-made one-compartment extravascular models
//!
//! # Critical Invariants
//!
//! 1. All mass values are f64 (mg) and stay non-negative throughout a run
//! 2. The simulation is deterministic and strictly sequential: within each
//!    minute, dosing is applied first, then transitions in row-major matrix
//!    order, each pair observing the mutations of earlier pairs
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod models;
pub mod orchestrator;
pub mod presets;

// Re-exports for convenience
pub use models::{
    compartment::{Compartment, CompartmentError},
    dosing::{Dosing, DosingError},
    table::{MassColumn, MassTable},
    transition::{Transition, TransitionError, TransitionMatrix},
};
pub use orchestrator::{Simulation, SimulationError, DEFAULT_HORIZON};
pub use presets::BatemanConfig;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn pk_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulation::PySimulation>()?;
    Ok(())
}
