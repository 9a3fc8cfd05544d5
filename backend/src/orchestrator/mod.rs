//! Orchestrator - the finite-difference simulation loop
//!
//! Drives a fixed number of discrete one-minute steps over a compartment
//! list and its transition matrix, producing the mass-over-time table.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{Simulation, SimulationError, DEFAULT_HORIZON};
