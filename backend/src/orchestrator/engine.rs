//! Simulation Engine
//!
//! Finite-difference simulation of drug levels in a general linear
//! pharmacokinetic compartment model. The engine owns an ordered compartment
//! list and an N x N transition matrix and evolves compartment masses over a
//! fixed number of discrete one-minute steps.
//!
//! # Algorithm
//!
//! ```text
//! For each minute t = 1..=horizon:
//! 1. Dosing:      for every compartment c (in list order):
//!                     c.mass[t] = c.mass[t-1] + c.dosing.get(t)
//! 2. Transitions: for every ordered pair (src, dest) in row-major order:
//!                     dt = matrix[src][dest].minute_diff(src.mass[t])
//!                     src.mass[t]  -= dt
//!                     dest.mass[t] += dt
//! ```
//!
//! # Ordering semantics
//!
//! Step 2 mutates `mass[t]` in place, pair by pair. A later pair in the
//! row-major traversal of the same minute reads the *already-updated* mass
//! of whichever compartment is now its source: a compartment that lost mass
//! earlier in the minute presents the reduced value when it acts as source
//! again. Transitions are NOT computed from a frozen pre-minute snapshot;
//! snapshotting would change the curves of any topology with more than one
//! transition per minute touching a shared compartment.
//!
//! # Critical Invariants
//!
//! 1. All mass values stay non-negative; a negative mass after a transition
//!    is a wiring defect (e.g. an uncapped constant-rate transfer) and is
//!    surfaced by an assertion, never clamped
//! 2. The loop is strictly sequential and always runs exactly `horizon`
//!    iterations; there is no concurrency and no mid-run cancellation
//! 3. The engine is the sole writer of compartment mass during a run

use crate::models::compartment::Compartment;
use crate::models::table::{MassColumn, MassTable};
use crate::models::transition::TransitionMatrix;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default simulation horizon in minutes
pub const DEFAULT_HORIZON: usize = 500;

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Transition matrix is {matrix_size}x{matrix_size} but there are {num_compartments} compartments")]
    DimensionMismatch {
        matrix_size: usize,
        num_compartments: usize,
    },

    #[error("Simulation horizon must be at least 1 minute")]
    ZeroHorizon,

    #[error(transparent)]
    Dosing(#[from] crate::models::dosing::DosingError),

    #[error(transparent)]
    Transition(#[from] crate::models::transition::TransitionError),
}

/// Finite-difference simulation of a compartment model
///
/// Owns the compartments and transition matrix for the duration of a run.
/// `run` is re-runnable: each call resets every mass series and replays the
/// full horizon.
///
/// # Example
/// ```
/// use pk_simulator_core_rs::{Compartment, Dosing, Simulation, Transition, TransitionMatrix};
///
/// let compartments = vec![
///     Compartment::new("Depot".to_string(), Dosing::bolus(50.0)),
///     Compartment::new("Central".to_string(), Dosing::none()),
/// ];
/// let mut matrix = TransitionMatrix::null(2);
/// matrix.set(0, 1, Transition::first_order(0.1).unwrap());
///
/// let mut sim = Simulation::new(compartments, matrix, 10).unwrap();
/// let table = sim.run();
///
/// assert_eq!(table.value("Depot", 0), Some(50.0));
/// assert_eq!(table.num_rows(), 11);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Ordered compartment list; positions index the transition matrix
    compartments: Vec<Compartment>,

    /// Pairwise kinetics rules, row-major
    transitions: TransitionMatrix,

    /// Number of discrete one-minute steps per run
    horizon: usize,
}

impl Simulation {
    /// Create a simulation from compartments, transition matrix and horizon
    ///
    /// # Arguments
    /// * `compartments` - Ordered compartment list (positions index the matrix)
    /// * `transitions` - N x N matrix of kinetics rules
    /// * `horizon` - Number of discrete minutes to simulate (>= 1)
    ///
    /// # Returns
    /// - `Ok(Simulation)` on valid configuration
    /// - `Err(SimulationError::DimensionMismatch)` if the matrix dimension
    ///   differs from the compartment count (checked here, before any step runs)
    /// - `Err(SimulationError::ZeroHorizon)` if `horizon` is 0
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::{Compartment, Dosing, Simulation, TransitionMatrix};
    ///
    /// let compartments = vec![
    ///     Compartment::new("A".to_string(), Dosing::bolus(1.0)),
    ///     Compartment::new("B".to_string(), Dosing::none()),
    ///     Compartment::new("C".to_string(), Dosing::none()),
    /// ];
    ///
    /// // 2x2 matrix for 3 compartments: rejected at construction
    /// let result = Simulation::new(compartments, TransitionMatrix::null(2), 500);
    /// assert!(result.is_err());
    /// ```
    pub fn new(
        compartments: Vec<Compartment>,
        transitions: TransitionMatrix,
        horizon: usize,
    ) -> Result<Self, SimulationError> {
        if transitions.size() != compartments.len() {
            return Err(SimulationError::DimensionMismatch {
                matrix_size: transitions.size(),
                num_compartments: compartments.len(),
            });
        }

        if horizon == 0 {
            return Err(SimulationError::ZeroHorizon);
        }

        Ok(Self {
            compartments,
            transitions,
            horizon,
        })
    }

    /// Simulation horizon in minutes
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Number of compartments
    pub fn num_compartments(&self) -> usize {
        self.compartments.len()
    }

    /// Look up a compartment by name
    pub fn compartment(&self, name: &str) -> Option<&Compartment> {
        self.compartments.iter().find(|c| c.name() == name)
    }

    /// Execute one full simulation run and assemble the result table
    ///
    /// Resets every compartment, then advances minute by minute: dosing
    /// first, then all pairwise transitions in row-major matrix order (see
    /// the module documentation for the in-place ordering semantics).
    ///
    /// # Panics
    /// Panics if any compartment mass goes negative after a transition.
    /// That indicates a misconfigured transition wiring; the kinds
    /// constructed through [`crate::Transition`] cap their transfer at the
    /// available mass and never trigger this.
    pub fn run(&mut self) -> MassTable {
        let n = self.compartments.len();

        // Initialise states
        for compartment in &mut self.compartments {
            compartment.reset(self.horizon);
        }

        for t in 1..=self.horizon {
            // Update dose
            for compartment in &mut self.compartments {
                let carried = compartment.mass_at(t - 1);
                let dosed = compartment.dosing().get(t);
                compartment.push_minute(carried + dosed);
            }

            // Apply transition matrix, row-major; each pair observes the
            // mutations of all earlier pairs in this same minute
            for src in 0..n {
                for dest in 0..n {
                    let diff = self
                        .transitions
                        .get(src, dest)
                        .minute_diff(self.compartments[src].mass_at(t));
                    self.compartments[src].apply_diff(t, -diff);
                    self.compartments[dest].apply_diff(t, diff);

                    assert!(
                        self.compartments[src].mass_at(t) >= 0.0,
                        "mass of '{}' went negative at minute {}: misconfigured transition",
                        self.compartments[src].name(),
                        t
                    );
                }
            }
        }

        MassTable::new(
            self.compartments
                .iter()
                .map(|c| MassColumn {
                    name: c.name().to_string(),
                    values: c.mass().to_vec(),
                })
                .collect(),
        )
    }
}
