//! Transition kinetics model
//!
//! A transition is the kinetics rule governing drug mass flow from one
//! compartment to another within a single one-minute step. The three kinds
//! form a closed set:
//! - **Null**: no pathway between the pair
//! - **ZeroOrder**: constant amount per minute, saturating at availability
//! - **FirstOrder**: amount proportional to the current source mass
//!
//! Transitions are immutable configuration; they hold only their rate
//! parameter and never own compartment state.
//!
//! # Critical Invariants
//!
//! 1. `minute_diff` never returns more than the available source mass
//! 2. `minute_diff` never returns a negative amount

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a transition
#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("Zero-order rate must be non-negative, got {rate}")]
    NegativeRate { rate: f64 },

    #[error("First-order rate constant must be positive, got {rate}")]
    NonPositiveRate { rate: f64 },
}

/// Kinetics rule for drug mass flow between an ordered compartment pair
///
/// # Example
/// ```
/// use pk_simulator_core_rs::Transition;
///
/// let elimination = Transition::first_order(0.02).unwrap();
/// let transferred = elimination.minute_diff(100.0);
///
/// // First-order transfer is strictly less than the available mass
/// assert!(transferred > 0.0 && transferred < 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// No pathway: nothing flows between the pair
    Null,

    /// Zero-order kinetics: a constant amount per minute, capped at the
    /// mass still present in the source
    ZeroOrder {
        /// Transfer amount per minute (mg/min)
        rate: f64,
    },

    /// First-order kinetics: exponential decay at the given rate constant,
    /// discretized exactly over the one-minute step
    FirstOrder {
        /// Rate constant (1/min)
        rate: f64,
    },
}

impl Transition {
    /// Create a zero-order transition
    ///
    /// # Arguments
    /// * `rate` - Constant transfer amount per minute (mg/min, must be >= 0)
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::Transition;
    ///
    /// let absorption = Transition::zero_order(1.0).unwrap();
    /// assert_eq!(absorption.minute_diff(100.0), 1.0);
    ///
    /// assert!(Transition::zero_order(-1.0).is_err());
    /// ```
    pub fn zero_order(rate: f64) -> Result<Self, TransitionError> {
        if rate < 0.0 {
            return Err(TransitionError::NegativeRate { rate });
        }
        Ok(Self::ZeroOrder { rate })
    }

    /// Create a first-order transition
    ///
    /// # Arguments
    /// * `rate` - Rate constant in 1/min (must be > 0)
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::Transition;
    ///
    /// assert!(Transition::first_order(0.04).is_ok());
    /// assert!(Transition::first_order(0.0).is_err());
    /// assert!(Transition::first_order(-0.04).is_err());
    /// ```
    pub fn first_order(rate: f64) -> Result<Self, TransitionError> {
        if rate <= 0.0 {
            return Err(TransitionError::NonPositiveRate { rate });
        }
        Ok(Self::FirstOrder { rate })
    }

    /// Mass leaving the source compartment during the current minute
    ///
    /// # Arguments
    /// * `src_mass` - Mass present in the source at this point of the minute.
    ///   The engine passes the *current* value, which may already reflect
    ///   transitions applied earlier in the same minute.
    ///
    /// # Returns
    /// The transferred amount:
    /// - `Null` → 0
    /// - `ZeroOrder { rate }` → `min(rate, src_mass)`; when less than `rate`
    ///   remains, all remaining mass is transferred, never more
    /// - `FirstOrder { rate }` → `src_mass * (1 - exp(-rate))`, the exact
    ///   discrete decrement of continuous exponential decay over a unit step;
    ///   `1 - exp(-rate) < 1` guarantees the transfer never exceeds `src_mass`
    pub fn minute_diff(&self, src_mass: f64) -> f64 {
        match *self {
            Self::Null => 0.0,
            Self::ZeroOrder { rate } => rate.min(src_mass),
            Self::FirstOrder { rate } => src_mass * (1.0 - (-rate).exp()),
        }
    }

    /// Whether this transition is a pathway at all
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Square grid of transitions between all ordered compartment pairs
///
/// Entry `(src, dest)` is the rule governing flow from compartment `src` to
/// compartment `dest`, both indexed by position in the compartment list.
/// Diagonal and unused entries are `Transition::Null`.
///
/// The engine traverses entries in row-major order; that order is part of
/// the simulation contract (see the engine documentation).
///
/// # Example
/// ```
/// use pk_simulator_core_rs::{Transition, TransitionMatrix};
///
/// let mut matrix = TransitionMatrix::null(3);
/// matrix.set(0, 1, Transition::first_order(0.04).unwrap());
/// matrix.set(1, 2, Transition::first_order(0.02).unwrap());
///
/// assert_eq!(matrix.size(), 3);
/// assert!(matrix.get(2, 0).is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    /// Row-major entries, length `size * size`
    entries: Vec<Transition>,
    /// Number of rows (== number of columns)
    size: usize,
}

impl TransitionMatrix {
    /// Create a matrix of the given size with every entry `Null`
    pub fn null(size: usize) -> Self {
        Self {
            entries: vec![Transition::Null; size * size],
            size,
        }
    }

    /// Matrix dimension (rows == columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the transition governing flow from `src` to `dest`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, src: usize, dest: usize) -> Transition {
        assert!(src < self.size && dest < self.size, "index out of bounds");
        self.entries[src * self.size + dest]
    }

    /// Set the transition governing flow from `src` to `dest`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, src: usize, dest: usize, transition: Transition) {
        assert!(src < self.size && dest < self.size, "index out of bounds");
        self.entries[src * self.size + dest] = transition;
    }
}
