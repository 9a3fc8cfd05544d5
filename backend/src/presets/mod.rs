//! Model presets - ready-made one-compartment extravascular models
//!
//! Convenience assemblies wiring together the fixed 3-compartment topology
//! used by the didactic Bateman models:
//!
//! ```text
//! Arzneiform (dose form) --absorption--> Plasma --elimination--> Elimination
//! ```
//!
//! Two variants are provided, differing only in the absorption kinetics:
//! first-order (classical Bateman curve) and zero-order (constant-rate
//! absorption). Elimination is first-order in both.
//!
//! Rate constants are per-minute. GUI layers that express rates in scaled
//! units (e.g. "per 10,000 minutes") must convert before calling in.

use crate::models::compartment::Compartment;
use crate::models::dosing::Dosing;
use crate::models::transition::{Transition, TransitionMatrix};
use crate::orchestrator::engine::{Simulation, SimulationError, DEFAULT_HORIZON};
use serde::{Deserialize, Serialize};

/// Column name of the dose form (extravascular depot) compartment
pub const DOSE_FORM: &str = "Arzneiform";

/// Column name of the central (plasma) compartment
pub const PLASMA: &str = "Plasma";

/// Column name of the elimination sink compartment
pub const ELIMINATION: &str = "Elimination";

/// Default bolus dose (mg) used when a preset is run with defaults
pub const DEFAULT_DOSE: f64 = 100.0;

/// Parameters for the Bateman presets
///
/// # Example
/// ```
/// use pk_simulator_core_rs::presets::BatemanConfig;
///
/// let config = BatemanConfig::default();
/// assert_eq!(config.dose, 100.0);
/// assert_eq!(config.horizon, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatemanConfig {
    /// Bolus dose administered to the dose form at minute 0 (mg)
    pub dose: f64,

    /// Absorption rate: 1/min for first-order, mg/min for zero-order
    pub absorption_rate: f64,

    /// Elimination rate constant (1/min)
    pub elimination_rate: f64,

    /// Number of discrete minutes to simulate
    pub horizon: usize,
}

impl Default for BatemanConfig {
    fn default() -> Self {
        Self {
            dose: DEFAULT_DOSE,
            absorption_rate: 0.04,
            elimination_rate: 0.02,
            horizon: DEFAULT_HORIZON,
        }
    }
}

/// Assemble a simulation over the fixed 3-compartment topology
///
/// Builds the {dose form, plasma, elimination} compartment list, attaches
/// the given dosing schedule to the dose form, and delegates to
/// [`Simulation::new`] with the caller's transition matrix (which must be
/// 3x3).
///
/// # Example
/// ```
/// use pk_simulator_core_rs::presets::one_compartment;
/// use pk_simulator_core_rs::{Dosing, Transition, TransitionMatrix};
///
/// let mut matrix = TransitionMatrix::null(3);
/// matrix.set(0, 1, Transition::first_order(0.04).unwrap());
/// matrix.set(1, 2, Transition::first_order(0.02).unwrap());
///
/// let sim = one_compartment(Dosing::bolus(100.0), matrix, 500).unwrap();
/// assert_eq!(sim.num_compartments(), 3);
/// ```
pub fn one_compartment(
    dosing: Dosing,
    transitions: TransitionMatrix,
    horizon: usize,
) -> Result<Simulation, SimulationError> {
    let compartments = vec![
        Compartment::new(DOSE_FORM.to_string(), dosing),
        Compartment::new(PLASMA.to_string(), Dosing::none()),
        Compartment::new(ELIMINATION.to_string(), Dosing::none()),
    ];

    Simulation::new(compartments, transitions, horizon)
}

/// Bateman model with first-order absorption
///
/// Dose form → plasma via first-order kinetics at `absorption_rate`,
/// plasma → elimination via first-order kinetics at `elimination_rate`,
/// all other matrix entries null.
///
/// # Example
/// ```
/// use pk_simulator_core_rs::presets::{bateman_first_order, BatemanConfig};
///
/// let mut sim = bateman_first_order(&BatemanConfig::default()).unwrap();
/// let table = sim.run();
///
/// assert_eq!(table.value("Arzneiform", 0), Some(100.0));
/// assert_eq!(table.value("Plasma", 0), Some(0.0));
/// ```
pub fn bateman_first_order(config: &BatemanConfig) -> Result<Simulation, SimulationError> {
    let invasion = Transition::first_order(config.absorption_rate)?;
    let elimination = Transition::first_order(config.elimination_rate)?;

    let mut matrix = TransitionMatrix::null(3);
    matrix.set(0, 1, invasion);
    matrix.set(1, 2, elimination);

    one_compartment(Dosing::bolus(config.dose), matrix, config.horizon)
}

/// Bateman model with zero-order absorption
///
/// Same topology as [`bateman_first_order`], but the dose form releases a
/// constant `absorption_rate` mg per minute into plasma (capped at the mass
/// still present). Elimination remains first-order.
///
/// # Example
/// ```
/// use pk_simulator_core_rs::presets::{bateman_zero_order, BatemanConfig};
///
/// let config = BatemanConfig {
///     absorption_rate: 1.0, // mg/min
///     ..BatemanConfig::default()
/// };
/// let mut sim = bateman_zero_order(&config).unwrap();
/// let table = sim.run();
///
/// // Constant-rate release: exactly 1 mg leaves the dose form per minute
/// assert_eq!(table.value("Arzneiform", 1), Some(99.0));
/// ```
pub fn bateman_zero_order(config: &BatemanConfig) -> Result<Simulation, SimulationError> {
    let invasion = Transition::zero_order(config.absorption_rate)?;
    let elimination = Transition::first_order(config.elimination_rate)?;

    let mut matrix = TransitionMatrix::null(3);
    matrix.set(0, 1, invasion);
    matrix.set(1, 2, elimination);

    one_compartment(Dosing::bolus(config.dose), matrix, config.horizon)
}
