//! Domain models for the compartment simulator

pub mod compartment;
pub mod dosing;
pub mod table;
pub mod transition;

// Re-exports
pub use compartment::{Compartment, CompartmentError};
pub use dosing::{Dosing, DosingError};
pub use table::{MassColumn, MassTable};
pub use transition::{Transition, TransitionError, TransitionMatrix};
