//! Simulation result table
//!
//! The sole artifact the engine exposes externally: one named column per
//! compartment, row index = minute 0..=horizon, each cell the mass of that
//! compartment at that minute. Plotting and GUI collaborators select
//! columns by name and plot value against index.
//!
//! The table is derived read-only from final compartment state and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// One compartment's mass-over-time column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassColumn {
    /// Compartment name
    pub name: String,

    /// Mass per minute (mg), indexed 0..=horizon
    pub values: Vec<f64>,
}

/// Table of mass over time, one column per compartment
///
/// # Example
/// ```
/// use pk_simulator_core_rs::presets::{bateman_first_order, BatemanConfig};
///
/// let mut sim = bateman_first_order(&BatemanConfig::default()).unwrap();
/// let table = sim.run();
///
/// assert_eq!(table.num_rows(), 501); // minutes 0..=500
/// let plasma = table.column("Plasma").unwrap();
/// assert_eq!(plasma.len(), 501);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassTable {
    columns: Vec<MassColumn>,
}

impl MassTable {
    /// Build a table from columns
    ///
    /// # Panics
    /// Panics if the columns have differing lengths (all compartments of one
    /// run share the same horizon; a mismatch is a construction defect).
    pub fn new(columns: Vec<MassColumn>) -> Self {
        if let Some(first) = columns.first() {
            assert!(
                columns.iter().all(|c| c.values.len() == first.values.len()),
                "all columns must have the same number of rows"
            );
        }
        Self { columns }
    }

    /// Number of rows (simulated minutes, horizon + 1)
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Horizon of the run that produced this table
    ///
    /// Zero for an empty table.
    pub fn horizon(&self) -> usize {
        self.num_rows().saturating_sub(1)
    }

    /// Number of columns (compartments)
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in compartment-list order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Select a column by compartment name
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Single cell: mass of `name` at `minute`
    pub fn value(&self, name: &str, minute: usize) -> Option<f64> {
        self.column(name)
            .and_then(|values| values.get(minute))
            .copied()
    }

    /// Serialize the table to JSON for external plotting collaborators
    ///
    /// # Example
    /// ```
    /// use pk_simulator_core_rs::presets::{bateman_first_order, BatemanConfig};
    ///
    /// let mut sim = bateman_first_order(&BatemanConfig::default()).unwrap();
    /// let json = sim.run().to_json().unwrap();
    /// assert!(json.contains("Plasma"));
    /// ```
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
