//! Battery energy, mass and capacity from cell chemistry.

use serde::{Deserialize, Serialize};

use crate::core::{non_negative, MarineWireError, Result};

/// Nominal properties of one cell chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellChemistry {
    pub name: &'static str,
    pub cell_voltage_v: f64,
    pub specific_energy_j_per_kg: f64,
    pub energy_density_j_per_l: f64,
}

// https://en.wikipedia.org/wiki/Comparison_of_commercial_battery_types

pub const LITHIUM_NMC: CellChemistry = CellChemistry {
    name: "Lithium NMC",
    cell_voltage_v: 3.6,
    specific_energy_j_per_kg: 0.74e6,
    energy_density_j_per_l: 2.1e6,
};

pub const LITHIUM_FEPO4: CellChemistry = CellChemistry {
    name: "Lithium FePO4",
    cell_voltage_v: 3.2,
    // as high as 0.58 MJ/kg
    specific_energy_j_per_kg: 0.32e6,
    energy_density_j_per_l: 1.20e6,
};

pub const LEAD_ACID: CellChemistry = CellChemistry {
    name: "Lead Acid",
    cell_voltage_v: 2.1,
    specific_energy_j_per_kg: 0.12e6,
    energy_density_j_per_l: 0.23e6,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellArrangement {
    Single,
    Series,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Battery {
    pub chemistry: CellChemistry,
    pub total_energy_j: f64,
    pub n_cells: u32,
    pub arrangement: CellArrangement,
}

impl Battery {
    pub fn new(
        chemistry: CellChemistry,
        total_energy_j: f64,
        n_cells: u32,
        arrangement: CellArrangement,
    ) -> Result<Self> {
        let total_energy_j = non_negative("battery energy", total_energy_j)?;
        Ok(Self {
            chemistry,
            total_energy_j,
            n_cells,
            arrangement,
        })
    }

    pub fn single(chemistry: CellChemistry, total_energy_j: f64) -> Result<Self> {
        Self::new(chemistry, total_energy_j, 1, CellArrangement::Single)
    }

    pub fn series(chemistry: CellChemistry, total_energy_j: f64, n_cells: u32) -> Result<Self> {
        Self::new(chemistry, total_energy_j, n_cells, CellArrangement::Series)
    }

    pub fn nominal_voltage(&self) -> Result<f64> {
        match self.arrangement {
            CellArrangement::Single if self.n_cells != 1 => {
                Err(MarineWireError::UnconfiguredCells {
                    n_cells: self.n_cells,
                })
            }
            CellArrangement::Single => Ok(self.chemistry.cell_voltage_v),
            CellArrangement::Series => Ok(f64::from(self.n_cells) * self.chemistry.cell_voltage_v),
        }
    }

    /// Cell mass, ignoring packaging.
    pub fn mass_kg(&self) -> f64 {
        self.total_energy_j / self.chemistry.specific_energy_j_per_kg
    }

    /// Cell volume, ignoring packing and packaging.
    pub fn volume_l(&self) -> f64 {
        self.total_energy_j / self.chemistry.energy_density_j_per_l
    }

    pub fn capacity_mah(&self) -> Result<f64> {
        let coulombs = self.total_energy_j / self.nominal_voltage()?;
        Ok(coulombs / 3.6)
    }
}
