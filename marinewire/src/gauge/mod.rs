//! Wire gauge model
//!
//! Canonical AWG numbering plus the solid-wire formulas derived from it.

pub mod awg;
pub mod solid;

pub use awg::{CanonicalGauge, Gauge};
pub use solid::{
    Conductor, SolidWire, RESISTIVITY_ALUMINUM, RESISTIVITY_COPPER_ANNEALED, SOLID_GAUGE_RANGE,
};
