//! MarineWire - ABYC E-11 conductor sizing library
//!
//! Picks the minimum acceptable AWG size for a marine DC circuit from the
//! ABYC E-11 (2008) ampacity table (VI-B) and voltage-drop tables (IX/X),
//! and derives solid-wire dimensions from the AWG formula.
//!
//! # Quick Start
//!
//! ```
//! use marinewire::prelude::*;
//!
//! let selector = GaugeSelector::new();
//! let request = CircuitRequest::new(24.0, 24.0, 71.0, 105.0);
//! let selection = selector.for_circuit(&request).unwrap();
//!
//! assert_eq!(selection.gauge.to_string(), "4");
//! ```
//!
//! Inputs are plain magnitudes in amperes, volts, feet (round trip) and
//! degrees Celsius; unit conversion is left to the caller.
//!
//! # Features
//!
//! - **Gauge model**: `14`, `00`, `2/0` notations, canonical display
//! - **Ampacity**: Table VI-B by insulation rating, inside or outside engine spaces
//! - **Voltage drop**: Tables IX/X for 12, 24 and 32 V at 3% and 10% drop
//! - **Solid wire**: diameter, area and resistance per metre
//! - **Helpers**: battery capacity, passive touch-surface heat flux

pub mod battery;
pub mod core;
pub mod gauge;
pub mod selector;
pub mod tables;
pub mod thermal;

// Re-export main types
pub use crate::core::{
    CircuitOptions, CircuitRequest, CircuitSelection, LimitedBy, MarineWireError, Result,
};
pub use gauge::{CanonicalGauge, Conductor, Gauge, SolidWire};
pub use selector::GaugeSelector;
pub use tables::{
    AmpacityTable, CapacityCurve, DropPercent, InsulationRating, ReferenceData, SystemVoltage,
    VoltageDropTable,
};

/// Parse a gauge in any accepted notation.
pub fn parse_gauge(spec: &str) -> Result<Gauge> {
    Gauge::parse(spec)
}

/// Display form of a gauge number.
pub fn canonicalize_gauge(number: i32) -> CanonicalGauge {
    Gauge::from_number(number).canonical()
}

/// Solid wire diameter in inches.
pub fn solid_wire_diameter(gauge: Gauge) -> Result<f64> {
    Ok(SolidWire::new(gauge)?.diameter_in())
}

/// Solid wire cross-sectional area in square inches.
pub fn solid_wire_cross_sectional_area(gauge: Gauge) -> Result<f64> {
    Ok(SolidWire::new(gauge)?.cross_sectional_area_in2())
}

/// Solid wire resistance in ohms per metre; see [`Conductor`] for resistivities.
pub fn solid_wire_resistance_per_unit_length(gauge: Gauge, resistivity_ohm_m: f64) -> Result<f64> {
    Ok(SolidWire::new(gauge)?.resistance_per_meter(resistivity_ohm_m))
}

/// Smallest gauge whose ampacity covers `current_a` (built-in tables).
pub fn select_gauge_for_ampacity(
    current_a: f64,
    insulation_temp_c: f64,
    engine_room: bool,
) -> Result<Gauge> {
    GaugeSelector::new().for_ampacity(current_a, insulation_temp_c, engine_room)
}

/// Smallest gauge within the allowed voltage drop (built-in tables).
pub fn select_gauge_for_voltage_drop(
    system_voltage_v: f64,
    current_a: f64,
    length_ft: f64,
    drop_percent: u32,
) -> Result<Gauge> {
    GaugeSelector::new().for_voltage_drop(system_voltage_v, current_a, length_ft, drop_percent)
}

/// Smallest gauge meeting both ampacity and voltage drop (built-in tables).
pub fn select_gauge_for_circuit(request: &CircuitRequest) -> Result<Gauge> {
    GaugeSelector::new()
        .for_circuit(request)
        .map(|selection| selection.gauge)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CircuitOptions, CircuitRequest, CircuitSelection, Conductor, Gauge, GaugeSelector,
        LimitedBy, MarineWireError, ReferenceData, SolidWire,
    };
}
