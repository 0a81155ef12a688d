//! Core types shared by the library and the CLI.
//! No I/O and no global state beyond the built-in reference tables.

use serde::{Deserialize, Serialize};

use crate::gauge::Gauge;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarineWireError {
    #[error("Invalid gauge specification: {0:?}")]
    InvalidGaugeSpecification(String),
    #[error("Gauge {gauge} is outside the supported range {min}..={max}")]
    OutOfRangeGauge { gauge: i32, min: i32, max: i32 },
    #[error("Unknown insulation temperature rating {0} C; known ratings: 60, 75, 80, 90, 105, 125, 200 C")]
    UnknownTemperatureRating(f64),
    #[error("Unsupported system voltage {0} V; supported: 12, 24, 32 V")]
    UnsupportedVoltage(f64),
    #[error("Unsupported voltage drop {0}%; supported: 3%, 10%")]
    UnsupportedDropPercent(u32),
    #[error("Conductor length {length_ft} ft exceeds the longest tabulated run of {max_ft} ft")]
    LengthOutOfRange { length_ft: f64, max_ft: u32 },
    #[error("No acceptable wire gauge for {current_a} A ({context})")]
    NoAcceptableGauge { current_a: f64, context: String },
    #[error("Invalid {name}: {value}")]
    InvalidQuantity { name: &'static str, value: f64 },
    #[error("Malformed reference table: {0}")]
    InvalidTable(String),
    #[error("Battery with {n_cells} cells needs a series arrangement")]
    UnconfiguredCells { n_cells: u32 },
    #[error("Ambient temperature {ambient_c} C is above the touch limit of {limit_c} C")]
    AmbientAboveTouchLimit { ambient_c: f64, limit_c: f64 },
}

pub type Result<T> = std::result::Result<T, MarineWireError>;

/// Reject negative, NaN and infinite magnitudes.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MarineWireError::InvalidQuantity { name, value })
    }
}

/// Options for circuit sizing (CLI or library callers).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircuitOptions {
    /// Conductor runs through an engine space (derated ampacity).
    pub engine_room: bool,
    /// Allowed voltage drop, percent of system voltage.
    pub drop_percent: u32,
}

impl Default for CircuitOptions {
    fn default() -> Self {
        Self {
            engine_room: false,
            drop_percent: 3,
        }
    }
}

/// A circuit to size. Magnitudes are already in amperes, volts, feet and degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircuitRequest {
    pub system_voltage_v: f64,
    pub current_a: f64,
    /// Round-trip length: source to load and back.
    pub length_ft: f64,
    pub insulation_temp_c: f64,
    #[serde(default)]
    pub options: CircuitOptions,
}

impl CircuitRequest {
    pub fn new(system_voltage_v: f64, current_a: f64, length_ft: f64, insulation_temp_c: f64) -> Self {
        Self {
            system_voltage_v,
            current_a,
            length_ft,
            insulation_temp_c,
            options: CircuitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CircuitOptions) -> Self {
        self.options = options;
        self
    }
}

/// Which constraint decided the circuit's gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitedBy {
    Ampacity,
    VoltageDrop,
    Both,
}

/// Result of sizing a circuit against both ampacity and voltage drop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CircuitSelection {
    pub gauge: Gauge,
    pub ampacity_gauge: Gauge,
    pub voltage_drop_gauge: Gauge,
    pub limited_by: LimitedBy,
}

impl CircuitSelection {
    pub(crate) fn from_constraints(ampacity_gauge: Gauge, voltage_drop_gauge: Gauge) -> Self {
        let limited_by = match ampacity_gauge.cmp(&voltage_drop_gauge) {
            std::cmp::Ordering::Less => LimitedBy::Ampacity,
            std::cmp::Ordering::Greater => LimitedBy::VoltageDrop,
            std::cmp::Ordering::Equal => LimitedBy::Both,
        };
        Self {
            gauge: ampacity_gauge.thicker(voltage_drop_gauge),
            ampacity_gauge,
            voltage_drop_gauge,
            limited_by,
        }
    }
}
