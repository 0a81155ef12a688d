//! Gauge selection against the ampacity and voltage-drop tables.
//!
//! Every query resolves a table key, validates it, and picks the thinnest
//! listed gauge whose tabulated capacity is at least the requested current.

use crate::core::{
    non_negative, CircuitRequest, CircuitSelection, MarineWireError, Result,
};
use crate::gauge::Gauge;
use crate::tables::{DropPercent, InsulationRating, ReferenceData, SystemVoltage};

/// Selector over a reference dataset.
#[derive(Debug, Clone, Copy)]
pub struct GaugeSelector<'a> {
    tables: &'a ReferenceData,
}

impl GaugeSelector<'static> {
    /// Create a selector over the built-in ABYC E-11 tables.
    pub fn new() -> Self {
        Self {
            tables: ReferenceData::builtin(),
        }
    }
}

impl Default for GaugeSelector<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GaugeSelector<'a> {
    /// Create a selector over caller-supplied tables.
    pub fn with_tables(tables: &'a ReferenceData) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a ReferenceData {
        self.tables
    }

    /// Smallest wire whose Table VI-B ampacity covers `current_a`.
    pub fn for_ampacity(
        &self,
        current_a: f64,
        insulation_temp_c: f64,
        engine_room: bool,
    ) -> Result<Gauge> {
        let current_a = non_negative("current", current_a)?;
        let rating = InsulationRating::from_celsius(insulation_temp_c)?;
        let curve = self
            .tables
            .ampacity
            .curve(rating, engine_room)
            .ok_or(MarineWireError::UnknownTemperatureRating(insulation_temp_c))?;

        let gauge = curve.thinnest_covering(current_a).ok_or_else(|| {
            MarineWireError::NoAcceptableGauge {
                current_a,
                context: format!(
                    "{} insulation{}",
                    rating,
                    if engine_room { " in an engine room" } else { "" }
                ),
            }
        })?;

        tracing::debug!(current_a, %rating, engine_room, %gauge, "Selected gauge for ampacity");
        Ok(gauge)
    }

    /// Smallest wire that keeps the drop over `length_ft` (round trip) within
    /// `drop_percent` of `system_voltage_v`.
    pub fn for_voltage_drop(
        &self,
        system_voltage_v: f64,
        current_a: f64,
        length_ft: f64,
        drop_percent: u32,
    ) -> Result<Gauge> {
        let current_a = non_negative("current", current_a)?;
        let voltage = SystemVoltage::from_volts(system_voltage_v)?;
        let drop = DropPercent::from_percent(drop_percent)?;
        let chart = self
            .tables
            .voltage_drop
            .chart(voltage, drop)
            .ok_or(MarineWireError::UnsupportedVoltage(system_voltage_v))?;

        let bucket_ft = chart.round_length(length_ft)?;
        let curve = chart.curve(bucket_ft).ok_or_else(|| {
            MarineWireError::InvalidTable(format!("{} {} chart has no {} ft column", voltage, drop, bucket_ft))
        })?;

        let gauge = curve.thinnest_covering(current_a).ok_or_else(|| {
            MarineWireError::NoAcceptableGauge {
                current_a,
                context: format!("{} drop at {} over {} ft", drop, voltage, bucket_ft),
            }
        })?;

        tracing::debug!(
            current_a,
            %voltage,
            %drop,
            length_ft,
            bucket_ft,
            %gauge,
            "Selected gauge for voltage drop"
        );
        Ok(gauge)
    }

    /// Size a circuit against both constraints; the thicker result wins.
    pub fn for_circuit(&self, request: &CircuitRequest) -> Result<CircuitSelection> {
        let ampacity_gauge = self.for_ampacity(
            request.current_a,
            request.insulation_temp_c,
            request.options.engine_room,
        )?;
        let voltage_drop_gauge = self.for_voltage_drop(
            request.system_voltage_v,
            request.current_a,
            request.length_ft,
            request.options.drop_percent,
        )?;

        let selection = CircuitSelection::from_constraints(ampacity_gauge, voltage_drop_gauge);
        tracing::debug!(
            gauge = %selection.gauge,
            limited_by = ?selection.limited_by,
            "Selected gauge for circuit"
        );
        Ok(selection)
    }
}
