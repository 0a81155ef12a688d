//! ABYC E-11 Reference Tables
//!
//! Typed, read-only views of the ampacity table (VI-B) and the voltage-drop
//! tables (IX/X). Both reduce to the same shape for selection purposes: a
//! [`CapacityCurve`] of gauge → current the gauge can carry.
//!
//! ```text
//! ┌──────────────┐   (rating, engine room)   ┌───────────────┐
//! │ AmpacityTable│──────────────────────────▶│               │
//! └──────────────┘                           │ CapacityCurve │──▶ thinnest gauge
//! ┌──────────────┐ (volts, drop %, length)   │               │    covering current
//! │VoltageDropTbl│──────────────────────────▶│               │
//! └──────────────┘                           └───────────────┘
//! ```

pub mod abyc_e11;
pub mod ampacity;
pub mod voltage_drop;

use std::sync::OnceLock;

use serde::Serialize;

use crate::core::{MarineWireError, Result};
use crate::gauge::Gauge;

pub use ampacity::{AmpacityTable, InsulationRating};
pub use voltage_drop::{DropChart, DropPercent, SystemVoltage, VoltageDropTable};

/// One tabulated point: `gauge` carries up to `current_a` amperes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub gauge: Gauge,
    pub current_a: f64,
}

/// Gauge → current capacity, ordered from thickest to thinnest gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapacityCurve {
    points: Vec<CurvePoint>,
}

impl CapacityCurve {
    pub fn new(mut points: Vec<CurvePoint>) -> Result<Self> {
        points.sort_by_key(|p| p.gauge);
        for pair in points.windows(2) {
            if pair[0].gauge == pair[1].gauge {
                return Err(MarineWireError::InvalidTable(format!(
                    "gauge {} listed twice",
                    pair[0].gauge
                )));
            }
        }
        if let Some(bad) = points
            .iter()
            .find(|p| !p.current_a.is_finite() || p.current_a < 0.0)
        {
            return Err(MarineWireError::InvalidTable(format!(
                "gauge {} has capacity {}",
                bad.gauge, bad.current_a
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self, gauge: Gauge) -> Option<f64> {
        self.points
            .binary_search_by_key(&gauge, |p| p.gauge)
            .ok()
            .map(|i| self.points[i].current_a)
    }

    /// The thinnest gauge whose capacity is at least `current_a`.
    pub fn thinnest_covering(&self, current_a: f64) -> Option<Gauge> {
        self.points
            .iter()
            .rev()
            .find(|p| p.current_a >= current_a)
            .map(|p| p.gauge)
    }

    pub fn max_capacity(&self) -> f64 {
        self.points.iter().map(|p| p.current_a).fold(0.0, f64::max)
    }

    /// Capacity falls strictly as the gauge number rises.
    pub fn is_strictly_decreasing(&self) -> bool {
        self.points.windows(2).all(|w| w[0].current_a > w[1].current_a)
    }
}

/// The complete, immutable dataset the selector works from.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub ampacity: AmpacityTable,
    pub voltage_drop: VoltageDropTable,
}

static BUILTIN: OnceLock<ReferenceData> = OnceLock::new();

impl ReferenceData {
    pub fn new(ampacity: AmpacityTable, voltage_drop: VoltageDropTable) -> Self {
        Self {
            ampacity,
            voltage_drop,
        }
    }

    /// Build the 2008 edition tables from the embedded data.
    pub fn abyc_e11_2008() -> Result<Self> {
        Ok(Self::new(
            abyc_e11::table_vi_b()?,
            abyc_e11::tables_ix_x()?,
        ))
    }

    /// Process-wide copy of [`ReferenceData::abyc_e11_2008`], built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded tables are malformed.
    pub fn builtin() -> &'static ReferenceData {
        BUILTIN.get_or_init(|| {
            let data = Self::abyc_e11_2008()
                .unwrap_or_else(|e| panic!("embedded ABYC E-11 tables are malformed: {e}"));
            tracing::info!(
                ampacity_curves = data.ampacity.len(),
                voltage_drop_charts = data.voltage_drop.len(),
                "Loaded ABYC E-11 (2008) reference tables"
            );
            data
        })
    }
}
