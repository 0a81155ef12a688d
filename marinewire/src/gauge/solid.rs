//! Physical dimensions of solid round wire from its gauge number.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Gauge;
use crate::core::{MarineWireError, Result};

/// Gauges the AWG diameter formula is defined for (4/0 through 40).
pub const SOLID_GAUGE_RANGE: RangeInclusive<i32> = -3..=40;

/// Annealed copper, ohm metres.
pub const RESISTIVITY_COPPER_ANNEALED: f64 = 17.24e-9;
/// Aluminium, ohm metres.
pub const RESISTIVITY_ALUMINUM: f64 = 26.5e-9;

const METRES_PER_INCH: f64 = 0.0254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conductor {
    #[default]
    Copper,
    Aluminum,
}

impl Conductor {
    pub fn resistivity_ohm_m(&self) -> f64 {
        match self {
            Conductor::Copper => RESISTIVITY_COPPER_ANNEALED,
            Conductor::Aluminum => RESISTIVITY_ALUMINUM,
        }
    }
}

/// A solid conductor of a validated gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidWire {
    gauge: Gauge,
}

impl SolidWire {
    pub fn new(gauge: Gauge) -> Result<Self> {
        if !SOLID_GAUGE_RANGE.contains(&gauge.number()) {
            return Err(MarineWireError::OutOfRangeGauge {
                gauge: gauge.number(),
                min: *SOLID_GAUGE_RANGE.start(),
                max: *SOLID_GAUGE_RANGE.end(),
            });
        }
        Ok(Self { gauge })
    }

    pub fn gauge(&self) -> Gauge {
        self.gauge
    }

    /// d = 0.005 in × 92^((36 − n) / 39)
    pub fn diameter_in(&self) -> f64 {
        0.005 * 92.0_f64.powf((36.0 - f64::from(self.gauge.number())) / 39.0)
    }

    pub fn diameter_mm(&self) -> f64 {
        self.diameter_in() * METRES_PER_INCH * 1e3
    }

    pub fn cross_sectional_area_in2(&self) -> f64 {
        let radius = self.diameter_in() / 2.0;
        PI * radius * radius
    }

    pub fn cross_sectional_area_mm2(&self) -> f64 {
        let radius = self.diameter_mm() / 2.0;
        PI * radius * radius
    }

    /// Resistance in ohms per metre for a material of the given resistivity (ohm metres).
    pub fn resistance_per_meter(&self, resistivity_ohm_m: f64) -> f64 {
        let area_m2 = self.cross_sectional_area_mm2() * 1e-6;
        resistivity_ohm_m / area_m2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use approx::assert_relative_eq;

    fn wire(spec: &str) -> SolidWire {
        SolidWire::new(Gauge::parse(spec).unwrap()).unwrap()
    }

    #[test]
    fn test_reference_diameters() {
        // hyperphysics AWG table
        for (spec, expected_in) in [
            ("0000", 0.46),
            ("000", 0.40965),
            ("00", 0.3648),
            ("0", 0.32485),
            ("21", 0.02846),
            ("40", 0.00314),
        ] {
            assert_abs_diff_eq!(wire(spec).diameter_in(), expected_in, epsilon = 0.1e-3);
        }
    }

    #[test]
    fn test_range_limits() {
        assert!(SolidWire::new(Gauge::from_number(-3)).is_ok());
        assert!(SolidWire::new(Gauge::from_number(40)).is_ok());
        assert_eq!(
            SolidWire::new(Gauge::from_number(-4)),
            Err(MarineWireError::OutOfRangeGauge { gauge: -4, min: -3, max: 40 })
        );
        assert!(matches!(
            SolidWire::new(Gauge::from_number(41)),
            Err(MarineWireError::OutOfRangeGauge { gauge: 41, .. })
        ));
    }

    #[test]
    fn test_area_units_agree() {
        let w = wire("10");
        let in2_as_mm2 = w.cross_sectional_area_in2() * 25.4 * 25.4;
        assert_relative_eq!(in2_as_mm2, w.cross_sectional_area_mm2(), max_relative = 1e-12);
        assert_abs_diff_eq!(w.cross_sectional_area_mm2(), 5.26, epsilon = 0.01);
    }

    #[test]
    fn test_copper_and_aluminum_resistance() {
        let w = wire("10");
        let copper = w.resistance_per_meter(Conductor::Copper.resistivity_ohm_m());
        assert_abs_diff_eq!(copper, 3.277e-3, epsilon = 0.005e-3);

        let aluminum = w.resistance_per_meter(Conductor::Aluminum.resistivity_ohm_m());
        assert_relative_eq!(aluminum / copper, 26.5 / 17.24, max_relative = 1e-12);
    }

    #[test]
    fn test_thinner_wire_has_more_resistance() {
        let rho = Conductor::default().resistivity_ohm_m();
        let mut previous = 0.0;
        for n in SOLID_GAUGE_RANGE {
            let r = SolidWire::new(Gauge::from_number(n)).unwrap().resistance_per_meter(rho);
            assert!(r > previous, "gauge {n}");
            previous = r;
        }
    }
}
