//! Tables IX and X: conductors sized for 3 and 10 percent drop in voltage.
//!
//! The standard prints each chart as current rows by round-trip length
//! columns, with the minimum gauge in each cell. [`DropChart`] keeps that
//! view and derives the inverse one (gauge → largest current at a length)
//! used for selection.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CapacityCurve, CurvePoint};
use crate::core::{non_negative, MarineWireError, Result};
use crate::gauge::Gauge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemVoltage {
    #[serde(rename = "12V")]
    V12,
    #[serde(rename = "24V")]
    V24,
    #[serde(rename = "32V")]
    V32,
}

impl SystemVoltage {
    pub const ALL: [SystemVoltage; 3] = [SystemVoltage::V12, SystemVoltage::V24, SystemVoltage::V32];

    pub fn volts(self) -> u32 {
        match self {
            SystemVoltage::V12 => 12,
            SystemVoltage::V24 => 24,
            SystemVoltage::V32 => 32,
        }
    }

    pub fn from_volts(volts: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| f64::from(v.volts()) == volts)
            .ok_or(MarineWireError::UnsupportedVoltage(volts))
    }
}

impl fmt::Display for SystemVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V", self.volts())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DropPercent {
    #[default]
    #[serde(rename = "3%")]
    Three,
    #[serde(rename = "10%")]
    Ten,
}

impl DropPercent {
    pub const ALL: [DropPercent; 2] = [DropPercent::Three, DropPercent::Ten];

    pub fn percent(self) -> u32 {
        match self {
            DropPercent::Three => 3,
            DropPercent::Ten => 10,
        }
    }

    pub fn from_percent(percent: u32) -> Result<Self> {
        match percent {
            3 => Ok(DropPercent::Three),
            10 => Ok(DropPercent::Ten),
            other => Err(MarineWireError::UnsupportedDropPercent(other)),
        }
    }
}

impl fmt::Display for DropPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// A printed row: the gauge needed at each length column for `current_a`.
///
/// Rows may stop short of the last column where the standard leaves the
/// cells blank (no listed gauge is heavy enough).
#[derive(Debug, Clone, PartialEq)]
pub struct DropRow {
    pub current_a: f64,
    pub gauges: Vec<Gauge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropChart {
    lengths_ft: Vec<u32>,
    rows: Vec<DropRow>,
    curves: Vec<CapacityCurve>,
}

impl DropChart {
    pub fn new(lengths_ft: Vec<u32>, rows: Vec<DropRow>) -> Result<Self> {
        let invalid = |msg: String| Err(MarineWireError::InvalidTable(msg));

        if lengths_ft.is_empty() || rows.is_empty() {
            return invalid("voltage drop chart is empty".to_string());
        }
        if lengths_ft.windows(2).any(|w| w[0] >= w[1]) {
            return invalid(format!("lengths not ascending: {:?}", lengths_ft));
        }
        for row in &rows {
            if !row.current_a.is_finite() || row.current_a <= 0.0 {
                return invalid(format!("row current {} A", row.current_a));
            }
            if row.gauges.len() > lengths_ft.len() {
                return invalid(format!(
                    "{} A row has {} cells for {} lengths",
                    row.current_a,
                    row.gauges.len(),
                    lengths_ft.len()
                ));
            }
        }
        for pair in rows.windows(2) {
            let (lighter, heavier) = (&pair[0], &pair[1]);
            if lighter.current_a >= heavier.current_a {
                return invalid(format!(
                    "row {} A follows row {} A",
                    heavier.current_a, lighter.current_a
                ));
            }
            if heavier.gauges.len() > lighter.gauges.len() {
                return invalid(format!(
                    "{} A row has cells past the end of the {} A row",
                    heavier.current_a, lighter.current_a
                ));
            }
            // more current never permits a thinner wire
            for (col, (a, b)) in lighter.gauges.iter().zip(&heavier.gauges).enumerate() {
                if b > a {
                    return invalid(format!(
                        "{} ft column: {} A needs {} but {} A needs {}",
                        lengths_ft[col], lighter.current_a, a, heavier.current_a, b
                    ));
                }
            }
        }

        let curves = (0..lengths_ft.len())
            .map(|col| {
                let mut capacity: BTreeMap<Gauge, f64> = BTreeMap::new();
                for row in &rows {
                    if let Some(&gauge) = row.gauges.get(col) {
                        let entry = capacity.entry(gauge).or_insert(row.current_a);
                        *entry = entry.max(row.current_a);
                    }
                }
                CapacityCurve::new(
                    capacity
                        .into_iter()
                        .map(|(gauge, current_a)| CurvePoint { gauge, current_a })
                        .collect(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            lengths_ft,
            rows,
            curves,
        })
    }

    pub fn lengths_ft(&self) -> &[u32] {
        &self.lengths_ft
    }

    pub fn max_length_ft(&self) -> u32 {
        self.lengths_ft.last().copied().unwrap_or(0)
    }

    pub fn rows(&self) -> &[DropRow] {
        &self.rows
    }

    /// Round a run up to the shortest tabulated length that covers it.
    pub fn round_length(&self, length_ft: f64) -> Result<u32> {
        let length_ft = non_negative("conductor length", length_ft)?;
        let bucket = self
            .lengths_ft
            .iter()
            .copied()
            .find(|&bucket| f64::from(bucket) >= length_ft)
            .ok_or(MarineWireError::LengthOutOfRange {
                length_ft,
                max_ft: self.max_length_ft(),
            })?;
        tracing::trace!(length_ft, bucket, "Rounded conductor length");
        Ok(bucket)
    }

    /// Gauge → largest tabulated current at a tabulated length.
    pub fn curve(&self, bucket_ft: u32) -> Option<&CapacityCurve> {
        self.lengths_ft
            .iter()
            .position(|&l| l == bucket_ft)
            .map(|i| &self.curves[i])
    }

    /// Cell lookup in the printed view: `None` for a blank cell or a
    /// current/length that is not a tabulated row/column.
    pub fn required_gauge(&self, current_a: f64, bucket_ft: u32) -> Option<Gauge> {
        let col = self.lengths_ft.iter().position(|&l| l == bucket_ft)?;
        self.rows
            .iter()
            .find(|r| r.current_a == current_a)
            .and_then(|r| r.gauges.get(col).copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoltageDropTable {
    charts: BTreeMap<(SystemVoltage, DropPercent), DropChart>,
}

impl VoltageDropTable {
    pub fn new(charts: BTreeMap<(SystemVoltage, DropPercent), DropChart>) -> Self {
        Self { charts }
    }

    pub fn chart(&self, voltage: SystemVoltage, drop: DropPercent) -> Option<&DropChart> {
        self.charts.get(&(voltage, drop))
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SystemVoltage, DropPercent, &DropChart)> {
        self.charts.iter().map(|((v, d), c)| (*v, *d, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(current_a: f64, gauges: &[i32]) -> DropRow {
        DropRow {
            current_a,
            gauges: gauges.iter().copied().map(Gauge::from_number).collect(),
        }
    }

    fn small_chart() -> DropChart {
        DropChart::new(
            vec![10, 20, 40],
            vec![
                row(5.0, &[18, 14, 10]),
                row(10.0, &[14, 10, 8]),
                row(20.0, &[10, 8]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_keys() {
        assert_eq!(SystemVoltage::from_volts(24.0), Ok(SystemVoltage::V24));
        assert_eq!(
            SystemVoltage::from_volts(48.0),
            Err(MarineWireError::UnsupportedVoltage(48.0))
        );
        assert_eq!(DropPercent::from_percent(10), Ok(DropPercent::Ten));
        assert_eq!(
            DropPercent::from_percent(5),
            Err(MarineWireError::UnsupportedDropPercent(5))
        );
        assert_eq!(DropPercent::default(), DropPercent::Three);
    }

    #[test]
    fn test_round_length_up() {
        let chart = small_chart();
        assert_eq!(chart.round_length(0.0), Ok(10));
        assert_eq!(chart.round_length(10.0), Ok(10));
        assert_eq!(chart.round_length(10.5), Ok(20));
        assert_eq!(chart.round_length(40.0), Ok(40));
        assert_eq!(
            chart.round_length(40.1),
            Err(MarineWireError::LengthOutOfRange {
                length_ft: 40.1,
                max_ft: 40
            })
        );
        assert!(chart.round_length(-1.0).is_err());
    }

    #[test]
    fn test_inverse_curve() {
        let chart = small_chart();
        let at_20 = chart.curve(20).unwrap();
        assert_eq!(at_20.capacity(Gauge::from_number(14)), Some(5.0));
        assert_eq!(at_20.capacity(Gauge::from_number(10)), Some(10.0));
        assert_eq!(at_20.capacity(Gauge::from_number(8)), Some(20.0));
        assert!(at_20.is_strictly_decreasing());

        // blank cell: 20 A is not tabulated at 40 ft
        let at_40 = chart.curve(40).unwrap();
        assert_eq!(at_40.max_capacity(), 10.0);
        assert_eq!(chart.required_gauge(20.0, 40), None);
        assert!(chart.curve(30).is_none());
    }

    #[test]
    fn test_forward_and_inverse_views_agree() {
        let chart = small_chart();
        for &length in chart.lengths_ft() {
            let curve = chart.curve(length).unwrap();
            for r in chart.rows() {
                assert_eq!(
                    chart.required_gauge(r.current_a, length),
                    curve.thinnest_covering(r.current_a),
                    "{} A at {} ft",
                    r.current_a,
                    length
                );
            }
        }
    }

    #[test]
    fn test_rejects_malformed_charts() {
        // thinner wire for more current
        assert!(DropChart::new(vec![10], vec![row(5.0, &[14]), row(10.0, &[16])]).is_err());
        // rows out of order
        assert!(DropChart::new(vec![10], vec![row(10.0, &[14]), row(5.0, &[16])]).is_err());
        // zero-current row
        assert!(DropChart::new(vec![10], vec![row(0.0, &[18])]).is_err());
        // blank cell in the middle of the chart
        assert!(DropChart::new(vec![10, 20], vec![row(5.0, &[14]), row(10.0, &[12, 10])]).is_err());
        // lengths not ascending
        assert!(DropChart::new(vec![20, 10], vec![row(5.0, &[14, 12])]).is_err());
    }
}
