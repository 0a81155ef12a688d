//! Table VI-B: allowable amperage of conductors when up to three current
//! carrying conductors are bundled, sheathed or in conduit.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CapacityCurve, CurvePoint};
use crate::core::{MarineWireError, Result};
use crate::gauge::Gauge;

/// Insulation temperature ratings the table has columns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InsulationRating {
    #[serde(rename = "60C")]
    C60,
    #[serde(rename = "75C")]
    C75,
    #[serde(rename = "80C")]
    C80,
    #[serde(rename = "90C")]
    C90,
    #[serde(rename = "105C")]
    C105,
    #[serde(rename = "125C")]
    C125,
    #[serde(rename = "200C")]
    C200,
}

impl InsulationRating {
    pub const ALL: [InsulationRating; 7] = [
        InsulationRating::C60,
        InsulationRating::C75,
        InsulationRating::C80,
        InsulationRating::C90,
        InsulationRating::C105,
        InsulationRating::C125,
        InsulationRating::C200,
    ];

    pub fn celsius(self) -> u32 {
        match self {
            InsulationRating::C60 => 60,
            InsulationRating::C75 => 75,
            InsulationRating::C80 => 80,
            InsulationRating::C90 => 90,
            InsulationRating::C105 => 105,
            InsulationRating::C125 => 125,
            InsulationRating::C200 => 200,
        }
    }

    pub fn from_celsius(celsius: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| f64::from(r.celsius()) == celsius)
            .ok_or(MarineWireError::UnknownTemperatureRating(celsius))
    }
}

impl fmt::Display for InsulationRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} C", self.celsius())
    }
}

/// One printed row: for each rating in [`InsulationRating::ALL`] order, the
/// capacity outside and inside engine spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmpacityRow {
    pub gauge: Gauge,
    pub amps: [[f64; 2]; 7],
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmpacityTable {
    curves: BTreeMap<(InsulationRating, bool), CapacityCurve>,
}

impl AmpacityTable {
    pub fn from_rows(rows: &[AmpacityRow]) -> Result<Self> {
        if rows.is_empty() {
            return Err(MarineWireError::InvalidTable(
                "ampacity table has no rows".to_string(),
            ));
        }
        let mut curves = BTreeMap::new();
        for (index, rating) in InsulationRating::ALL.into_iter().enumerate() {
            for (side, engine_room) in [false, true].into_iter().enumerate() {
                let points = rows
                    .iter()
                    .map(|row| CurvePoint {
                        gauge: row.gauge,
                        current_a: row.amps[index][side],
                    })
                    .collect();
                let curve = CapacityCurve::new(points).map_err(|e| {
                    MarineWireError::InvalidTable(format!(
                        "{} {}: {}",
                        rating,
                        if engine_room { "engine room" } else { "outside engine room" },
                        e
                    ))
                })?;
                curves.insert((rating, engine_room), curve);
            }
        }
        Ok(Self { curves })
    }

    /// Build from individual curves, e.g. a reduced table for tests.
    pub fn from_curves(curves: BTreeMap<(InsulationRating, bool), CapacityCurve>) -> Self {
        Self { curves }
    }

    pub fn curve(&self, rating: InsulationRating, engine_room: bool) -> Option<&CapacityCurve> {
        self.curves.get(&(rating, engine_room))
    }

    pub fn ratings(&self) -> Vec<InsulationRating> {
        let mut ratings: Vec<_> = self.curves.keys().map(|(r, _)| *r).collect();
        ratings.dedup();
        ratings
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InsulationRating, bool, &CapacityCurve)> {
        self.curves.iter().map(|((r, e), c)| (*r, *e, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_celsius() {
        assert_eq!(InsulationRating::from_celsius(105.0), Ok(InsulationRating::C105));
        assert_eq!(InsulationRating::from_celsius(200.0), Ok(InsulationRating::C200));
        assert_eq!(
            InsulationRating::from_celsius(70.0),
            Err(MarineWireError::UnknownTemperatureRating(70.0))
        );
        assert!(InsulationRating::from_celsius(60.5).is_err());
    }

    #[test]
    fn test_from_rows_builds_every_column() {
        let row = |g: i32, base: f64| AmpacityRow {
            gauge: Gauge::from_number(g),
            amps: [[base, base * 0.5]; 7],
        };
        let table = AmpacityTable::from_rows(&[row(12, 20.0), row(14, 15.0)]).unwrap();
        assert_eq!(table.len(), 14);
        assert_eq!(table.ratings(), InsulationRating::ALL.to_vec());

        let engine = table.curve(InsulationRating::C90, true).unwrap();
        assert_eq!(engine.capacity(Gauge::from_number(14)), Some(7.5));
    }

    #[test]
    fn test_from_rows_rejects_duplicate_gauge() {
        let row = AmpacityRow {
            gauge: Gauge::from_number(12),
            amps: [[20.0, 10.0]; 7],
        };
        let err = AmpacityTable::from_rows(&[row, row]).unwrap_err();
        assert!(matches!(err, MarineWireError::InvalidTable(_)));
        assert!(AmpacityTable::from_rows(&[]).is_err());
    }
}
