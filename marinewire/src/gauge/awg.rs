//! American Wire Gauge numbering.
//!
//! Gauges are kept as one signed integer. Non-negative values are the ordinary
//! gauges (larger number, thinner wire); the "aught" sizes thicker than 0 are
//! negative: -1 is 00 (2/0), -2 is 000 (3/0), -3 is 0000 (4/0).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{MarineWireError, Result};

/// A standard wire size.
///
/// `Ord` follows the internal integer, so the *smaller* of two gauges is the
/// thicker wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gauge(i32);

impl Gauge {
    pub const fn from_number(number: i32) -> Self {
        Self(number)
    }

    /// Parse any accepted notation: `"14"`, `"0"`..`"0000"` or `"1/0"`..`"4/0"`.
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let number = match trimmed {
            "0000" | "4/0" => -3,
            "000" | "3/0" => -2,
            "00" | "2/0" => -1,
            "0" | "1/0" => 0,
            other => other
                .parse::<i32>()
                .map_err(|_| MarineWireError::InvalidGaugeSpecification(spec.to_string()))?,
        };
        Ok(Self(number))
    }

    pub const fn number(self) -> i32 {
        self.0
    }

    pub fn canonical(self) -> CanonicalGauge {
        if self.0 >= 0 {
            CanonicalGauge::Number(self.0)
        } else {
            CanonicalGauge::Aught(self.0.unsigned_abs() + 1)
        }
    }

    /// The thicker of two gauges.
    pub fn thicker(self, other: Self) -> Self {
        self.min(other)
    }

    pub fn is_thicker_than(self, other: Self) -> bool {
        self.0 < other.0
    }
}

impl From<i32> for Gauge {
    fn from(number: i32) -> Self {
        Self::from_number(number)
    }
}

impl FromStr for Gauge {
    type Err = MarineWireError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canonical(), f)
    }
}

/// Display form of a gauge: a plain number, or `k/0` for the aught sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalGauge {
    Number(i32),
    /// `k/0`; `Aught(2)` is 2/0.
    Aught(u32),
}

impl fmt::Display for CanonicalGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalGauge::Number(n) => write!(f, "{}", n),
            CanonicalGauge::Aught(k) => write!(f, "{}/0", k),
        }
    }
}

impl Serialize for CanonicalGauge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CanonicalGauge::Number(n) => serializer.serialize_i32(*n),
            CanonicalGauge::Aught(_) => serializer.collect_str(self),
        }
    }
}

impl Serialize for Gauge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.canonical().serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GaugeNotation {
    Number(i32),
    Text(String),
}

impl<'de> Deserialize<'de> for Gauge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match GaugeNotation::deserialize(deserializer)? {
            GaugeNotation::Number(n) => Ok(Gauge::from_number(n)),
            GaugeNotation::Text(s) => Gauge::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Gauge::parse("14").unwrap().number(), 14);
        assert_eq!(Gauge::parse(" 18 ").unwrap().number(), 18);
        assert_eq!(Gauge::parse("-2").unwrap().number(), -2);
    }

    #[test]
    fn test_parse_aught_synonyms() {
        for (zeros, slash, number) in [("0", "1/0", 0), ("00", "2/0", -1), ("000", "3/0", -2), ("0000", "4/0", -3)] {
            assert_eq!(Gauge::parse(zeros).unwrap().number(), number);
            assert_eq!(Gauge::parse(slash).unwrap().number(), number);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["xxx", "", "5/0", "2/1", "1.5", "4/0 AWG"] {
            assert_eq!(
                Gauge::parse(bad),
                Err(MarineWireError::InvalidGaugeSpecification(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_canonical_display() {
        assert_eq!(Gauge::from_number(14).to_string(), "14");
        assert_eq!(Gauge::from_number(0).to_string(), "0");
        assert_eq!(Gauge::from_number(-1).to_string(), "2/0");
        assert_eq!(Gauge::from_number(-3).to_string(), "4/0");
        assert_eq!(Gauge::parse("00").unwrap().canonical(), CanonicalGauge::Aught(2));
    }

    #[test]
    fn test_ordering_is_by_thickness() {
        let four_aught = Gauge::parse("4/0").unwrap();
        let fourteen = Gauge::from_number(14);
        assert!(four_aught < fourteen);
        assert!(four_aught.is_thicker_than(fourteen));
        assert_eq!(fourteen.thicker(four_aught), four_aught);
    }

    #[test]
    fn test_serde_uses_canonical_form() {
        assert_eq!(serde_json::to_string(&Gauge::from_number(10)).unwrap(), "10");
        assert_eq!(serde_json::to_string(&Gauge::from_number(-2)).unwrap(), "\"3/0\"");

        let parsed: Vec<Gauge> = serde_json::from_str(r#"[12, "0000", "2/0", "6"]"#).unwrap();
        assert_eq!(
            parsed.iter().map(|g| g.number()).collect::<Vec<_>>(),
            vec![12, -3, -1, 6]
        );
        assert!(serde_json::from_str::<Gauge>(r#""xxx""#).is_err());
    }
}
