//! Embedded ABYC E-11 (2008) reference data.
//!
//! Values are transcribed from the published tables. Gauges use the notation
//! printed in the standard and are parsed when the tables are built.

use std::collections::BTreeMap;

use super::ampacity::{AmpacityRow, AmpacityTable};
use super::voltage_drop::{DropChart, DropPercent, DropRow, SystemVoltage, VoltageDropTable};
use crate::core::{MarineWireError, Result};
use crate::gauge::Gauge;

/// Table VI-B columns, per insulation rating 60, 75, 80, 90, 105, 125, 200 C:
/// outside engine spaces, then inside engine spaces.
///
/// The standard gives no engine-space allowance for 60 C insulation, and this
/// transcription carries none for 200 C either; those columns are zero.
#[rustfmt::skip]
const TABLE_VI_B: [(&str, [f64; 14]); 15] = [
    ("18",  [7.0, 0.0, 7.0, 5.3, 10.5, 8.2, 14.0, 11.5, 14.0, 11.9, 17.5, 15.6, 17.5, 0.0]),
    ("16",  [10.5, 0.0, 10.5, 7.9, 14.0, 10.9, 17.5, 14.4, 17.5, 14.9, 21.0, 18.7, 24.5, 0.0]),
    ("14",  [14.0, 0.0, 14.0, 10.5, 17.5, 13.7, 21.0, 17.2, 24.5, 20.8, 28.0, 24.9, 31.5, 0.0]),
    ("12",  [17.5, 0.0, 17.5, 13.1, 24.5, 19.1, 28.0, 23.0, 31.5, 26.8, 35.0, 31.2, 38.5, 0.0]),
    ("10",  [28.0, 0.0, 28.0, 21.0, 35.0, 27.3, 38.5, 31.6, 42.0, 35.7, 49.0, 43.6, 49.0, 0.0]),
    ("8",   [38.5, 0.0, 45.5, 34.1, 49.0, 38.2, 49.0, 40.2, 56.0, 47.6, 63.0, 56.1, 70.0, 0.0]),
    ("6",   [56.0, 0.0, 66.5, 49.9, 70.0, 54.6, 70.0, 57.4, 84.0, 71.4, 87.5, 77.9, 94.5, 0.0]),
    ("4",   [73.5, 0.0, 87.5, 65.6, 91.0, 71.0, 94.5, 77.5, 112.0, 95.2, 119.0, 105.9, 126.0, 0.0]),
    ("3",   [84.0, 0.0, 101.5, 76.1, 105.0, 81.9, 108.5, 89.0, 126.0, 107.1, 136.5, 121.5, 147.0, 0.0]),
    ("2",   [98.0, 0.0, 119.0, 89.3, 122.5, 95.6, 126.0, 103.3, 147.0, 125.0, 157.5, 140.2, 168.0, 0.0]),
    ("1",   [115.5, 0.0, 136.5, 102.4, 147.0, 114.7, 147.0, 120.5, 171.5, 145.8, 185.5, 165.1, 196.0, 0.0]),
    ("0",   [136.5, 0.0, 161.0, 120.8, 171.5, 133.8, 171.5, 140.6, 199.5, 169.6, 213.5, 190.0, 227.5, 0.0]),
    ("2/0", [157.5, 0.0, 185.5, 139.1, 199.5, 155.6, 199.5, 163.6, 231.0, 196.4, 248.5, 221.2, 259.0, 0.0]),
    ("3/0", [182.0, 0.0, 217.0, 162.8, 231.0, 180.2, 231.0, 189.4, 269.5, 229.1, 287.0, 255.4, 301.0, 0.0]),
    ("4/0", [210.0, 0.0, 252.0, 189.0, 269.5, 210.2, 269.5, 221.0, 311.5, 264.8, 332.5, 295.9, 357.0, 0.0]),
];

/// Round-trip conductor length columns shared by every voltage-drop chart.
pub const LENGTHS_FT: [u32; 19] = [
    10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160, 170,
];

type ChartRows = [(u32, &'static [&'static str]); 13];

// 12 volts, 3% drop; blank cells omitted from the end of a row.
#[rustfmt::skip]
const TABLE_IX_12V: ChartRows = [
    (5,   &["18", "16", "14", "12", "12", "10", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "6", "6"]),
    (10,  &["14", "12", "10", "10", "10", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2", "2"]),
    (15,  &["12", "10", "10", "8", "8", "6", "6", "6", "4", "4", "2", "2", "2", "2", "2", "1", "1", "1", "1"]),
    (20,  &["10", "10", "8", "6", "6", "6", "4", "4", "2", "2", "2", "2", "1", "1", "1", "0", "0", "0", "2/0"]),
    (25,  &["10", "8", "6", "6", "6", "4", "4", "2", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0", "3/0"]),
    (30,  &["10", "8", "6", "6", "4", "4", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "3/0", "3/0", "3/0", "3/0"]),
    (40,  &["8", "6", "6", "4", "4", "2", "2", "1", "0", "0", "2/0", "2/0", "3/0", "3/0", "3/0", "4/0", "4/0", "4/0", "4/0"]),
    (50,  &["6", "6", "4", "4", "2", "2", "1", "0", "2/0", "2/0", "3/0", "3/0", "4/0", "4/0", "4/0"]),
    (60,  &["6", "4", "4", "2", "2", "1", "0", "2/0", "3/0", "3/0", "4/0", "4/0", "4/0"]),
    (70,  &["6", "4", "2", "2", "1", "0", "2/0", "3/0", "3/0", "4/0", "4/0"]),
    (80,  &["6", "4", "2", "2", "1", "0", "3/0", "3/0", "4/0", "4/0"]),
    (90,  &["4", "2", "2", "1", "0", "2/0", "3/0", "4/0", "4/0"]),
    (100, &["4", "2", "2", "1", "0", "2/0", "3/0", "4/0"]),
];

// 24 volts, 3% drop; blank cells omitted from the end of a row.
#[rustfmt::skip]
const TABLE_IX_24V: ChartRows = [
    (5,   &["18", "18", "18", "16", "16", "14", "12", "12", "12", "10", "10", "10", "10", "10", "8", "8", "8", "8", "8"]),
    (10,  &["18", "16", "14", "12", "12", "10", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "6", "6"]),
    (15,  &["16", "14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "6", "4", "4", "4", "4", "4", "2"]),
    (20,  &["14", "12", "10", "10", "10", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2", "2"]),
    (25,  &["12", "12", "10", "10", "8", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2", "2", "2", "1"]),
    (30,  &["12", "10", "10", "8", "8", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "1", "1", "1", "1"]),
    (40,  &["10", "10", "8", "6", "6", "6", "4", "4", "2", "2", "2", "2", "1", "1", "1", "0", "0", "0", "2/0"]),
    (50,  &["10", "8", "6", "6", "6", "4", "4", "2", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0", "3/0"]),
    (60,  &["10", "8", "6", "6", "4", "4", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "3/0", "3/0", "3/0", "3/0"]),
    (70,  &["8", "6", "6", "4", "4", "2", "2", "1", "1", "0", "0", "2/0", "2/0", "3/0", "3/0", "3/0", "3/0", "4/0", "4/0"]),
    (80,  &["8", "6", "6", "4", "4", "2", "2", "1", "0", "0", "2/0", "2/0", "3/0", "3/0", "3/0", "4/0", "4/0", "4/0", "4/0"]),
    (90,  &["8", "6", "4", "4", "2", "2", "1", "0", "0", "2/0", "2/0", "3/0", "3/0", "4/0", "4/0", "4/0", "4/0", "4/0"]),
    (100, &["6", "6", "4", "4", "2", "2", "1", "0", "2/0", "2/0", "3/0", "3/0", "4/0", "4/0", "4/0"]),
];

// 32 volts, 3% drop; blank cells omitted from the end of a row.
#[rustfmt::skip]
const TABLE_IX_32V: ChartRows = [
    (5,   &["18", "18", "18", "18", "16", "16", "14", "14", "12", "12", "12", "12", "10", "10", "10", "10", "10", "10", "8"]),
    (10,  &["18", "16", "16", "14", "14", "12", "12", "10", "10", "10", "8", "8", "8", "8", "8", "6", "6", "6", "6"]),
    (15,  &["16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "6", "4", "4"]),
    (20,  &["16", "14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "6", "4", "4", "4", "4", "4", "2"]),
    (25,  &["14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2"]),
    (30,  &["14", "12", "10", "10", "8", "8", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "1", "1", "1"]),
    (40,  &["12", "10", "10", "8", "8", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "1", "1", "1", "1"]),
    (50,  &["12", "10", "8", "8", "6", "6", "4", "4", "2", "2", "2", "2", "2", "1", "1", "0", "0", "0", "0"]),
    (60,  &["10", "8", "8", "6", "6", "4", "4", "2", "2", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0"]),
    (70,  &["10", "8", "6", "6", "6", "4", "2", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0", "3/0", "3/0"]),
    (80,  &["10", "8", "6", "6", "4", "4", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "3/0", "3/0", "3/0", "3/0"]),
    (90,  &["8", "6", "6", "6", "4", "2", "2", "2", "1", "0", "0", "2/0", "2/0", "2/0", "3/0", "3/0", "3/0", "4/0", "4/0"]),
    (100, &["8", "6", "6", "4", "4", "2", "2", "1", "0", "0", "2/0", "2/0", "2/0", "3/0", "3/0", "3/0", "4/0", "4/0", "4/0"]),
];

// 12 volts, 10% drop; blank cells omitted from the end of a row.
#[rustfmt::skip]
const TABLE_X_12V: ChartRows = [
    (5,   &["18", "18", "18", "18", "18", "16", "16", "14", "14", "14", "12", "12", "12", "12", "12", "10", "10", "10", "10"]),
    (10,  &["18", "18", "16", "16", "14", "14", "12", "12", "10", "10", "10", "10", "8", "8", "8", "8", "8", "8", "6"]),
    (15,  &["18", "16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "8", "8", "6", "6", "6", "6", "6", "6"]),
    (20,  &["16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "4", "4", "4"]),
    (25,  &["16", "14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "6", "4", "4", "4", "4", "4", "2"]),
    (30,  &["14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2"]),
    (40,  &["14", "12", "10", "10", "8", "8", "6", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "2", "2"]),
    (50,  &["12", "10", "10", "8", "8", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "1", "1", "1", "1"]),
    (60,  &["12", "10", "8", "8", "6", "6", "4", "4", "2", "2", "2", "2", "2", "1", "1", "1", "0", "0", "0"]),
    (70,  &["10", "8", "8", "6", "6", "6", "4", "2", "2", "2", "2", "1", "1", "1", "0", "0", "0", "2/0", "2/0"]),
    (80,  &["10", "8", "8", "6", "6", "4", "4", "2", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0", "2/0"]),
    (90,  &["10", "8", "6", "6", "6", "4", "2", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0", "3/0", "3/0"]),
    (100, &["10", "8", "6", "6", "4", "4", "2", "2", "1", "1", "0", "0", "0", "2/0", "2/0", "2/0", "3/0", "3/0", "3/0"]),
];

// 24 volts, 10% drop; blank cells omitted from the end of a row.
// The 10 A row is misprinted as 0 A in some copies of this chart.
#[rustfmt::skip]
const TABLE_X_24V: ChartRows = [
    (5,   &["18", "18", "18", "18", "18", "18", "18", "18", "16", "16", "16", "16", "14", "14", "14", "14", "14", "14", "12"]),
    (10,  &["18", "18", "18", "18", "18", "16", "16", "14", "14", "14", "12", "12", "12", "12", "12", "10", "10", "10", "10"]),
    (15,  &["18", "18", "18", "16", "16", "14", "14", "12", "12", "12", "10", "10", "10", "10", "10", "8", "8", "8", "8"]),
    (20,  &["18", "18", "16", "16", "14", "14", "12", "12", "10", "10", "10", "10", "8", "8", "8", "8", "8", "8", "6"]),
    (25,  &["18", "16", "16", "14", "14", "12", "12", "10", "10", "10", "8", "8", "8", "8", "8", "6", "6", "6", "6"]),
    (30,  &["18", "16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "8", "8", "6", "6", "6", "6", "6", "6"]),
    (40,  &["16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "4", "4", "4"]),
    (50,  &["16", "14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "6", "4", "4", "4", "4", "4", "2"]),
    (60,  &["14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2"]),
    (70,  &["14", "12", "10", "10", "8", "8", "6", "6", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "2"]),
    (80,  &["14", "12", "10", "10", "8", "8", "6", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "2", "2"]),
    (90,  &["12", "10", "10", "8", "8", "6", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "2", "1", "1"]),
    (100, &["12", "10", "10", "8", "8", "6", "6", "4", "4", "4", "2", "2", "2", "2", "2", "1", "1", "1", "1"]),
];

// 32 volts, 10% drop; blank cells omitted from the end of a row.
#[rustfmt::skip]
const TABLE_X_32V: ChartRows = [
    (5,   &["18", "18", "18", "18", "18", "18", "18", "18", "18", "18", "18", "16", "16", "16", "16", "14", "14", "14", "14"]),
    (10,  &["18", "18", "18", "18", "18", "18", "16", "16", "14", "14", "14", "14", "14", "12", "12", "12", "12", "12", "12"]),
    (15,  &["18", "18", "18", "18", "18", "16", "14", "14", "14", "12", "12", "12", "12", "10", "10", "10", "10", "10", "10"]),
    (20,  &["18", "18", "18", "16", "16", "14", "14", "12", "12", "12", "10", "10", "10", "10", "10", "8", "8", "8", "8"]),
    (25,  &["18", "18", "16", "16", "14", "14", "12", "12", "10", "10", "10", "10", "10", "8", "8", "8", "8", "8", "8"]),
    (30,  &["18", "18", "16", "14", "14", "12", "12", "10", "10", "10", "10", "8", "8", "8", "8", "8", "6", "6", "6"]),
    (40,  &["18", "16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "8", "8", "6", "6", "6", "6", "6", "6"]),
    (50,  &["16", "14", "14", "12", "12", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "6", "4", "4"]),
    (60,  &["16", "14", "12", "12", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "6", "4", "4", "4", "4"]),
    (70,  &["14", "14", "12", "10", "10", "8", "8", "8", "6", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2"]),
    (80,  &["14", "12", "12", "10", "10", "8", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2"]),
    (90,  &["14", "12", "10", "10", "10", "8", "6", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2", "2"]),
    (100, &["14", "12", "10", "10", "8", "8", "6", "6", "6", "4", "4", "4", "4", "2", "2", "2", "2", "2", "2"]),
];
/// Table VI-B as typed curves.
pub fn table_vi_b() -> Result<AmpacityTable> {
    let rows = TABLE_VI_B
        .iter()
        .map(|(gauge, amps)| {
            let mut paired = [[0.0; 2]; 7];
            for (i, pair) in paired.iter_mut().enumerate() {
                *pair = [amps[2 * i], amps[2 * i + 1]];
            }
            Ok(AmpacityRow {
                gauge: parse_cell(gauge)?,
                amps: paired,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    AmpacityTable::from_rows(&rows)
}

/// Tables IX (3% drop) and X (10% drop) for every system voltage.
pub fn tables_ix_x() -> Result<VoltageDropTable> {
    let sources: [(SystemVoltage, DropPercent, &ChartRows); 6] = [
        (SystemVoltage::V12, DropPercent::Three, &TABLE_IX_12V),
        (SystemVoltage::V24, DropPercent::Three, &TABLE_IX_24V),
        (SystemVoltage::V32, DropPercent::Three, &TABLE_IX_32V),
        (SystemVoltage::V12, DropPercent::Ten, &TABLE_X_12V),
        (SystemVoltage::V24, DropPercent::Ten, &TABLE_X_24V),
        (SystemVoltage::V32, DropPercent::Ten, &TABLE_X_32V),
    ];

    let mut charts = BTreeMap::new();
    for (voltage, drop, source) in sources {
        let chart = chart(source).map_err(|e| {
            MarineWireError::InvalidTable(format!("{} {} chart: {}", voltage, drop, e))
        })?;
        charts.insert((voltage, drop), chart);
    }
    Ok(VoltageDropTable::new(charts))
}

fn chart(source: &ChartRows) -> Result<DropChart> {
    let rows = source
        .iter()
        .map(|(current, cells)| {
            Ok(DropRow {
                current_a: f64::from(*current),
                gauges: cells.iter().map(|c| parse_cell(c)).collect::<Result<_>>()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    DropChart::new(LENGTHS_FT.to_vec(), rows)
}

fn parse_cell(cell: &str) -> Result<Gauge> {
    Gauge::parse(cell).map_err(|e| MarineWireError::InvalidTable(e.to_string()))
}
