//! Properties of the embedded ABYC tables and the selection policy

use marinewire::prelude::*;
use marinewire::tables::InsulationRating;

fn tables() -> &'static ReferenceData {
    ReferenceData::builtin()
}

#[test]
fn test_ampacity_curves_decrease_with_gauge_number() {
    for (rating, engine_room, curve) in tables().ampacity.iter() {
        if curve.max_capacity() == 0.0 {
            continue;
        }
        assert!(
            curve.is_strictly_decreasing(),
            "{} engine_room={} is not monotonic",
            rating,
            engine_room
        );
    }
}

#[test]
fn test_engine_room_columns_without_allowance() {
    for rating in [InsulationRating::C60, InsulationRating::C200] {
        let curve = tables().ampacity.curve(rating, true).unwrap();
        assert_eq!(curve.max_capacity(), 0.0, "{}", rating);
    }
}

#[test]
fn test_voltage_drop_curves_decrease_with_gauge_number() {
    for (voltage, drop, chart) in tables().voltage_drop.iter() {
        for &length in chart.lengths_ft() {
            let curve = chart.curve(length).unwrap();
            assert!(!curve.is_empty());
            assert!(
                curve.is_strictly_decreasing(),
                "{} {} at {} ft",
                voltage,
                drop,
                length
            );
        }
    }
}

#[test]
fn test_voltage_drop_views_round_trip() {
    for (voltage, drop, chart) in tables().voltage_drop.iter() {
        for &length in chart.lengths_ft() {
            let curve = chart.curve(length).unwrap();
            for row in chart.rows() {
                assert_eq!(
                    chart.required_gauge(row.current_a, length),
                    curve.thinnest_covering(row.current_a),
                    "{} {} {} A at {} ft",
                    voltage,
                    drop,
                    row.current_a,
                    length
                );
            }
        }
    }
}

#[test]
fn test_ampacity_selection_is_minimal() {
    let selector = GaugeSelector::new();
    for (rating, engine_room, curve) in tables().ampacity.iter() {
        let mut current = 0.5;
        while current <= 360.0 {
            match selector.for_ampacity(current, f64::from(rating.celsius()), engine_room) {
                Ok(selected) => {
                    assert!(curve.capacity(selected).unwrap() >= current);
                    for thinner in curve.points().iter().filter(|p| p.gauge > selected) {
                        assert!(
                            thinner.current_a < current,
                            "{} would also carry {} A",
                            thinner.gauge,
                            current
                        );
                    }
                }
                Err(MarineWireError::NoAcceptableGauge { .. }) => {
                    assert!(curve.max_capacity() < current);
                }
                Err(e) => panic!("unexpected error: {e}"),
            }
            current += 0.5;
        }
    }
}

#[test]
fn test_length_rounding_is_idempotent_and_monotonic() {
    for (_, _, chart) in tables().voltage_drop.iter() {
        for &length in chart.lengths_ft() {
            assert_eq!(chart.round_length(f64::from(length)), Ok(length));
        }
        let mut previous = 0;
        let mut length = 0.0;
        while length <= 170.0 {
            let bucket = chart.round_length(length).unwrap();
            assert!(bucket >= previous);
            assert!(f64::from(bucket) >= length);
            previous = bucket;
            length += 0.25;
        }
    }
}

#[test]
fn test_circuit_selection_dominates_both_constraints() {
    let selector = GaugeSelector::new();
    for voltage in [12.0, 24.0, 32.0] {
        for current in [3.0, 12.0, 27.0, 55.0, 95.0] {
            for length in [8.0, 33.0, 90.0, 160.0] {
                let request = CircuitRequest::new(voltage, current, length, 90.0);
                let ampacity = selector.for_ampacity(current, 90.0, false);
                let drop = selector.for_voltage_drop(voltage, current, length, 3);
                match (ampacity, drop, selector.for_circuit(&request)) {
                    (Ok(a), Ok(d), Ok(selection)) => {
                        assert!(selection.gauge <= a && selection.gauge <= d);
                        assert!(selection.gauge == a || selection.gauge == d);
                    }
                    (Err(e), _, Err(got)) | (Ok(_), Err(e), Err(got)) => assert_eq!(e, got),
                    other => panic!("inconsistent results: {other:?}"),
                }
            }
        }
    }
}
