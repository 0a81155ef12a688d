//! Gauge notation and solid-wire dimensions

use approx::assert_abs_diff_eq;
use marinewire::prelude::*;
use marinewire::{
    canonicalize_gauge, parse_gauge, solid_wire_cross_sectional_area, solid_wire_diameter,
    solid_wire_resistance_per_unit_length, CanonicalGauge,
};

#[test]
fn test_canonical_round_trip_over_solid_range() {
    for number in -3..=40 {
        let display = canonicalize_gauge(number).to_string();
        assert_eq!(parse_gauge(&display).unwrap().number(), number, "{display}");
    }
}

#[test]
fn test_synonyms_share_canonical_form() {
    let forms = [parse_gauge("00").unwrap(), Gauge::from_number(-1), parse_gauge("2/0").unwrap()];
    for g in forms {
        assert_eq!(g.canonical(), CanonicalGauge::Aught(2));
        assert_eq!(g.to_string(), "2/0");
    }
    assert_eq!(canonicalize_gauge(0), CanonicalGauge::Number(0));
    assert_eq!(parse_gauge("1/0").unwrap().to_string(), "0");
}

#[test]
fn test_invalid_specification() {
    assert_eq!(
        parse_gauge("xxx"),
        Err(MarineWireError::InvalidGaugeSpecification("xxx".to_string()))
    );
}

#[test]
fn test_diameter_by_any_notation() {
    for spec in ["0000", "4/0", "-3"] {
        let d = solid_wire_diameter(parse_gauge(spec).unwrap()).unwrap();
        assert_abs_diff_eq!(d, 0.46, epsilon = 0.1e-3);
    }
    let d = solid_wire_diameter(Gauge::from_number(21)).unwrap();
    assert_abs_diff_eq!(d, 0.02846, epsilon = 0.1e-3);
}

#[test]
fn test_out_of_range_gauges() {
    for n in [-4, 41] {
        assert!(matches!(
            solid_wire_diameter(Gauge::from_number(n)),
            Err(MarineWireError::OutOfRangeGauge { .. })
        ));
        assert!(solid_wire_cross_sectional_area(Gauge::from_number(n)).is_err());
    }
}

#[test]
fn test_area_and_resistance() {
    let g = Gauge::from_number(14);
    let area_in2 = solid_wire_cross_sectional_area(g).unwrap();
    assert_abs_diff_eq!(area_in2, 0.003_225, epsilon = 0.000_005);

    let copper = solid_wire_resistance_per_unit_length(g, Conductor::Copper.resistivity_ohm_m())
        .unwrap();
    // 8.285 ohm per km
    assert_abs_diff_eq!(copper, 8.285e-3, epsilon = 0.01e-3);

    let wire = SolidWire::new(g).unwrap();
    assert_abs_diff_eq!(wire.diameter_mm(), 1.628, epsilon = 0.001);
}
