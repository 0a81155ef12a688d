//! Size a circuit and print both constraints.

use marinewire::prelude::*;

fn main() -> Result<(), MarineWireError> {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let mut next = |default: f64| args.next().and_then(|a| a.ok()).unwrap_or(default);

    let volts = next(12.0);
    let amps = next(20.0);
    let length_ft = next(40.0);
    let insulation_c = next(105.0);

    let request = CircuitRequest::new(volts, amps, length_ft, insulation_c);
    let selection = GaugeSelector::new().for_circuit(&request)?;

    println!("{} A at {} V over {} ft (round trip), {} C insulation", amps, volts, length_ft, insulation_c);
    println!("  Ampacity:     AWG {}", selection.ampacity_gauge);
    println!("  Voltage drop: AWG {}", selection.voltage_drop_gauge);
    println!("  Use:          AWG {} ({:?})", selection.gauge, selection.limited_by);

    let wire = SolidWire::new(selection.gauge)?;
    println!(
        "  Solid copper: {:.2} mm, {:.2} mm², {:.3} mΩ/m",
        wire.diameter_mm(),
        wire.cross_sectional_area_mm2(),
        wire.resistance_per_meter(Conductor::Copper.resistivity_ohm_m()) * 1e3
    );
    Ok(())
}
