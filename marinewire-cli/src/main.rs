//! MarineWire CLI - ABYC E-11 wire sizing from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use marinewire::tables::{DropPercent, InsulationRating, SystemVoltage};
use marinewire::{
    CircuitOptions, CircuitRequest, CircuitSelection, Conductor, Gauge, GaugeSelector,
    MarineWireError, ReferenceData, SolidWire,
};
use serde_json::json;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marinewire")]
#[command(about = "ABYC E-11 marine wire gauge sizing tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Log table lookups to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smallest gauge whose ampacity (Table VI-B) covers the current
    Ampacity {
        /// Circuit current in amperes
        #[arg(short, long)]
        current: f64,

        /// Insulation temperature rating in degrees C
        #[arg(short = 't', long)]
        insulation_temp: f64,

        /// Conductor runs through an engine space
        #[arg(long)]
        engine_room: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Smallest gauge within the allowed voltage drop (Tables IX/X)
    VoltageDrop {
        /// System voltage (12, 24 or 32)
        #[arg(short = 'V', long)]
        voltage: f64,

        /// Circuit current in amperes
        #[arg(short, long)]
        current: f64,

        /// Round-trip conductor length in feet
        #[arg(short, long)]
        length: f64,

        /// Allowed voltage drop in percent (3 or 10)
        #[arg(short, long, default_value_t = 3)]
        drop_percent: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Smallest gauge meeting both ampacity and voltage drop
    Circuit {
        /// System voltage (12, 24 or 32)
        #[arg(short = 'V', long)]
        voltage: f64,

        /// Circuit current in amperes
        #[arg(short, long)]
        current: f64,

        /// Round-trip conductor length in feet
        #[arg(short, long)]
        length: f64,

        /// Insulation temperature rating in degrees C
        #[arg(short = 't', long)]
        insulation_temp: f64,

        /// Conductor runs through an engine space
        #[arg(long)]
        engine_room: bool,

        /// Allowed voltage drop in percent (3 or 10)
        #[arg(short, long, default_value_t = 3)]
        drop_percent: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Solid wire dimensions and resistance for a gauge
    Wire {
        /// Gauge, e.g. 14, 00 or 2/0
        #[arg(value_name = "GAUGE")]
        gauge: String,

        /// Conductor material
        #[arg(short, long, value_enum, default_value = "copper")]
        material: Material,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the tabulated ratings, voltages and lengths
    Tables {
        /// Also print every ampacity curve
        #[arg(long)]
        curves: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Material {
    Copper,
    Aluminum,
}

impl From<Material> for Conductor {
    fn from(material: Material) -> Self {
        match material {
            Material::Copper => Conductor::Copper,
            Material::Aluminum => Conductor::Aluminum,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Ampacity {
            current,
            insulation_temp,
            engine_room,
            format,
        } => handle_ampacity(current, insulation_temp, engine_room, &format),
        Commands::VoltageDrop {
            voltage,
            current,
            length,
            drop_percent,
            format,
        } => handle_voltage_drop(voltage, current, length, drop_percent, &format),
        Commands::Circuit {
            voltage,
            current,
            length,
            insulation_temp,
            engine_room,
            drop_percent,
            format,
        } => {
            let request = CircuitRequest::new(voltage, current, length, insulation_temp)
                .with_options(CircuitOptions {
                    engine_room,
                    drop_percent,
                });
            handle_circuit(&request, &format)
        }
        Commands::Wire {
            gauge,
            material,
            format,
        } => handle_wire(&gauge, material.into(), &format),
        Commands::Tables { curves } => {
            handle_tables(curves);
            Ok(())
        }
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json(value: &serde_json::Value) -> Result<(), MarineWireError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| MarineWireError::InvalidTable(format!("JSON output: {}", e)))?;
    println!("{}", text);
    Ok(())
}

fn handle_ampacity(
    current: f64,
    insulation_temp: f64,
    engine_room: bool,
    format: &OutputFormat,
) -> Result<(), MarineWireError> {
    let gauge = GaugeSelector::new().for_ampacity(current, insulation_temp, engine_room)?;
    match format {
        OutputFormat::Human => {
            println!(
                "AWG {} ({} A, {} C insulation{})",
                gauge,
                current,
                insulation_temp,
                if engine_room { ", engine room" } else { "" }
            );
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "gauge": gauge,
            "current_a": current,
            "insulation_temp_c": insulation_temp,
            "engine_room": engine_room,
        })),
    }
}

fn handle_voltage_drop(
    voltage: f64,
    current: f64,
    length: f64,
    drop_percent: u32,
    format: &OutputFormat,
) -> Result<(), MarineWireError> {
    let gauge = GaugeSelector::new().for_voltage_drop(voltage, current, length, drop_percent)?;
    match format {
        OutputFormat::Human => {
            println!(
                "AWG {} ({} A at {} V over {} ft, {}% drop)",
                gauge, current, voltage, length, drop_percent
            );
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "gauge": gauge,
            "system_voltage_v": voltage,
            "current_a": current,
            "length_ft": length,
            "drop_percent": drop_percent,
        })),
    }
}

fn handle_circuit(request: &CircuitRequest, format: &OutputFormat) -> Result<(), MarineWireError> {
    let selection = GaugeSelector::new().for_circuit(request)?;
    match format {
        OutputFormat::Human => {
            output_circuit_human(request, &selection);
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "request": request,
            "selection": selection,
        })),
    }
}

fn output_circuit_human(request: &CircuitRequest, selection: &CircuitSelection) {
    println!(
        "\nCircuit: {} A at {} V, {} ft round trip",
        request.current_a, request.system_voltage_v, request.length_ft
    );
    println!("{}", "─".repeat(60));
    println!(
        "  Ampacity ({} C{}):  AWG {}",
        request.insulation_temp_c,
        if request.options.engine_room { ", engine room" } else { "" },
        selection.ampacity_gauge
    );
    println!(
        "  Voltage drop ({}%):  AWG {}",
        request.options.drop_percent, selection.voltage_drop_gauge
    );
    println!("\n  Minimum gauge: AWG {}", selection.gauge);
    println!("  Limited by:    {:?}", selection.limited_by);
}

fn handle_wire(spec: &str, conductor: Conductor, format: &OutputFormat) -> Result<(), MarineWireError> {
    let gauge = Gauge::parse(spec)?;
    let wire = SolidWire::new(gauge)?;
    let resistance = wire.resistance_per_meter(conductor.resistivity_ohm_m());
    match format {
        OutputFormat::Human => {
            println!("AWG {} solid {:?}", gauge, conductor);
            println!("  Diameter:   {:.4} in ({:.3} mm)", wire.diameter_in(), wire.diameter_mm());
            println!(
                "  Area:       {:.5} in² ({:.3} mm²)",
                wire.cross_sectional_area_in2(),
                wire.cross_sectional_area_mm2()
            );
            println!("  Resistance: {:.4} mΩ/m", resistance * 1e3);
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "gauge": gauge,
            "conductor": conductor,
            "diameter_in": wire.diameter_in(),
            "diameter_mm": wire.diameter_mm(),
            "area_in2": wire.cross_sectional_area_in2(),
            "area_mm2": wire.cross_sectional_area_mm2(),
            "resistance_ohm_per_m": resistance,
        })),
    }
}

fn handle_tables(curves: bool) {
    let data = ReferenceData::builtin();
    println!("ABYC E-11 (2008) reference tables\n");

    let ratings: Vec<String> = InsulationRating::ALL.iter().map(|r| r.to_string()).collect();
    println!("  Insulation ratings: {}", ratings.join(", "));
    let voltages: Vec<String> = SystemVoltage::ALL.iter().map(|v| v.to_string()).collect();
    println!("  System voltages:    {}", voltages.join(", "));
    let drops: Vec<String> = DropPercent::ALL.iter().map(|d| d.to_string()).collect();
    println!("  Voltage drop:       {}", drops.join(", "));
    if let Some((_, _, chart)) = data.voltage_drop.iter().next() {
        let lengths: Vec<String> = chart.lengths_ft().iter().map(|l| l.to_string()).collect();
        println!("  Lengths (ft):       {}", lengths.join(", "));
    }

    if curves {
        for (rating, engine_room, curve) in data.ampacity.iter() {
            println!(
                "\n  Table VI-B, {}{}:",
                rating,
                if engine_room { ", engine room" } else { "" }
            );
            for point in curve.points() {
                println!("    AWG {:>4}  {:>6.1} A", point.gauge.to_string(), point.current_a);
            }
        }
    }
}
