//! Load calculator entry point: CLI wiring and config-driven estimation.

use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use load_calc::config::{FacilityConfig, PercentInput};
use load_calc::equipment::standard_equipment;
use load_calc::io::export::export_schedule_csv;
use load_calc::irradiance::{DEFAULT_IRRADIANCE, IrradianceTable};

/// Parsed CLI arguments.
struct CliArgs {
    facility_path: Option<String>,
    preset: Option<String>,
    zip_override: Option<String>,
    solar_pct_override: Option<String>,
    backup_hours_override: Option<f64>,
    schedule_out: Option<String>,
    list_equipment: bool,
    list_irradiance: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("load-calc: facility electric load estimator with solar and battery sizing");
    eprintln!();
    eprintln!("Usage: load-calc [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --facility <path>        Load facility and equipment from TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (empty, office, workshop)");
    eprintln!("  --zip <code>             Override the facility ZIP code");
    eprintln!("  --solar-pct <value>      Override the desired solar percentage");
    eprintln!("  --backup-hours <h>       Override the battery backup hours");
    eprintln!("  --schedule-out <path>    Export the equipment schedule to CSV");
    eprintln!("  --list-equipment         Print the standard equipment catalog");
    eprintln!("  --list-irradiance        Print the irradiance table");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --facility or --preset is given, the office preset is used.");
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic logging on stderr.");
}

/// Returns the value following flag `args[*i]`, exiting if it is missing.
fn next_value<'a>(args: &'a [String], i: &mut usize, what: &str) -> &'a str {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => v.as_str(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        facility_path: None,
        preset: None,
        zip_override: None,
        solar_pct_override: None,
        backup_hours_override: None,
        schedule_out: None,
        list_equipment: false,
        list_irradiance: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--facility" => {
                cli.facility_path = Some(next_value(&args, &mut i, "a path argument").to_string());
            }
            "--preset" => {
                cli.preset = Some(next_value(&args, &mut i, "a name argument").to_string());
            }
            "--zip" => {
                cli.zip_override = Some(next_value(&args, &mut i, "a ZIP code argument").to_string());
            }
            "--solar-pct" => {
                cli.solar_pct_override =
                    Some(next_value(&args, &mut i, "a percentage argument").to_string());
            }
            "--backup-hours" => {
                let raw = next_value(&args, &mut i, "a number argument");
                if let Ok(h) = raw.parse::<f64>() {
                    cli.backup_hours_override = Some(h);
                } else {
                    eprintln!("error: --backup-hours value \"{raw}\" is not a valid number");
                    process::exit(1);
                }
            }
            "--schedule-out" => {
                cli.schedule_out = Some(next_value(&args, &mut i, "a path argument").to_string());
            }
            "--list-equipment" => {
                cli.list_equipment = true;
            }
            "--list-irradiance" => {
                cli.list_irradiance = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                let raw = next_value(&args, &mut i, "a u16 argument");
                if let Ok(p) = raw.parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{raw}\" is not a valid u16");
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_equipment_catalog() {
    println!("--- Standard Equipment ---");
    for item in standard_equipment() {
        println!("{:<20} {:>6} W", item.name, item.typical_power_watts);
    }
}

fn print_irradiance_table() {
    println!("--- Irradiance by ZIP (kWh/kW/year) ---");
    for entry in IrradianceTable::global().entries() {
        println!("{}  {:<15} {:>6}", entry.zip, entry.city, entry.kwh_per_kw);
    }
    println!("other  {:<15} {:>6}", "(default)", DEFAULT_IRRADIANCE);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = parse_args();

    if cli.list_equipment || cli.list_irradiance {
        if cli.list_equipment {
            print_equipment_catalog();
        }
        if cli.list_irradiance {
            print_irradiance_table();
        }
        return;
    }

    // Load config: --facility takes priority, then --preset, then office default
    let mut config = if let Some(ref path) = cli.facility_path {
        match FacilityConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match FacilityConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        FacilityConfig::office()
    };

    // Apply overrides
    if let Some(zip) = cli.zip_override {
        config.facility.zip_code = zip;
    }
    if let Some(pct) = cli.solar_pct_override {
        config.facility.desired_solar_pct = PercentInput::Text(pct);
    }
    if let Some(hours) = cli.backup_hours_override {
        config.sizing.backup_hours = hours;
    }

    #[cfg(feature = "api")]
    if cli.serve {
        serve_api(config.sizing.backup_hours, cli.port);
        return;
    }

    let session = match config.build_session() {
        Ok(session) => session,
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            process::exit(1);
        }
    };

    if !session.facility().has_location() {
        eprintln!("error: ZIP code is required to determine solar system size (use --zip)");
        process::exit(1);
    }

    let estimate = session.estimate(config.sizing.backup_hours);
    println!("{estimate}");

    if let Some(ref path) = cli.schedule_out {
        if let Err(e) = export_schedule_csv(&estimate.rows, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Schedule written to {path}");
    }
}

#[cfg(feature = "api")]
fn serve_api(default_backup_hours: f64, port: u16) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    if !default_backup_hours.is_finite() || default_backup_hours <= 0.0 {
        eprintln!("config error: sizing.backup_hours: must be > 0");
        process::exit(1);
    }

    let state = Arc::new(load_calc::api::AppState {
        default_backup_hours,
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(load_calc::api::serve(state, addr)) {
        eprintln!("error: API server failed: {e}");
        process::exit(1);
    }
}
