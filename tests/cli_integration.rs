//! Runs the `load-calc` binary and checks its report output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_load-calc"))
        .args(args)
        .output()
        .expect("load-calc process should run")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "load-calc failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout should be valid UTF-8")
}

fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid format for line `{line}`"));

    let numeric = raw.split(unit).next().unwrap_or(raw).trim();
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from line `{line}`"))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("load-calc-{}-{name}", std::process::id()))
}

#[test]
fn office_preset_report() {
    let stdout = stdout_of(&run(&["--preset", "office"]));

    assert!((parse_metric(&stdout, "Total daily load:", "kWh") - 114.4).abs() < 1e-6);
    assert!((parse_metric(&stdout, "Monthly load:", "kWh") - 3432.0).abs() < 1e-6);
    assert!((parse_metric(&stdout, "Annual load:", "kWh") - 41_756.0).abs() < 1e-6);

    // 41756 * 0.6 / 1700 * 1.1
    assert!((parse_metric(&stdout, "Solar PV size (60%):", "kW") - 16.21).abs() < 1e-9);
    assert!(stdout.contains("~4hr backup, matches solar contribution"));
}

#[test]
fn default_run_uses_office_preset() {
    let default = stdout_of(&run(&[]));
    let office = stdout_of(&run(&["--preset", "office"]));
    assert_eq!(default, office);
}

#[test]
fn overrides_change_location_and_target() {
    let stdout = stdout_of(&run(&[
        "--preset",
        "office",
        "--zip",
        "12345",
        "--solar-pct",
        "250",
    ]));
    assert!(stdout.contains("ZIP code 12345: 1500 kWh/kW/year"));
    // Clamped to 100%: 41756 / 1500 * 1.1
    assert!((parse_metric(&stdout, "Solar PV size (250%):", "kW") - 30.62).abs() < 1e-9);
}

#[test]
fn missing_zip_is_rejected() {
    let output = run(&["--preset", "empty"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ZIP code is required"), "stderr={stderr}");
}

#[test]
fn unknown_preset_is_rejected() {
    let output = run(&["--preset", "warehouse"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset"));
}

#[test]
fn facility_file_and_schedule_export() {
    let toml_path = temp_path("facility.toml");
    let csv_path = temp_path("schedule.csv");
    fs::write(
        &toml_path,
        r#"
[facility]
zip_code = "90001"
desired_solar_pct = 50

[[equipment]]
catalog = "Freezer"
daily_hours = 24.0

[[equipment]]
name = "Pump"
quantity = 2
power_watts = 100.0
daily_hours = 5.0
"#,
    )
    .expect("write facility file");

    let stdout = stdout_of(&run(&[
        "--facility",
        toml_path.to_str().unwrap_or_default(),
        "--schedule-out",
        csv_path.to_str().unwrap_or_default(),
    ]));
    assert!((parse_metric(&stdout, "Total daily load:", "kWh") - 20.2).abs() < 1e-6);
    assert!(stdout.contains("1850 kWh/kW/year"));

    let csv = fs::read_to_string(&csv_path).expect("schedule CSV should exist");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "name,quantity,power_w,daily_hours,daily_kwh");
    assert_eq!(lines[1], "Freezer,1,800,24,19.20");
    assert_eq!(lines[2], "Pump,2,100,5,1.00");

    let _ = fs::remove_file(toml_path);
    let _ = fs::remove_file(csv_path);
}

#[test]
fn invalid_facility_file_reports_field_path() {
    let toml_path = temp_path("invalid.toml");
    fs::write(
        &toml_path,
        "[facility]\nzip_code = \"94016\"\n\n[[equipment]]\nname = \"Pump\"\ndaily_hours = 3.0\n",
    )
    .expect("write facility file");

    let output = run(&["--facility", toml_path.to_str().unwrap_or_default()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("equipment[0].power_watts"));

    let _ = fs::remove_file(toml_path);
}

#[test]
fn list_equipment_is_sorted() {
    let stdout = stdout_of(&run(&["--list-equipment"]));
    let compressor = stdout.find("Compressor");
    let computer = stdout.find("Computer");
    let washer = stdout.find("Washer");
    assert!(compressor.is_some() && computer.is_some() && washer.is_some());
    assert!(compressor < computer && computer < washer);
}

#[test]
fn bundled_retail_facility() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("facilities/retail.toml");
    let stdout = stdout_of(&run(&["--facility", path.to_str().unwrap_or_default()]));

    // 21.6 + 90 + 36 + 5.4
    assert!((parse_metric(&stdout, "Total daily load:", "kWh") - 153.0).abs() < 1e-6);
    assert!(stdout.contains("ZIP code 33101: 1700 kWh/kW/year"));
    // 153 * 0.4 / 24 * 4
    assert!((parse_metric(&stdout, "Battery storage:", "kWh") - 10.2).abs() < 1e-9);
}
