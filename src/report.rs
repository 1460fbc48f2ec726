//! Estimate output and its text rendering.

use std::fmt;

use serde::Serialize;

use crate::equipment::EquipmentEntry;
use crate::load::LoadSummary;
use crate::sizing::SystemSizing;

/// Shown in place of any figure that is not a finite number.
pub const PLACEHOLDER: &str = "—";

/// One schedule line with its computed daily energy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    #[serde(flatten)]
    pub entry: EquipmentEntry,
    /// Daily energy for this line (kWh).
    pub daily_kwh: f64,
}

/// Complete result of one recomputation over a session.
///
/// Non-finite figures serialize as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub zip_code: String,
    /// Solar percent as entered, before normalization.
    pub desired_solar_pct: String,
    /// Irradiance used for sizing (kWh/kW/yr).
    pub irradiance: f64,
    /// Clamped solar offset in `[0, 1]`.
    pub offset_fraction: f64,
    /// Battery autonomy target (h).
    pub backup_hours: f64,
    pub rows: Vec<ScheduleRow>,
    pub load: LoadSummary,
    pub sizing: SystemSizing,
}

/// Formats `value` with `decimals` places and a unit, or [`PLACEHOLDER`]
/// when the value is NaN or infinite.
///
/// # Examples
///
/// ```
/// use load_calc::report::format_or_placeholder;
///
/// assert_eq!(format_or_placeholder(1.234, 2, "kW"), "1.23 kW");
/// assert_eq!(format_or_placeholder(f64::NAN, 2, "kW"), "—");
/// ```
pub fn format_or_placeholder(value: f64, decimals: usize, unit: &str) -> String {
    if value.is_finite() {
        format!("{value:.decimals$} {unit}")
    } else {
        PLACEHOLDER.to_string()
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.rows.is_empty() {
            writeln!(f, "--- Equipment Schedule ---")?;
            writeln!(
                f,
                "{:<3} {:<20} {:>5} {:>10} {:>10} {:>17}",
                "#", "Equipment", "Qty", "Power (W)", "Daily Hrs", "Daily Load (kWh)"
            )?;
            for (idx, row) in self.rows.iter().enumerate() {
                writeln!(
                    f,
                    "{:<3} {:<20} {:>5} {:>10} {:>10} {:>17.2}",
                    idx,
                    row.entry.name(),
                    row.entry.quantity(),
                    row.entry.power_watts(),
                    row.entry.daily_hours(),
                    row.daily_kwh
                )?;
            }
            writeln!(f)?;
        }

        let pct = if self.desired_solar_pct.trim().is_empty() {
            "0"
        } else {
            self.desired_solar_pct.trim()
        };

        writeln!(f, "--- Load Summary ---")?;
        writeln!(
            f,
            "Solar calculations use average irradiance for ZIP code {}: {} kWh/kW/year",
            self.zip_code, self.irradiance
        )?;
        writeln!(f, "Total daily load:      {:.2} kWh", self.load.daily_kwh)?;
        writeln!(f, "Monthly load:          {:.2} kWh", self.load.monthly_kwh)?;
        writeln!(f, "Annual load:           {:.2} kWh", self.load.annual_kwh)?;
        writeln!(f)?;
        writeln!(f, "--- Solar & Battery Recommendation ---")?;
        writeln!(
            f,
            "Solar PV size ({pct}%): {}",
            format_or_placeholder(self.sizing.pv_size_kw, 2, "kW")
        )?;
        writeln!(
            f,
            "Annual PV output:      {}",
            format_or_placeholder(self.sizing.annual_pv_output_kwh, 0, "kWh")
        )?;
        write!(
            f,
            "Battery storage:       {} (~{}hr backup, matches solar contribution)",
            format_or_placeholder(self.sizing.battery_size_kwh, 1, "kWh"),
            self.backup_hours
        )
    }
}
