//! PV array and battery sizing from annual load, irradiance and solar offset.

use serde::Serialize;

use crate::load::DAYS_PER_YEAR;

/// Oversizing margin applied to the PV array to cover system losses.
pub const PV_OVERSIZE_FACTOR: f64 = 1.1;
/// Hours of battery autonomy targeted by default.
pub const DEFAULT_BACKUP_HOURS: f64 = 4.0;

/// Recommended system size for one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemSizing {
    /// Recommended PV array size (kW).
    pub pv_size_kw: f64,
    /// Expected annual PV production (kWh).
    pub annual_pv_output_kwh: f64,
    /// Recommended battery capacity (kWh).
    pub battery_size_kwh: f64,
}

/// Normalizes a raw "desired solar percent" entry to a fraction in `[0, 1]`.
///
/// Absent, blank or non-numeric input counts as 0; numbers are clamped to
/// `[0, 100]` before dividing by 100.
///
/// # Examples
///
/// ```
/// use load_calc::sizing::offset_fraction;
///
/// assert_eq!(offset_fraction(Some("50")), 0.5);
/// assert_eq!(offset_fraction(Some("150")), 1.0);
/// assert_eq!(offset_fraction(None), 0.0);
/// ```
pub fn offset_fraction(raw: Option<&str>) -> f64 {
    let pct = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);
    offset_fraction_from_percent(pct)
}

/// Numeric variant of [`offset_fraction`]; non-finite input counts as 0.
pub fn offset_fraction_from_percent(pct: f64) -> f64 {
    if !pct.is_finite() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0) / 100.0
}

/// Sizes the PV array and battery from an annual load.
///
/// The battery covers `backup_hours` of the solar-offset share of the
/// average hourly load, so a zero offset yields no battery.
///
/// # Arguments
///
/// * `annual_load_kwh` - Annual facility load (kWh)
/// * `irradiance` - Annual irradiance (kWh/kW/yr)
/// * `offset_fraction` - Share of annual load supplied by solar, in `[0, 1]`
/// * `backup_hours` - Target battery autonomy (h)
///
/// # Returns
///
/// All-zero sizing when the load or offset is zero; otherwise PV size,
/// annual output and battery capacity.
pub fn size_system(
    annual_load_kwh: f64,
    irradiance: f64,
    offset_fraction: f64,
    backup_hours: f64,
) -> SystemSizing {
    size(
        annual_load_kwh,
        annual_load_kwh / DAYS_PER_YEAR,
        irradiance,
        offset_fraction,
        backup_hours,
    )
}

/// Same as [`size_system`] but starting from the total daily load.
///
/// # Arguments
///
/// * `total_daily_kwh` - Total daily facility load (kWh)
/// * `irradiance` - Annual irradiance (kWh/kW/yr)
/// * `offset_fraction` - Share of annual load supplied by solar, in `[0, 1]`
/// * `backup_hours` - Target battery autonomy (h)
pub fn size_from_daily(
    total_daily_kwh: f64,
    irradiance: f64,
    offset_fraction: f64,
    backup_hours: f64,
) -> SystemSizing {
    size(
        total_daily_kwh * DAYS_PER_YEAR,
        total_daily_kwh,
        irradiance,
        offset_fraction,
        backup_hours,
    )
}

fn size(
    annual_kwh: f64,
    daily_kwh: f64,
    irradiance: f64,
    offset_fraction: f64,
    backup_hours: f64,
) -> SystemSizing {
    if annual_kwh == 0.0 || offset_fraction == 0.0 {
        return SystemSizing {
            pv_size_kw: 0.0,
            annual_pv_output_kwh: 0.0,
            battery_size_kwh: 0.0,
        };
    }

    let pv_size_kw = (annual_kwh * offset_fraction / irradiance) * PV_OVERSIZE_FACTOR;
    SystemSizing {
        pv_size_kw,
        annual_pv_output_kwh: pv_size_kw * irradiance,
        battery_size_kwh: (daily_kwh * offset_fraction / 24.0) * backup_hours,
    }
}
