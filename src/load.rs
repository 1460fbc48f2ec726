//! Daily, monthly and annual energy totals for an equipment schedule.

use serde::Serialize;

use crate::equipment::EquipmentEntry;

/// Fixed month length used for the monthly approximation.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Fixed year length used for the annual approximation.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Daily energy of one line item in kWh.
///
/// # Examples
///
/// ```
/// use load_calc::equipment::EquipmentEntry;
/// use load_calc::load::daily_kwh;
///
/// let entry = EquipmentEntry::new("Fan", 2, 100.0, 5.0).unwrap();
/// assert_eq!(daily_kwh(&entry), 1.0);
/// ```
pub fn daily_kwh(entry: &EquipmentEntry) -> f64 {
    f64::from(entry.quantity()) * entry.power_watts() * entry.daily_hours() / 1000.0
}

/// Sum of [`daily_kwh`] over the schedule.
///
/// # Arguments
///
/// * `schedule` - Admitted equipment entries, in any order
///
/// # Returns
///
/// Total daily energy (kWh); zero for an empty schedule.
pub fn total_daily_load(schedule: &[EquipmentEntry]) -> f64 {
    schedule.iter().map(daily_kwh).sum()
}

/// Monthly energy (kWh) using a fixed 30-day month.
pub fn monthly_load(total_daily_kwh: f64) -> f64 {
    total_daily_kwh * DAYS_PER_MONTH
}

pub fn annual_load(total_daily_kwh: f64) -> f64 {
    total_daily_kwh * DAYS_PER_YEAR
}

/// Energy totals derived from one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadSummary {
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub annual_kwh: f64,
}

impl LoadSummary {
    /// Builds the summary from a daily total.
    pub fn from_daily(daily_kwh: f64) -> Self {
        Self {
            daily_kwh,
            monthly_kwh: monthly_load(daily_kwh),
            annual_kwh: annual_load(daily_kwh),
        }
    }

    pub fn from_schedule(schedule: &[EquipmentEntry]) -> Self {
        Self::from_daily(total_daily_load(schedule))
    }
}
