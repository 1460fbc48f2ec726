//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use load_calc::equipment::{EquipmentDraft, EquipmentEntry};
use load_calc::session::{FacilityProfile, Session};

/// Builds a complete draft (hours are capped at 24 as on the form).
pub fn draft(name: &str, quantity: u32, power_watts: f64, daily_hours: f64) -> EquipmentDraft {
    let mut d = EquipmentDraft::new(name, quantity, power_watts);
    d.set_daily_hours(daily_hours);
    d
}

/// A valid schedule entry.
pub fn entry(name: &str, quantity: u32, power_watts: f64, daily_hours: f64) -> EquipmentEntry {
    EquipmentEntry::new(name, quantity, power_watts, daily_hours).expect("valid fixture entry")
}

/// Office schedule totalling 58.4 kWh/day.
pub fn mixed_schedule() -> Vec<EquipmentEntry> {
    vec![
        entry("Computer", 10, 200.0, 8.0),     // 16.0
        entry("Lights", 40, 60.0, 10.0),       // 24.0
        entry("Refrigerator", 1, 750.0, 24.0), // 18.0
        entry("Printer", 2, 50.0, 4.0),        // 0.4
    ]
}

/// San Francisco facility at 50% solar with the given schedule.
pub fn sf_session(schedule: &[EquipmentEntry]) -> Session {
    let mut session = Session::new(FacilityProfile::new("94016", "50"));
    for e in schedule {
        session.add_entry(e.clone());
    }
    session
}
