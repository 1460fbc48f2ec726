//! Explicit session context: facility profile plus the equipment schedule.

use crate::equipment::{EquipmentDraft, EquipmentEntry};
use crate::irradiance::annual_irradiance;
use crate::load::{LoadSummary, daily_kwh};
use crate::report::{Estimate, ScheduleRow};
use crate::sizing::{offset_fraction, size_from_daily};

/// Facility parameters entered alongside the equipment list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilityProfile {
    /// Street address; informational only.
    pub address: String,
    /// ZIP code used as the irradiance lookup key.
    pub zip_code: String,
    /// Desired solar percent exactly as entered (may be blank or out of range).
    pub desired_solar_pct: String,
}

impl FacilityProfile {
    pub fn new(zip_code: impl Into<String>, desired_solar_pct: impl Into<String>) -> Self {
        Self {
            address: String::new(),
            zip_code: zip_code.into(),
            desired_solar_pct: desired_solar_pct.into(),
        }
    }

    /// True once a non-blank ZIP code has been entered.
    pub fn has_location(&self) -> bool {
        !self.zip_code.trim().is_empty()
    }
}

/// Owns the mutable form state; every computation borrows it read-only.
#[derive(Debug, Clone, Default)]
pub struct Session {
    facility: FacilityProfile,
    schedule: Vec<EquipmentEntry>,
}

impl Session {
    pub fn new(facility: FacilityProfile) -> Self {
        Self {
            facility,
            schedule: Vec::new(),
        }
    }

    pub fn facility(&self) -> &FacilityProfile {
        &self.facility
    }

    pub fn facility_mut(&mut self) -> &mut FacilityProfile {
        &mut self.facility
    }

    pub fn schedule(&self) -> &[EquipmentEntry] {
        &self.schedule
    }

    /// Adds the draft to the schedule if it is complete.
    ///
    /// Incomplete drafts are ignored; returns whether an entry was added.
    pub fn add_equipment(&mut self, draft: &EquipmentDraft) -> bool {
        match draft.admit() {
            Some(entry) => {
                self.schedule.push(entry);
                true
            }
            None => {
                tracing::debug!(name = %draft.name, "ignoring incomplete equipment draft");
                false
            }
        }
    }

    pub fn add_entry(&mut self, entry: EquipmentEntry) {
        self.schedule.push(entry);
    }

    /// Removes the entry at `index`; out-of-range indices leave the schedule unchanged.
    pub fn remove_equipment(&mut self, index: usize) -> Option<EquipmentEntry> {
        if index >= self.schedule.len() {
            return None;
        }
        let removed = self.schedule.remove(index);
        tracing::info!(index, name = removed.name(), "removed equipment");
        Some(removed)
    }

    /// Computes loads and system sizing for the current state.
    pub fn estimate(&self, backup_hours: f64) -> Estimate {
        let rows: Vec<ScheduleRow> = self
            .schedule
            .iter()
            .map(|entry| ScheduleRow {
                entry: entry.clone(),
                daily_kwh: daily_kwh(entry),
            })
            .collect();
        let load = LoadSummary::from_daily(rows.iter().map(|r| r.daily_kwh).sum());
        let irradiance = annual_irradiance(&self.facility.zip_code);
        let fraction = offset_fraction(Some(self.facility.desired_solar_pct.as_str()));
        let sizing = size_from_daily(load.daily_kwh, irradiance, fraction, backup_hours);

        Estimate {
            zip_code: self.facility.zip_code.clone(),
            desired_solar_pct: self.facility.desired_solar_pct.clone(),
            irradiance,
            offset_fraction: fraction,
            backup_hours,
            rows,
            load,
            sizing,
        }
    }
}
