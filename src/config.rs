//! TOML facility files, built-in presets and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::equipment::{EquipmentDraft, prefill_from_catalog};
use crate::session::{FacilityProfile, Session};
use crate::sizing::DEFAULT_BACKUP_HOURS;

/// Top-level facility configuration parsed from TOML.
///
/// All sections are optional. Load with [`FacilityConfig::from_toml_file`]
/// or start from one of the [`FacilityConfig::PRESETS`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacilityConfig {
    /// Location and solar target.
    #[serde(default)]
    pub facility: FacilitySection,
    /// Sizing parameters.
    #[serde(default)]
    pub sizing: SizingSection,
    /// Equipment schedule, in display order.
    #[serde(default)]
    pub equipment: Vec<EquipmentSpec>,
}

/// `[facility]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilitySection {
    /// Street address (informational).
    pub address: String,
    /// ZIP code used for the irradiance lookup.
    pub zip_code: String,
    /// Desired solar percent; number or string, blank means 0.
    pub desired_solar_pct: PercentInput,
}

/// A percentage typed either as a TOML number or as free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PercentInput {
    Number(f64),
    Text(String),
}

impl Default for PercentInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl PercentInput {
    /// The value as form text, ready for offset normalization.
    pub fn as_raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// `[sizing]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizingSection {
    /// Hours of battery autonomy (must be > 0).
    pub backup_hours: f64,
}

impl Default for SizingSection {
    fn default() -> Self {
        Self {
            backup_hours: DEFAULT_BACKUP_HOURS,
        }
    }
}

/// One `[[equipment]]` row.
///
/// `catalog` pre-fills name and power from the standard equipment list;
/// explicit `name` and `power_watts` override the catalog values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EquipmentSpec {
    pub catalog: Option<String>,
    pub name: Option<String>,
    /// Unit count; defaults to 1.
    pub quantity: Option<u32>,
    pub power_watts: Option<f64>,
    /// Hours per day; values above 24 are capped.
    pub daily_hours: Option<f64>,
}

impl EquipmentSpec {
    /// Catalog-backed row.
    pub fn catalog(name: &str, quantity: u32, daily_hours: f64) -> Self {
        Self {
            catalog: Some(name.to_string()),
            quantity: Some(quantity),
            daily_hours: Some(daily_hours),
            ..Self::default()
        }
    }

    /// Builds a draft from the row without validating it.
    ///
    /// Unknown catalog names leave the draft's name and power unset.
    pub fn draft(&self) -> EquipmentDraft {
        let mut draft = EquipmentDraft::default();
        if let Some(prefill) = self.catalog.as_deref().and_then(prefill_from_catalog) {
            draft.apply_prefill(prefill);
        }
        if let Some(ref name) = self.name {
            draft.name.clone_from(name);
        }
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(watts) = self.power_watts {
            draft.power_watts = Some(watts);
        }
        if let Some(hours) = self.daily_hours {
            draft.set_daily_hours(hours);
        }
        draft
    }

    /// Resolves the row into a draft, reporting problems under `path`.
    fn to_draft(&self, path: &str) -> Result<EquipmentDraft, Vec<ConfigError>> {
        let draft = self.draft();
        let mut errors = Vec::new();
        let catalog_missing = self
            .catalog
            .as_deref()
            .is_some_and(|item| prefill_from_catalog(item).is_none());

        if catalog_missing {
            errors.push(ConfigError::new(
                format!("{path}.catalog"),
                format!(
                    "unknown catalog item \"{}\"",
                    self.catalog.as_deref().unwrap_or_default()
                ),
            ));
        }

        if draft.name.trim().is_empty() && !catalog_missing {
            errors.push(ConfigError::new(
                format!("{path}.name"),
                "required unless a catalog item is given",
            ));
        }
        if draft.quantity == 0 {
            errors.push(ConfigError::new(format!("{path}.quantity"), "must be >= 1"));
        }
        if !draft.power_watts.is_some_and(|w| w.is_finite() && w > 0.0) && !catalog_missing {
            errors.push(ConfigError::new(
                format!("{path}.power_watts"),
                "must be > 0 (or given by a catalog item)",
            ));
        }
        if !draft.daily_hours().is_some_and(|h| h.is_finite() && h > 0.0) {
            errors.push(ConfigError::new(
                format!("{path}.daily_hours"),
                "must be > 0",
            ));
        }

        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Field path (e.g., `"equipment[2].daily_hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl FacilityConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["empty", "office", "workshop"];

    /// No location and no equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Small San Francisco office aiming for 60% solar.
    pub fn office() -> Self {
        Self {
            facility: FacilitySection {
                address: "1 Market St, San Francisco, CA".to_string(),
                zip_code: "94016".to_string(),
                desired_solar_pct: PercentInput::Number(60.0),
            },
            sizing: SizingSection::default(),
            equipment: vec![
                EquipmentSpec::catalog("Computer", 10, 8.0),
                EquipmentSpec::catalog("Lights", 40, 10.0),
                EquipmentSpec::catalog("Printer", 2, 4.0),
                EquipmentSpec::catalog("Refrigerator", 1, 24.0),
                EquipmentSpec::catalog("Split AC Unit", 2, 8.0),
            ],
        }
    }

    /// Denver workshop targeting full solar offset with longer backup.
    pub fn workshop() -> Self {
        Self {
            facility: FacilitySection {
                address: "1600 Broadway, Denver, CO".to_string(),
                zip_code: "80202".to_string(),
                desired_solar_pct: PercentInput::Number(100.0),
            },
            sizing: SizingSection { backup_hours: 6.0 },
            equipment: vec![
                EquipmentSpec::catalog("Compressor", 2, 6.0),
                EquipmentSpec::catalog("Lights", 20, 12.0),
                EquipmentSpec::catalog("Exhaust Fan", 4, 10.0),
                EquipmentSpec::catalog("Rooftop AC", 1, 8.0),
                EquipmentSpec {
                    name: Some("Welder".to_string()),
                    quantity: Some(1),
                    power_watts: Some(5000.0),
                    daily_hours: Some(2.0),
                    ..EquipmentSpec::default()
                },
            ],
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "empty" => Ok(Self::empty()),
            "office" => Ok(Self::office()),
            "workshop" => Ok(Self::workshop()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("facility", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let hours = self.sizing.backup_hours;
        if !hours.is_finite() || hours <= 0.0 {
            errors.push(ConfigError::new("sizing.backup_hours", "must be > 0"));
        }

        for (i, spec) in self.equipment.iter().enumerate() {
            if let Err(mut errs) = spec.to_draft(&format!("equipment[{i}]")) {
                errors.append(&mut errs);
            }
        }

        errors
    }

    /// The facility profile described by the `[facility]` section.
    pub fn facility_profile(&self) -> FacilityProfile {
        FacilityProfile {
            address: self.facility.address.clone(),
            zip_code: self.facility.zip_code.clone(),
            desired_solar_pct: self.facility.desired_solar_pct.as_raw(),
        }
    }

    /// Validates the configuration and builds a session from it.
    ///
    /// # Errors
    ///
    /// Returns every validation error if any equipment row or sizing
    /// parameter is invalid.
    pub fn build_session(&self) -> Result<Session, Vec<ConfigError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut session = Session::new(self.facility_profile());
        for (i, spec) in self.equipment.iter().enumerate() {
            let draft = spec.to_draft(&format!("equipment[{i}]"))?;
            if !session.add_equipment(&draft) {
                return Err(vec![ConfigError::new(
                    format!("equipment[{i}]"),
                    "rejected by schedule",
                )]);
            }
        }
        Ok(session)
    }
}
