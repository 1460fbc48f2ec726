//! Equipment catalog, schedule entries and the draft row they are built from.

use std::cmp::Ordering;
use std::sync::LazyLock;

use serde::Serialize;

/// Maximum hours per day a unit can operate.
pub const MAX_DAILY_HOURS: f64 = 24.0;

static CATALOG: LazyLock<Vec<EquipmentCatalogItem>> = LazyLock::new(|| {
    let mut items: Vec<EquipmentCatalogItem> = [
        ("Computer", 200.0),
        ("Compressor", 2200.0),
        ("Dryer", 3000.0),
        ("ERV Unit", 800.0),
        ("Exhaust Fan", 250.0),
        ("Freezer", 800.0),
        ("Furnace", 1800.0),
        ("Lights", 60.0),
        ("Printer", 50.0),
        ("Refrigerator", 750.0),
        ("Rooftop AC", 4500.0),
        ("Split AC Unit", 3500.0),
        ("Washer", 500.0),
    ]
    .into_iter()
    .map(|(name, typical_power_watts)| EquipmentCatalogItem {
        name,
        typical_power_watts,
    })
    .collect();
    items.sort_by(|a, b| compare_names(a.name, b.name));
    items
});

/// Case-insensitive name ordering with a byte-order tie break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Reference equipment with a typical rated power draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentCatalogItem {
    /// Unique display name.
    pub name: &'static str,
    /// Typical power draw per unit (W).
    pub typical_power_watts: f64,
}

/// Catalog data used to pre-populate a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentPrefill {
    pub name: String,
    pub power_watts: f64,
}

/// The standard equipment catalog, sorted by name.
pub fn standard_equipment() -> &'static [EquipmentCatalogItem] {
    &CATALOG
}

/// Name and typical power for a catalog item.
///
/// Returns `None` for names not in the catalog, including the empty
/// placeholder selection.
pub fn prefill_from_catalog(name: &str) -> Option<EquipmentPrefill> {
    CATALOG
        .iter()
        .find(|item| item.name == name)
        .map(|item| EquipmentPrefill {
            name: item.name.to_string(),
            power_watts: item.typical_power_watts,
        })
}

/// One line item in the load schedule.
///
/// Every constructed entry satisfies `quantity >= 1`, `power_watts > 0`,
/// `0 < daily_hours <= 24` and has a non-empty name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentEntry {
    name: String,
    quantity: u32,
    power_watts: f64,
    daily_hours: f64,
}

impl EquipmentEntry {
    /// Creates an entry, returning `None` if any field violates the
    /// schedule invariant.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        power_watts: f64,
        daily_hours: f64,
    ) -> Option<Self> {
        let name = name.into();
        let valid = !name.trim().is_empty()
            && quantity >= 1
            && power_watts.is_finite()
            && power_watts > 0.0
            && daily_hours.is_finite()
            && daily_hours > 0.0
            && daily_hours <= MAX_DAILY_HOURS;
        valid.then_some(Self {
            name,
            quantity,
            power_watts,
            daily_hours,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Rated power per unit (W).
    pub fn power_watts(&self) -> f64 {
        self.power_watts
    }

    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }
}

/// Transient, possibly incomplete entry being edited before it is added.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentDraft {
    pub name: String,
    pub quantity: u32,
    pub power_watts: Option<f64>,
    daily_hours: Option<f64>,
}

impl Default for EquipmentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            power_watts: None,
            daily_hours: None,
        }
    }
}

impl EquipmentDraft {
    /// Draft with name, quantity and power filled in; hours still unset.
    pub fn new(name: impl Into<String>, quantity: u32, power_watts: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            power_watts: Some(power_watts),
            daily_hours: None,
        }
    }

    /// Sets daily operating hours, capped at [`MAX_DAILY_HOURS`].
    ///
    /// NaN is stored as-is so that [`admit`](Self::admit) rejects it.
    pub fn set_daily_hours(&mut self, hours: f64) {
        let hours = if hours.is_nan() {
            hours
        } else {
            hours.min(MAX_DAILY_HOURS)
        };
        self.daily_hours = Some(hours);
    }

    pub fn daily_hours(&self) -> Option<f64> {
        self.daily_hours
    }

    /// Copies catalog name and power into the draft; quantity and hours are kept.
    pub fn apply_prefill(&mut self, prefill: EquipmentPrefill) {
        self.name = prefill.name;
        self.power_watts = Some(prefill.power_watts);
    }

    /// Converts the draft into a schedule entry if every field is present
    /// and positive.
    pub fn admit(&self) -> Option<EquipmentEntry> {
        EquipmentEntry::new(
            self.name.clone(),
            self.quantity,
            self.power_watts?,
            self.daily_hours?,
        )
    }
}
