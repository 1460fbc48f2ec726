//! Annual solar irradiance lookup keyed by ZIP code.

use std::sync::LazyLock;

/// Fallback irradiance (kWh per installed kW per year), roughly the US average.
pub const DEFAULT_IRRADIANCE: f64 = 1500.0;

/// Number of leading ZIP characters that are significant for the lookup.
const ZIP_KEY_LEN: usize = 5;

static TABLE: LazyLock<IrradianceTable> = LazyLock::new(IrradianceTable::standard);

/// Static mapping from 5-character ZIP keys to annual irradiance.
///
/// Values are kWh of PV output per kW of installed capacity per year.
#[derive(Debug, Clone)]
pub struct IrradianceTable {
    entries: Vec<IrradianceEntry>,
}

/// One row of the irradiance table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IrradianceEntry {
    /// Five-character ZIP key.
    pub zip: &'static str,
    /// Reference city for the key.
    pub city: &'static str,
    /// Annual irradiance (kWh/kW/yr).
    pub kwh_per_kw: f64,
}

impl IrradianceTable {
    /// Builds the built-in table.
    fn standard() -> Self {
        let rows = [
            ("94016", "San Francisco", 1700.0),
            ("95054", "Santa Clara", 1800.0),
            ("99501", "Anchorage", 1200.0),
            ("33101", "Miami", 1700.0),
            ("80202", "Denver", 1600.0),
            ("90001", "Los Angeles", 1850.0),
            ("60601", "Chicago", 1450.0),
            ("10001", "New York", 1450.0),
        ];
        Self {
            entries: rows
                .into_iter()
                .map(|(zip, city, kwh_per_kw)| IrradianceEntry {
                    zip,
                    city,
                    kwh_per_kw,
                })
                .collect(),
        }
    }

    /// Returns the process-wide table.
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Looks up the irradiance for a ZIP code, considering only its first
    /// five characters.
    ///
    /// Returns `None` when the key is not tabled (including the empty string).
    pub fn lookup(&self, zip: &str) -> Option<f64> {
        let key = zip_key(zip);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.zip == key)
            .map(|e| e.kwh_per_kw)
    }

    /// All tabled rows, in table order.
    pub fn entries(&self) -> &[IrradianceEntry] {
        &self.entries
    }
}

/// Leading five characters of `zip`, or the whole string if shorter.
fn zip_key(zip: &str) -> &str {
    match zip.char_indices().nth(ZIP_KEY_LEN) {
        Some((idx, _)) => &zip[..idx],
        None => zip,
    }
}

/// Annual irradiance for a ZIP code, falling back to [`DEFAULT_IRRADIANCE`].
///
/// Never fails: malformed or unknown input yields the fallback.
///
/// # Examples
///
/// ```
/// use load_calc::irradiance::annual_irradiance;
///
/// assert_eq!(annual_irradiance("940165551"), 1700.0);
/// assert_eq!(annual_irradiance(""), 1500.0);
/// ```
pub fn annual_irradiance(zip: &str) -> f64 {
    match TABLE.lookup(zip) {
        Some(value) => value,
        None => {
            if !zip.is_empty() {
                tracing::debug!(zip, "no irradiance entry, using default");
            }
            DEFAULT_IRRADIANCE
        }
    }
}
