//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::config::{EquipmentSpec, PercentInput};
use crate::report::Estimate;

/// Query parameters for the irradiance endpoint.
#[derive(Debug, Deserialize)]
pub struct IrradianceQuery {
    #[serde(default)]
    pub zip: String,
}

/// Irradiance lookup result.
#[derive(Debug, Serialize, Deserialize)]
pub struct IrradianceResponse {
    pub zip: String,
    /// Annual irradiance used for sizing (kWh/kW/yr).
    pub irradiance: f64,
    /// False when the default value was substituted.
    pub matched: bool,
}

/// Body of `POST /estimate`.
///
/// Equipment rows use the same fields as `[[equipment]]` in facility files.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateRequest {
    #[serde(default)]
    pub address: String,
    pub zip_code: String,
    #[serde(default)]
    pub desired_solar_pct: PercentInput,
    pub backup_hours: Option<f64>,
    #[serde(default)]
    pub equipment: Vec<EquipmentSpec>,
}

/// Estimate plus the indices of request rows that were not admitted.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub estimate: Estimate,
    pub rejected_rows: Vec<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
