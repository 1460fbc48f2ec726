//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{
    ErrorResponse, EstimateRequest, EstimateResponse, IrradianceQuery, IrradianceResponse,
};
use crate::equipment::{EquipmentCatalogItem, standard_equipment};
use crate::irradiance::{IrradianceTable, annual_irradiance};
use crate::session::{FacilityProfile, Session};

/// Returns the standard equipment catalog, sorted by name.
///
/// `GET /equipment` → 200 + `Vec<EquipmentCatalogItem>` JSON
pub async fn get_equipment() -> Json<&'static [EquipmentCatalogItem]> {
    Json(standard_equipment())
}

/// Returns the irradiance for a ZIP code.
///
/// `GET /irradiance?zip=94016` → 200 + `IrradianceResponse` JSON
pub async fn get_irradiance(Query(query): Query<IrradianceQuery>) -> Json<IrradianceResponse> {
    let matched = IrradianceTable::global().lookup(&query.zip).is_some();
    Json(IrradianceResponse {
        irradiance: annual_irradiance(&query.zip),
        zip: query.zip,
        matched,
    })
}

/// Computes loads and sizing for the posted facility and schedule.
///
/// `POST /estimate` → 200 + `EstimateResponse` JSON
/// blank `zip_code` or non-positive `backup_hours` → 400 + `ErrorResponse`
///
/// Incomplete equipment rows are skipped and listed in `rejected_rows`.
pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EstimateRequest>,
) -> impl IntoResponse {
    let facility = FacilityProfile {
        address: req.address,
        zip_code: req.zip_code,
        desired_solar_pct: req.desired_solar_pct.as_raw(),
    };
    if !facility.has_location() {
        return Err(bad_request(
            "ZIP code is required to determine solar system size",
        ));
    }

    let backup_hours = req.backup_hours.unwrap_or(state.default_backup_hours);
    if !backup_hours.is_finite() || backup_hours <= 0.0 {
        return Err(bad_request(format!(
            "`backup_hours` must be > 0, got {backup_hours}"
        )));
    }

    let mut session = Session::new(facility);
    let rejected_rows: Vec<usize> = req
        .equipment
        .iter()
        .enumerate()
        .filter_map(|(i, spec)| (!session.add_equipment(&spec.draft())).then_some(i))
        .collect();

    Ok(Json(EstimateResponse {
        estimate: session.estimate(backup_hours),
        rejected_rows,
    }))
}

fn bad_request(error: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}
