//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use load_calc::api::{AppState, router};

fn app() -> axum::Router {
    router(Arc::new(AppState {
        default_backup_hours: 4.0,
    }))
}

async fn send(req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_estimate(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/estimate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn equipment_endpoint_lists_sorted_catalog() {
    let req = Request::builder()
        .uri("/equipment")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;

    assert_eq!(status, StatusCode::OK);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 13);
    assert_eq!(items[0]["name"], "Compressor");
    assert_eq!(items[0]["typical_power_watts"], 2200.0);
}

#[tokio::test]
async fn irradiance_endpoint_reports_match() {
    let req = Request::builder()
        .uri("/irradiance?zip=940165551")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["irradiance"], 1700.0);
    assert_eq!(json["matched"], true);

    let req = Request::builder()
        .uri("/irradiance")
        .body(Body::empty())
        .unwrap();
    let (_, json) = send(req).await;
    assert_eq!(json["irradiance"], 1500.0);
    assert_eq!(json["matched"], false);
}

#[tokio::test]
async fn estimate_reference_figures() {
    let req = post_estimate(serde_json::json!({
        "zip_code": "94016",
        "desired_solar_pct": 50,
        "equipment": [
            { "name": "Heater", "quantity": 1, "power_watts": 1000.0, "daily_hours": 10.0 }
        ]
    }));
    let (status, json) = send(req).await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["load"]["daily_kwh"].as_f64().unwrap() - 10.0).abs() < 1e-9);
    assert!((json["load"]["annual_kwh"].as_f64().unwrap() - 3650.0).abs() < 1e-9);
    assert!((json["sizing"]["pv_size_kw"].as_f64().unwrap() - 1.180_882).abs() < 1e-5);
    assert!((json["sizing"]["annual_pv_output_kwh"].as_f64().unwrap() - 2007.5).abs() < 1e-6);
    assert!((json["sizing"]["battery_size_kwh"].as_f64().unwrap() - 0.833_333).abs() < 1e-5);
    assert_eq!(json["rows"][0]["name"], "Heater");
    assert_eq!(json["rejected_rows"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn estimate_skips_incomplete_rows() {
    let req = post_estimate(serde_json::json!({
        "zip_code": "60601",
        "desired_solar_pct": "80",
        "backup_hours": 8.0,
        "equipment": [
            { "catalog": "Lights", "quantity": 10, "daily_hours": 10.0 },
            { "name": "Mystery" },
            { "catalog": "Dryer", "quantity": 0, "daily_hours": 1.0 }
        ]
    }));
    let (status, json) = send(req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rejected_rows"], serde_json::json!([1, 2]));
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["backup_hours"], 8.0);
    assert!((json["load"]["daily_kwh"].as_f64().unwrap() - 6.0).abs() < 1e-9);
}

#[tokio::test]
async fn estimate_requires_zip() {
    let req = post_estimate(serde_json::json!({
        "zip_code": "  ",
        "desired_solar_pct": 50
    }));
    let (status, json) = send(req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("ZIP code"));
}

#[tokio::test]
async fn estimate_rejects_non_positive_backup_hours() {
    let req = post_estimate(serde_json::json!({
        "zip_code": "94016",
        "backup_hours": 0.0
    }));
    let (status, json) = send(req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("backup_hours"));
}
