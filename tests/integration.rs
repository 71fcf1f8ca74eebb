//! Comprehensive integration tests for the congestion tax engine.
//!
//! This test suite covers the calculation scenarios end to end:
//! - Single and multi-passage days
//! - Charge-window maximum selection
//! - Daily cap on multi-day requests
//! - Exempt vehicle categories
//! - Toll-free dates and free time bands
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use toll_engine::api::{AppState, create_router};
use toll_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/gbg").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(vehicle_type: Option<&str>, passages: Vec<&str>) -> Value {
    match vehicle_type {
        Some(tag) => json!({
            "vehicle": { "vehicle_type": tag },
            "passages": passages
        }),
        None => json!({ "passages": passages }),
    }
}

fn assert_total_fee(result: &Value, expected: u64) {
    let actual = result["totals"]["total_fee"].as_u64().unwrap();
    assert_eq!(
        actual, expected,
        "Expected total_fee {}, got {}",
        expected, actual
    );
}

// =============================================================================
// Single-day scenarios
// =============================================================================

#[tokio::test]
async fn test_int_001_single_passage_charges_band_fee() {
    let router = create_router_for_test();
    let request = create_request(Some("Car"), vec!["2023-02-08T07:30:00"]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 22);
    assert_eq!(result["zone"].as_str().unwrap(), "gbg");
    assert_eq!(result["totals"]["currency"].as_str().unwrap(), "SEK");
    assert_eq!(result["totals"]["passages_total"].as_u64().unwrap(), 1);
    assert_eq!(result["totals"]["passages_chargeable"].as_u64().unwrap(), 1);
    assert_eq!(
        result["engine_version"].as_str().unwrap(),
        env!("CARGO_PKG_VERSION")
    );
}

#[tokio::test]
async fn test_int_002_same_window_charges_maximum_not_sum() {
    let router = create_router_for_test();
    let request = create_request(
        Some("Car"),
        vec!["2023-02-08T06:15:00", "2023-02-08T06:45:00"],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 16);
}

#[tokio::test]
async fn test_int_003_two_windows_on_one_day_sum() {
    let router = create_router_for_test();
    let request = create_request(
        Some("Car"),
        vec!["2023-02-08T06:15:00", "2023-02-08T08:10:00"],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 25);
}

#[tokio::test]
async fn test_int_004_band_boundary_prices_as_starting_band() {
    let router = create_router_for_test();
    let request = create_request(Some("Car"), vec!["2023-02-08T07:00:00"]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 22);
}

// =============================================================================
// Multi-day scenarios
// =============================================================================

#[tokio::test]
async fn test_int_005_day_rollover_folds_capped_day() {
    let router = create_router_for_test();
    let request = create_request(
        Some("Car"),
        vec![
            "2023-02-08T06:15:00",
            "2023-02-08T08:10:00",
            "2023-02-09T06:15:00",
        ],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // Day one contributes 9 + 16 = 25, day two its single fee of 9.
    assert_total_fee(&result, 34);
}

#[tokio::test]
async fn test_int_006_daily_cap_limits_expensive_day() {
    let router = create_router_for_test();
    let request = create_request(
        Some("Car"),
        vec![
            "2023-02-08T07:00:00",
            "2023-02-08T15:30:00",
            "2023-02-08T16:31:00",
            "2023-02-09T06:15:00",
        ],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // Day one's three windows sum to 66 but contribute only 60.
    assert_total_fee(&result, 69);
}

#[tokio::test]
async fn test_int_007_unsorted_input_yields_same_total() {
    let sorted = create_request(
        Some("Car"),
        vec![
            "2023-02-08T06:15:00",
            "2023-02-08T08:10:00",
            "2023-02-09T06:15:00",
        ],
    );
    let shuffled = create_request(
        Some("Car"),
        vec![
            "2023-02-09T06:15:00",
            "2023-02-08T06:15:00",
            "2023-02-08T08:10:00",
        ],
    );

    let (_, sorted_result) = post_calculate(create_router_for_test(), sorted).await;
    let (_, shuffled_result) = post_calculate(create_router_for_test(), shuffled).await;

    assert_eq!(
        sorted_result["totals"]["total_fee"],
        shuffled_result["totals"]["total_fee"]
    );
}

// =============================================================================
// Exemptions
// =============================================================================

#[tokio::test]
async fn test_int_008_every_exempt_category_pays_zero() {
    for tag in [
        "Motorbike",
        "Tractor",
        "Emergency",
        "Diplomat",
        "Foreign",
        "Military",
    ] {
        let router = create_router_for_test();
        let request = create_request(
            Some(tag),
            vec!["2023-02-08T07:30:00", "2023-02-09T07:30:00"],
        );

        let (status, result) = post_calculate(router, request).await;

        assert_eq!(status, StatusCode::OK, "{} should be accepted", tag);
        assert_total_fee(&result, 0);
        assert!(
            result["vehicle_exempt"].as_bool().unwrap(),
            "{} should be exempt",
            tag
        );
    }
}

#[tokio::test]
async fn test_int_009_absent_vehicle_is_charged() {
    let router = create_router_for_test();
    let request = create_request(None, vec!["2023-02-08T07:30:00"]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 22);
    assert!(result["vehicle_type"].is_null());
    assert!(!result["vehicle_exempt"].as_bool().unwrap());
}

#[tokio::test]
async fn test_int_010_weekend_and_holiday_passages_filtered() {
    let router = create_router_for_test();
    // Saturday, July, and Christmas Day passages around one chargeable Wednesday
    let request = create_request(
        Some("Car"),
        vec![
            "2023-02-11T07:30:00",
            "2023-07-12T07:30:00",
            "2023-12-25T07:30:00",
            "2023-02-08T07:30:00",
        ],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 22);
    assert_eq!(result["totals"]["passages_total"].as_u64().unwrap(), 4);
    assert_eq!(result["totals"]["passages_chargeable"].as_u64().unwrap(), 1);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_int_011_all_free_passages_return_400() {
    let router = create_router_for_test();
    let request = create_request(
        Some("Car"),
        vec!["2023-02-11T07:30:00", "2023-02-08T03:00:00"],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "NO_CHARGEABLE_PASSAGES");
}

#[tokio::test]
async fn test_int_012_empty_passage_list_returns_400() {
    let router = create_router_for_test();
    let request = create_request(Some("Car"), vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "NO_CHARGEABLE_PASSAGES");
}

#[tokio::test]
async fn test_int_013_exempt_vehicle_with_empty_passages_is_ok() {
    // Exemption is decided before passage filtering, so an exempt vehicle
    // with no passages still gets a zero-fee result.
    let router = create_router_for_test();
    let request = create_request(Some("Motorbike"), vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_total_fee(&result, 0);
}

#[tokio::test]
async fn test_int_014_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"].as_str().unwrap(), "MALFORMED_JSON");
}

#[tokio::test]
async fn test_int_015_missing_passages_field_returns_400() {
    let router = create_router_for_test();
    let request = json!({ "vehicle": { "vehicle_type": "Car" } });

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = result["message"].as_str().unwrap();
    assert!(
        message.contains("missing field") || message.to_lowercase().contains("passages"),
        "Expected error message to mention the missing field, got: {}",
        message
    );
}
