//! HTTP request handlers for the congestion tax engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{chargeable_passages, is_exempt_vehicle, total_fee};
use crate::models::{FeeCalculationResult, FeeTotals, Vehicle};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the computed toll fee.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fee calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let vehicle: Option<Vehicle> = request.vehicle.map(Into::into);
    let config = state.config().config();

    // Perform the calculation
    let start_time = Instant::now();
    match total_fee(vehicle.as_ref(), &request.passages, config) {
        Ok(fee) => {
            let duration = start_time.elapsed();
            let vehicle_exempt = vehicle
                .as_ref()
                .is_some_and(|v| is_exempt_vehicle(&v.vehicle_type, config.vehicles()));
            let passages_chargeable = chargeable_passages(&request.passages, config).len() as u32;

            info!(
                correlation_id = %correlation_id,
                vehicle_type = vehicle.as_ref().map(|v| v.vehicle_type.as_str()),
                passages_total = request.passages.len(),
                passages_chargeable,
                total_fee = fee,
                duration_us = duration.as_micros(),
                "Fee calculation completed successfully"
            );

            let result = FeeCalculationResult {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                zone: config.metadata().code.clone(),
                vehicle_type: vehicle.map(|v| v.vehicle_type),
                vehicle_exempt,
                totals: FeeTotals {
                    total_fee: fee,
                    currency: config.tariff().currency.clone(),
                    passages_total: request.passages.len() as u32,
                    passages_chargeable,
                },
                duration_us: duration.as_micros() as u64,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Fee calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
