//! HTTP API module for the congestion tax engine.
//!
//! This module provides the REST API endpoints for calculating toll fees
//! for a vehicle's passages into the zone.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, VehicleRequest};
pub use response::ApiError;
pub use state::AppState;
