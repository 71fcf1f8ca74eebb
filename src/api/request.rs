//! Request types for the congestion tax engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

/// Request body for the `/calculate` endpoint.
///
/// Contains the vehicle (if known) and its entry timestamps into the
/// toll zone. An absent vehicle is charged like any non-exempt category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The vehicle the passages belong to.
    #[serde(default)]
    pub vehicle: Option<VehicleRequest>,
    /// Entry timestamps into the toll zone, in any order.
    pub passages: Vec<NaiveDateTime>,
}

/// Vehicle information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRequest {
    /// The vehicle category tag (e.g., "Motorbike", "Tractor").
    pub vehicle_type: String,
    /// The registration plate, if known.
    #[serde(default)]
    pub registration: Option<String>,
}

impl From<VehicleRequest> for Vehicle {
    fn from(req: VehicleRequest) -> Self {
        Vehicle {
            vehicle_type: req.vehicle_type,
            registration: req.registration,
        }
    }
}
