//! Vehicle model.
//!
//! This module defines the Vehicle struct identifying the vehicle whose
//! passages are being charged.

use serde::{Deserialize, Serialize};

/// A vehicle entering the toll zone.
///
/// The engine only cares about the category tag: a vehicle whose tag is in
/// the zone's exempt set pays nothing, every other tag is charged the same
/// way. Unknown tags are valid and simply non-exempt.
///
/// # Examples
///
/// ```
/// use toll_engine::models::Vehicle;
///
/// let vehicle = Vehicle {
///     vehicle_type: "Motorbike".to_string(),
///     registration: Some("ABC 123".to_string()),
/// };
/// assert_eq!(vehicle.vehicle_type, "Motorbike");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// The vehicle category tag (e.g., "Motorbike", "Tractor").
    pub vehicle_type: String,
    /// The registration plate, if known. Informational only.
    #[serde(default)]
    pub registration: Option<String>,
}
