//! Vehicle category exemption lookup.

use crate::config::ExemptVehicles;

/// Returns whether a vehicle type tag is exempt from the toll.
///
/// Matching is case-exact against the configured set: "Motorbike" is
/// exempt, "motorbike" is not. Unknown and empty tags are non-exempt.
///
/// # Example
///
/// ```no_run
/// use toll_engine::calculation::is_exempt_vehicle;
/// use toll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gbg").unwrap();
/// let vehicles = loader.config().vehicles();
///
/// assert!(is_exempt_vehicle("Motorbike", vehicles));
/// assert!(!is_exempt_vehicle("Car", vehicles));
/// ```
pub fn is_exempt_vehicle(vehicle_type: &str, vehicles: &ExemptVehicles) -> bool {
    vehicles.exempt_types.contains(vehicle_type)
}
