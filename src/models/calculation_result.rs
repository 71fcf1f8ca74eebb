//! Result types for a fee calculation.
//!
//! This module defines the envelope returned for each calculation, carrying
//! the total fee alongside identifying and diagnostic information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Passage counts and the computed total for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTotals {
    /// The total fee across all charged days.
    pub total_fee: u32,
    /// The currency the fee is denominated in.
    pub currency: String,
    /// How many passages were supplied in the request.
    pub passages_total: u32,
    /// How many passages survived date and time-band filtering.
    pub passages_chargeable: u32,
}

/// The result of a fee calculation.
///
/// Wraps the computed total with a correlation ID, the engine version,
/// and timing information for observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this result.
    pub engine_version: String,
    /// The zone code the fee was computed for.
    pub zone: String,
    /// The vehicle type tag, if a vehicle was supplied.
    pub vehicle_type: Option<String>,
    /// Whether the vehicle category was exempt from the toll.
    pub vehicle_exempt: bool,
    /// The computed totals.
    pub totals: FeeTotals,
    /// How long the calculation took, in microseconds.
    pub duration_us: u64,
}
