//! Fee aggregation across passages.
//!
//! This module implements the daily charge aggregation: chargeable passages
//! are grouped into 60-minute charge windows per calendar day, each window
//! charges its maximum band fee, a day's windows sum up to the daily cap,
//! and the days sum to the total.

use chrono::{Duration, NaiveDateTime};

use crate::config::ZoneConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::Vehicle;

use super::date_exemption::is_toll_free_date;
use super::time_band::fee_at;
use super::vehicle_exemption::is_exempt_vehicle;

/// Sorts passages chronologically and drops the ones that cannot be charged.
///
/// A passage is chargeable when its date is not toll-free and its time of
/// day falls in a nonzero fee band. The sort is stable, so duplicate
/// timestamps are preserved in their input order.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDateTime;
/// use toll_engine::calculation::chargeable_passages;
/// use toll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gbg").unwrap();
/// let passages = vec![
///     // 2023-02-11 is a Saturday, dropped
///     NaiveDateTime::parse_from_str("2023-02-11 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2023-02-08 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ];
/// let chargeable = chargeable_passages(&passages, loader.config());
/// assert_eq!(chargeable.len(), 1);
/// ```
pub fn chargeable_passages(passages: &[NaiveDateTime], config: &ZoneConfig) -> Vec<NaiveDateTime> {
    let mut sorted = passages.to_vec();
    sorted.sort();
    sorted
        .into_iter()
        .filter(|t| !is_toll_free_date(t.date(), config.calendar()))
        .filter(|t| fee_at(t.time(), config.tariff()) > 0)
        .collect()
}

/// Calculates the total toll fee for a vehicle's passages.
///
/// # Arguments
///
/// * `vehicle` - The vehicle the passages belong to, if known. An absent
///   vehicle is charged like any non-exempt category.
/// * `passages` - Entry timestamps into the toll zone, in any order.
/// * `config` - The loaded zone configuration.
///
/// # Behavior
///
/// - An exempt vehicle category returns 0 immediately, whatever the
///   passages, even an empty list.
/// - Passages are sorted ascending before aggregation; duplicates are kept.
/// - Passages on toll-free dates or in free time bands are dropped. If
///   nothing remains, [`EngineError::NoChargeablePassages`] is returned.
/// - Within one calendar day, passages group into charge windows of
///   `window_minutes` anchored at the first passage of each window. A
///   window charges the maximum band fee observed in it, and a day's
///   closed windows sum up to `daily_cap`.
/// - A day is capped and folded into the total when a later passage opens
///   a new calendar day. The final day instead contributes the last
///   passage's band fee plus its previously closed windows, and does not
///   pass through the cap.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDateTime;
/// use toll_engine::calculation::total_fee;
/// use toll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gbg").unwrap();
/// let passages = vec![
///     NaiveDateTime::parse_from_str("2023-02-08 07:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ];
/// let fee = total_fee(None, &passages, loader.config()).unwrap();
/// assert_eq!(fee, 22);
/// ```
pub fn total_fee(
    vehicle: Option<&Vehicle>,
    passages: &[NaiveDateTime],
    config: &ZoneConfig,
) -> EngineResult<u32> {
    if vehicle.is_some_and(|v| is_exempt_vehicle(&v.vehicle_type, config.vehicles())) {
        return Ok(0);
    }

    let tariff = config.tariff();
    let chargeable = chargeable_passages(passages, config);
    let Some(&first) = chargeable.first() else {
        return Err(EngineError::NoChargeablePassages);
    };

    let window = Duration::minutes(tariff.window_minutes);
    let mut window_anchor = first;
    let mut window_max_fee: u32 = 0;
    let mut day_fee: u32 = 0;
    let mut total: u32 = 0;
    let mut current_fee: u32 = 0;

    for &passage in &chargeable {
        current_fee = fee_at(passage.time(), tariff);

        if passage.date() == window_anchor.date() {
            if passage < window_anchor + window {
                // Same window: only the most expensive passage counts.
                window_max_fee = window_max_fee.max(current_fee);
            } else {
                // New window on the same day.
                day_fee += window_max_fee;
                window_max_fee = current_fee;
                window_anchor = passage;
            }
        } else {
            // New calendar day: close out the previous day, capped.
            day_fee += window_max_fee;
            day_fee = day_fee.min(tariff.daily_cap);
            total += day_fee;
            day_fee = 0;
            window_anchor = passage;
            window_max_fee = current_fee;
        }
    }

    total += current_fee + day_fee;
    Ok(total)
}
