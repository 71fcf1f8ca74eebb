//! Time-of-day fee lookup.
//!
//! This module resolves a time of day to its toll fee via the zone's
//! fixed schedule of half-open fee bands.

use chrono::NaiveTime;

use crate::config::Tariff;

/// Returns the fee for the band containing `time`, or 0 outside all bands.
///
/// Each band covers the half-open interval `[start, end)`, so a passage
/// exactly on a boundary belongs to the band starting at that boundary,
/// never the one ending there. The loader guarantees the bands are ordered
/// and non-overlapping, so at most one band can match.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveTime;
/// use toll_engine::calculation::fee_at;
/// use toll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gbg").unwrap();
/// let tariff = loader.config().tariff();
///
/// let rush_hour = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
/// assert_eq!(fee_at(rush_hour, tariff), 22);
///
/// let night = NaiveTime::from_hms_opt(3, 0, 0).unwrap();
/// assert_eq!(fee_at(night, tariff), 0);
/// ```
pub fn fee_at(time: NaiveTime, tariff: &Tariff) -> u32 {
    tariff
        .bands
        .iter()
        .find(|band| band.start <= time && time < band.end)
        .map(|band| band.fee)
        .unwrap_or(0)
}
