//! Toll-free date lookup.
//!
//! This module decides whether a calendar date is toll-free, combining the
//! weekend rule with the zone's configured per-month exempt dates.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::config::TollCalendar;

/// Returns whether a date is toll-free.
///
/// Saturdays and Sundays are always toll-free. Other days are checked
/// against the configured calendar: a month may be exempt in its entirety
/// or list individual exempt days.
///
/// A month missing from the calendar is a configuration gap: it is
/// reported via `tracing::warn!` and treated as chargeable, so a broken
/// calendar degrades accuracy without aborting a calculation.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use toll_engine::calculation::is_toll_free_date;
/// use toll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gbg").unwrap();
/// let calendar = loader.config().calendar();
///
/// // 2023-01-07 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2023, 1, 7).unwrap();
/// assert!(is_toll_free_date(saturday, calendar));
///
/// // 2023-02-08 is an ordinary Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2023, 2, 8).unwrap();
/// assert!(!is_toll_free_date(wednesday, calendar));
/// ```
pub fn is_toll_free_date(date: NaiveDate, calendar: &TollCalendar) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return true;
    }

    match calendar.month(date.month()) {
        Some(rule) => rule.toll_free || rule.days.contains(&date.day()),
        None => {
            warn!(
                month = date.month(),
                year = calendar.year,
                "month missing from toll calendar, treating date as chargeable"
            );
            false
        }
    }
}
