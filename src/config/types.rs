//! Configuration types for the congestion tax engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveTime;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, EngineResult};

/// Metadata about the toll zone.
///
/// Contains identifying information about the zone, including its
/// code, name, tariff version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneMetadata {
    /// The short zone code (e.g., "gbg").
    pub code: String,
    /// The human-readable name of the zone.
    pub name: String,
    /// The version or tariff year of the zone configuration.
    pub version: String,
    /// URL to the official tariff documentation.
    pub source_url: String,
}

/// Exempt vehicle categories from vehicles.yaml.
///
/// A vehicle whose type tag is in this set pays no toll at all.
/// Matching is case-exact; unknown tags are simply not exempt.
#[derive(Debug, Clone, Deserialize)]
pub struct ExemptVehicles {
    /// The closed set of exempt vehicle type tags.
    pub exempt_types: HashSet<String>,
}

/// A single fee band in the time-of-day tariff.
///
/// The band covers the half-open interval `[start, end)`: a passage
/// exactly at `start` belongs to this band, a passage exactly at `end`
/// does not.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeBand {
    /// Inclusive start of the band.
    pub start: NaiveTime,
    /// Exclusive end of the band.
    pub end: NaiveTime,
    /// The fee charged for a passage within the band.
    pub fee: u32,
}

/// The time-of-day tariff for the zone.
#[derive(Debug, Clone, Deserialize)]
pub struct Tariff {
    /// The currency the fees are denominated in.
    pub currency: String,
    /// The maximum total fee charged for a single calendar day.
    pub daily_cap: u32,
    /// The length of a charge window in minutes.
    pub window_minutes: i64,
    /// Fee bands in ascending order, non-overlapping.
    pub bands: Vec<FeeBand>,
}

impl Tariff {
    /// Checks the schedule invariants: every band is non-empty, and the
    /// bands are listed in ascending order without overlap.
    pub fn validate(&self) -> EngineResult<()> {
        for band in &self.bands {
            if band.start >= band.end {
                return Err(EngineError::InvalidTariff {
                    message: format!("band starting at {} is empty or reversed", band.start),
                });
            }
        }
        for pair in self.bands.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(EngineError::InvalidTariff {
                    message: format!("bands overlap at {}", pair[1].start),
                });
            }
        }
        Ok(())
    }
}

/// Tariff configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffConfig {
    /// The time-of-day tariff.
    pub tariff: Tariff,
}

/// Toll-free rules for a single month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthRule {
    /// Whether the whole month is toll-free.
    #[serde(default)]
    pub toll_free: bool,
    /// Days of the month that are toll-free.
    #[serde(default)]
    pub days: Vec<u32>,
}

/// The toll-free calendar for one year.
///
/// Saturdays and Sundays are always toll-free and are not listed here.
#[derive(Debug, Clone, Deserialize)]
pub struct TollCalendar {
    /// The calendar year the exempt dates apply to.
    pub year: i32,
    /// Per-month toll-free rules, keyed by month number (1-12).
    pub months: HashMap<u32, MonthRule>,
}

impl TollCalendar {
    /// Looks up the rule for a month number, if the calendar defines one.
    pub fn month(&self, month: u32) -> Option<&MonthRule> {
        self.months.get(&month)
    }
}

/// Calendar configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// The toll-free calendar.
    pub calendar: TollCalendar,
}

/// The complete zone configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a zone configuration directory.
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    /// Zone metadata.
    metadata: ZoneMetadata,
    /// Exempt vehicle categories.
    vehicles: ExemptVehicles,
    /// The time-of-day tariff.
    tariff: Tariff,
    /// The toll-free calendar.
    calendar: TollCalendar,
}

impl ZoneConfig {
    /// Creates a new zone configuration from its parts.
    pub fn new(
        metadata: ZoneMetadata,
        vehicles: ExemptVehicles,
        tariff: Tariff,
        calendar: TollCalendar,
    ) -> Self {
        Self {
            metadata,
            vehicles,
            tariff,
            calendar,
        }
    }

    /// Returns the zone metadata.
    pub fn metadata(&self) -> &ZoneMetadata {
        &self.metadata
    }

    /// Returns the exempt vehicle categories.
    pub fn vehicles(&self) -> &ExemptVehicles {
        &self.vehicles
    }

    /// Returns the time-of-day tariff.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Returns the toll-free calendar.
    pub fn calendar(&self) -> &TollCalendar {
        &self.calendar
    }
}
