//! Configuration loading and management for the congestion tax engine.
//!
//! This module provides functionality to load zone configurations from YAML
//! files, including zone metadata, exempt vehicle categories, the time-of-day
//! tariff, and the toll-free calendar.
//!
//! # Example
//!
//! ```no_run
//! use toll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/gbg").unwrap();
//! println!("Loaded zone: {}", config.zone().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarConfig, ExemptVehicles, FeeBand, MonthRule, Tariff, TariffConfig, TollCalendar,
    ZoneConfig, ZoneMetadata,
};
