//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading zone
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CalendarConfig, ExemptVehicles, TariffConfig, ZoneConfig, ZoneMetadata,
};

/// Loads and provides access to a zone configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the tariff schedule before handing out the loaded
/// [`ZoneConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gbg/
/// ├── zone.yaml      # Zone metadata
/// ├── vehicles.yaml  # Exempt vehicle categories
/// ├── tariff.yaml    # Time-of-day fee bands and daily cap
/// └── calendar.yaml  # Toll-free dates
/// ```
///
/// # Example
///
/// ```no_run
/// use toll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gbg").unwrap();
/// println!("Loaded zone: {}", loader.zone().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ZoneConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/gbg")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tariff bands are empty, reversed, unordered, or overlapping
    ///
    /// # Example
    ///
    /// ```no_run
    /// use toll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/gbg")?;
    /// # Ok::<(), toll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load zone.yaml
        let zone_path = path.join("zone.yaml");
        let metadata = Self::load_yaml::<ZoneMetadata>(&zone_path)?;

        // Load vehicles.yaml
        let vehicles_path = path.join("vehicles.yaml");
        let vehicles = Self::load_yaml::<ExemptVehicles>(&vehicles_path)?;

        // Load tariff.yaml
        let tariff_path = path.join("tariff.yaml");
        let tariff_config = Self::load_yaml::<TariffConfig>(&tariff_path)?;
        tariff_config.tariff.validate()?;

        // Load calendar.yaml
        let calendar_path = path.join("calendar.yaml");
        let calendar_config = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        let config = ZoneConfig::new(
            metadata,
            vehicles,
            tariff_config.tariff,
            calendar_config.calendar,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying zone configuration.
    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Returns the zone metadata.
    pub fn zone(&self) -> &ZoneMetadata {
        self.config.metadata()
    }
}
