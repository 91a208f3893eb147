//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::EntitlementTable;
use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};

use super::types::{CalendarConfig, EntitlementsConfig, JurisdictionMetadata, YearHolidays};

/// Loads and provides access to jurisdiction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// builds the holiday calendar and entitlement table the calculation
/// modules operate on.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/jordan/
/// ├── calendar.yaml       # Jurisdiction metadata, weekend, fixed holidays
/// ├── entitlements.yaml   # Leave entitlement rules per leave type
/// └── holidays/
///     ├── 2025.yaml       # Curated variable holidays for 2025
///     └── 2026.yaml       # Curated variable holidays for 2026
/// ```
///
/// Years without a file under `holidays/` are served from the fixed-holiday
/// subset at lookup time; adding a new year is a data change, not a code
/// change.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/jordan").unwrap();
///
/// let eid = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
/// assert!(loader.calendar().is_holiday(eid));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    jurisdiction: JurisdictionMetadata,
    calendar: HolidayCalendar,
    entitlements: EntitlementTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/jordan")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `calendar.yaml` or `entitlements.yaml` is missing
    /// - Any file contains invalid YAML
    ///
    /// A missing `holidays/` directory is not an error; the calendar then
    /// serves every year from the fixed-holiday subset.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar_path = path.join("calendar.yaml");
        let calendar_config = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        let entitlements_path = path.join("entitlements.yaml");
        let entitlements_config = Self::load_yaml::<EntitlementsConfig>(&entitlements_path)?;

        let holidays_dir = path.join("holidays");
        let year_holidays = Self::load_year_holidays(&holidays_dir)?;

        let jurisdiction = calendar_config.jurisdiction.clone();
        let calendar = HolidayCalendar::new(calendar_config, year_holidays);
        let entitlements = EntitlementTable::new(entitlements_config.entitlements);

        Ok(Self {
            jurisdiction,
            calendar,
            entitlements,
        })
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

    /// Loads all per-year holiday files from the holidays directory.
    fn load_year_holidays(holidays_dir: &Path) -> EngineResult<Vec<YearHolidays>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let year = Self::load_yaml::<YearHolidays>(&path)?;
                years.push(year);
            }
        }

        Ok(years)
    }

    /// Returns the loaded jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.jurisdiction
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the loaded entitlement table.
    pub fn entitlements(&self) -> &EntitlementTable {
        &self.entitlements
    }
}
