//! Configuration loading and management for the Leave Calculation Engine.
//!
//! This module provides functionality to load jurisdiction configuration
//! from YAML files: the holiday calendar (weekend definition, fixed
//! holidays, per-year variable holiday tables) and the leave entitlement
//! rules.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/jordan").unwrap();
//! println!("Loaded calendar for {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarConfig, DayOfWeek, EntitlementRule, EntitlementTier, EntitlementsConfig, FixedHoliday,
    JurisdictionMetadata, VariableHolidayEntry, YearHolidays,
};
