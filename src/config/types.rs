//! Configuration types for the Leave Calculation Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::LeaveType;

/// Metadata about the jurisdiction whose rules are loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// ISO country code (e.g., "JO").
    pub code: String,
    /// Human-readable jurisdiction name.
    pub name: String,
    /// URL of the authoritative holiday source.
    pub source: String,
}

/// A day of the week, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Converts to the chrono weekday used for date arithmetic.
    pub fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

/// A holiday that recurs on the same month and day every year.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedHoliday {
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// Display name of the holiday.
    pub name: String,
    /// Optional localized description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Calendar configuration from calendar.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// The days that make up the weekend (Friday and Saturday in Jordan).
    pub weekend: Vec<DayOfWeek>,
    /// Holidays that recur on the same Gregorian date every year.
    pub fixed_holidays: Vec<FixedHoliday>,
}

/// A variable holiday entry in a per-year holiday file.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableHolidayEntry {
    /// The holiday's date in that year.
    pub date: NaiveDate,
    /// Display name of the holiday.
    pub name: String,
    /// Optional localized description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Curated variable-holiday data for one year, from holidays/&lt;year&gt;.yaml.
///
/// Only years present in the holidays directory have variable data; other
/// years degrade to the fixed-holiday subset at lookup time.
#[derive(Debug, Clone, Deserialize)]
pub struct YearHolidays {
    /// The calendar year the entries belong to.
    pub year: i32,
    /// Variable (lunar/ecclesiastical) holidays for that year, in the order
    /// they should be reported. Duplicate dates are allowed.
    pub holidays: Vec<VariableHolidayEntry>,
}

/// One tenure tier of an entitlement rule.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementTier {
    /// Minimum completed years of service for this tier to apply.
    pub min_years_of_service: u32,
    /// Entitlement in working days at this tier.
    pub days: u32,
}

/// Entitlement rule for a single leave type.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementRule {
    /// Tenure tiers; the highest tier whose minimum is met applies.
    pub tiers: Vec<EntitlementTier>,
    /// Marks the 999-day sentinel as effectively unlimited for display.
    #[serde(default)]
    pub unlimited: bool,
}

impl EntitlementRule {
    /// Returns the entitlement for the given completed years of service.
    ///
    /// With no matching tier (or no tiers at all) the rule degrades to 0
    /// days rather than erroring.
    pub fn days_for(&self, years_of_service: u32) -> u32 {
        self.tiers
            .iter()
            .filter(|tier| tier.min_years_of_service <= years_of_service)
            .max_by_key(|tier| tier.min_years_of_service)
            .map(|tier| tier.days)
            .unwrap_or(0)
    }
}

/// Entitlements configuration from entitlements.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementsConfig {
    /// Entitlement rule per leave type.
    pub entitlements: HashMap<LeaveType, EntitlementRule>,
}
