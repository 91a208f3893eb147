//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinguishes how a holiday's date is determined.
///
/// Fixed holidays recur on the same Gregorian date every year and can be
/// re-anchored to any year. Variable holidays follow the lunar Islamic
/// calendar or the ecclesiastical calendar and must be supplied per year
/// from an authoritative source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    /// Same Gregorian date every year (e.g., Independence Day, May 25).
    Fixed,
    /// Date changes each year (e.g., Eid al-Adha, Orthodox Easter).
    Variable,
}

/// A public holiday on a specific calendar day.
///
/// Two holidays may share the same date (e.g., a civil and a religious
/// observance falling together); lookups treat a date as a holiday if any
/// entry matches.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Holiday, HolidayCategory};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 5, 25).unwrap(),
///     name: "Independence Day".to_string(),
///     category: HolidayCategory::Fixed,
///     description: Some("عيد الاستقلال".to_string()),
/// };
/// assert_eq!(holiday.name, "Independence Day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar day of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
    /// Whether the holiday is fixed-date or variable.
    pub category: HolidayCategory,
    /// Optional localized description (Arabic in the reference data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
