//! Tenure calculation.

use chrono::NaiveDate;

/// Average Gregorian year length used for tenure tiering.
const DAYS_PER_YEAR: f64 = 365.25;

/// Computes completed years of service as of a reference date.
///
/// Defined as `floor(elapsed_days / 365.25)`. This is an approximation: it
/// ignores calendar-month anniversaries, so a date exactly N calendar years
/// after the hire date can land a day or two either side of the tier
/// boundary. It is accurate enough for entitlement tiering, but callers
/// must not rely on exact anniversary-date semantics.
///
/// A hire date on or after `as_of` (including future hire dates) yields 0.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 8, 28).unwrap();
/// assert_eq!(years_of_service(hired, as_of), 5);
/// ```
pub fn years_of_service(hire_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let elapsed_days = (as_of - hire_date).num_days();
    if elapsed_days <= 0 {
        return 0;
    }
    (elapsed_days as f64 / DAYS_PER_YEAR).floor() as u32
}
