//! Working-day counting over inclusive date ranges.
//!
//! This is the single authoritative day count for leave accounting: every
//! place a leave request's cost in days is computed must go through
//! [`count_working_days`], so the number an employee sees at submission is
//! the number their balance is charged. A raw `end - start + 1` difference
//! counts weekends and holidays and must not be used for leave totals.

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;

/// Counts the working days from `start` to `end`, both inclusive.
///
/// A working day is a calendar day that is neither a weekend day nor a
/// listed public holiday. The scan is linear because holiday sets are
/// irregular; leave ranges are bounded (realistically under a year), so
/// there is no need for a closed form.
///
/// Returns 0 when `start > end`.
///
/// # Example
///
/// ```no_run
/// use leave_engine::calculation::count_working_days;
/// use leave_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/jordan").unwrap();
///
/// // Sunday 2025-06-01 through Wednesday 2025-06-04: four working days.
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
/// assert_eq!(count_working_days(loader.calendar(), start, end), 4);
/// ```
pub fn count_working_days(calendar: &HolidayCalendar, start: NaiveDate, end: NaiveDate) -> u32 {
    let mut working_days = 0;
    let mut current = start;

    while current <= end {
        if !calendar.is_non_working_day(current) {
            working_days += 1;
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    working_days
}

/// Counts all calendar days from `start` to `end` inclusive, ignoring
/// weekends and holidays. Returns 0 when `start > end`.
///
/// Used only for reporting the raw span of a range alongside its working-day
/// count, never for charging a leave balance.
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if start > end {
        0
    } else {
        (end - start).num_days() + 1
    }
}
