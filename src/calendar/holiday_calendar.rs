//! Holiday and weekend lookup over loaded calendar data.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::{CalendarConfig, FixedHoliday, YearHolidays};
use crate::models::{Holiday, HolidayCategory};

/// Immutable lookup table of weekends and public holidays.
///
/// Years with curated data carry the full fixed + variable holiday set;
/// every other year is served from the fixed-date holidays re-anchored to
/// the requested year. That fallback is deliberate degraded-but-safe
/// behavior, never an error: variable (lunar) holiday dates cannot be
/// derived without external astronomical data, but fixed holidays can.
///
/// All lookups are pure functions of the loaded data and the query date.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/jordan").unwrap();
/// let calendar = loader.calendar();
///
/// // 2025-06-06 is both a Friday and Eid al-Adha Day 1.
/// let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
/// assert!(calendar.is_weekend(date));
/// assert!(calendar.is_holiday(date));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    weekend: Vec<Weekday>,
    fixed: Vec<FixedHoliday>,
    /// Full holiday set (fixed then variable, in config order) per curated year.
    curated: BTreeMap<i32, Vec<Holiday>>,
}

impl HolidayCalendar {
    /// Builds a calendar from the loaded configuration.
    ///
    /// For each curated year the fixed holidays are anchored to that year
    /// and concatenated with the year's variable entries, preserving config
    /// order so [`Self::holiday_info`] returns the first listed match.
    pub fn new(config: CalendarConfig, years: Vec<YearHolidays>) -> Self {
        let weekend = config
            .weekend
            .iter()
            .map(|day| day.to_weekday())
            .collect::<Vec<_>>();

        let mut curated = BTreeMap::new();
        for year_data in years {
            let mut holidays = anchor_fixed(&config.fixed_holidays, year_data.year);
            holidays.extend(year_data.holidays.into_iter().map(|entry| Holiday {
                date: entry.date,
                name: entry.name,
                category: HolidayCategory::Variable,
                description: entry.description,
            }));
            curated.insert(year_data.year, holidays);
        }

        Self {
            weekend,
            fixed: config.fixed_holidays,
            curated,
        }
    }

    /// Returns the weekend days of the jurisdiction.
    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend
    }

    /// Returns the years that have curated variable-holiday data.
    pub fn curated_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.curated.keys().copied()
    }

    /// Returns the full holiday set for a year.
    ///
    /// For curated years this is the fixed + variable set; for all other
    /// years only the fixed holidays, re-anchored to the requested year.
    /// Never errors, regardless of how far in the past or future the year
    /// lies.
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        match self.curated.get(&year) {
            Some(holidays) => holidays.clone(),
            None => anchor_fixed(&self.fixed, year),
        }
    }

    /// Returns true if the date falls on a weekend day.
    ///
    /// The reference jurisdiction (Jordan) defines the weekend as Friday
    /// and Saturday, not the Saturday/Sunday convention.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Returns true if any holiday falls on the given calendar day.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        match self.curated.get(&date.year()) {
            Some(holidays) => holidays.iter().any(|h| h.date == date),
            None => self
                .fixed
                .iter()
                .any(|f| f.month == date.month() && f.day == date.day()),
        }
    }

    /// Returns the first holiday (in stored order) on the given day, if any.
    pub fn holiday_info(&self, date: NaiveDate) -> Option<Holiday> {
        match self.curated.get(&date.year()) {
            Some(holidays) => holidays.iter().find(|h| h.date == date).cloned(),
            None => self
                .fixed
                .iter()
                .find(|f| f.month == date.month() && f.day == date.day())
                .and_then(|f| anchor_one(f, date.year())),
        }
    }

    /// Returns all holidays on the given day, in stored order.
    ///
    /// A date can carry more than one holiday (e.g., Western and Orthodox
    /// Good Friday share a date in 2026); all matches are returned.
    pub fn holidays_on(&self, date: NaiveDate) -> Vec<Holiday> {
        match self.curated.get(&date.year()) {
            Some(holidays) => holidays
                .iter()
                .filter(|h| h.date == date)
                .cloned()
                .collect(),
            None => self
                .fixed
                .iter()
                .filter(|f| f.month == date.month() && f.day == date.day())
                .filter_map(|f| anchor_one(f, date.year()))
                .collect(),
        }
    }

    /// Returns every holiday from `start` to `end` inclusive, in date order.
    ///
    /// Duplicates are allowed when multiple holidays share a date. An
    /// inverted range yields an empty list.
    pub fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
        let mut holidays = Vec::new();
        let mut current = start;
        while current <= end {
            holidays.extend(self.holidays_on(current));
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        holidays
    }

    /// Returns true if the date is a weekend day or a public holiday.
    pub fn is_non_working_day(&self, date: NaiveDate) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }
}

/// Anchors the fixed holidays to a concrete year.
fn anchor_fixed(fixed: &[FixedHoliday], year: i32) -> Vec<Holiday> {
    fixed
        .iter()
        .filter_map(|f| anchor_one(f, year))
        .collect()
}

/// Anchors one fixed holiday to a year; skips dates that do not exist in
/// that year rather than panicking.
fn anchor_one(fixed: &FixedHoliday, year: i32) -> Option<Holiday> {
    NaiveDate::from_ymd_opt(year, fixed.month, fixed.day).map(|date| Holiday {
        date,
        name: fixed.name.clone(),
        category: HolidayCategory::Fixed,
        description: fixed.description.clone(),
    })
}
