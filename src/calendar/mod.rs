//! Holiday calendar for the Leave Calculation Engine.
//!
//! This module provides the [`HolidayCalendar`] type: a pure, immutable
//! lookup structure over the jurisdiction's weekend definition and public
//! holidays, built from configuration at process start.

mod holiday_calendar;

pub use holiday_calendar::HolidayCalendar;
