//! Submission-time validation for proposed leave requests.

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Holiday, LeaveRequest, LeaveType};

use super::balance::calculate_balance;
use super::entitlement::EntitlementTable;
use super::working_days::count_working_days;

/// The outcome of validating a proposed leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestValidation {
    /// Working days the proposed range would consume.
    pub requested_days: u32,
    /// Working days remaining for this leave type before the request.
    pub remaining_days: u32,
    /// True when the leave type is effectively unlimited (no balance check).
    pub unlimited: bool,
    /// Public holidays inside the range, excluded from the day count.
    pub holidays_excluded: Vec<Holiday>,
}

/// Validates a proposed leave request against the employee's current balance.
///
/// Checks, in order:
/// 1. The range must not be inverted (`start <= end`; single-day requests
///    are allowed).
/// 2. The start date must not be before `as_of`.
/// 3. For non-unlimited leave types, the range's working-day count must not
///    exceed the remaining balance.
///
/// The day count uses [`count_working_days`], so a request spanning only
/// weekends and holidays costs 0 days and always passes the balance check.
///
/// This check is optimistic and advisory: no reservation is taken, so two
/// concurrent submissions for the same employee and leave type can each
/// observe sufficient balance and both be accepted. Callers needing a hard
/// guarantee must serialize submissions (or re-check at approval time) in
/// the request store; the engine itself holds no state to lock.
#[allow(clippy::too_many_arguments)]
pub fn validate_leave_request(
    employee: &Employee,
    existing_requests: &[LeaveRequest],
    leave_type: LeaveType,
    start: NaiveDate,
    end: NaiveDate,
    as_of: NaiveDate,
    calendar: &HolidayCalendar,
    entitlements: &EntitlementTable,
) -> EngineResult<RequestValidation> {
    if start > end {
        return Err(EngineError::InvalidDateRange { start, end });
    }

    if start < as_of {
        return Err(EngineError::StartDateInPast {
            start,
            today: as_of,
        });
    }

    let requested_days = count_working_days(calendar, start, end);
    let holidays_excluded = calendar.holidays_in_range(start, end);

    let balance = calculate_balance(
        employee,
        existing_requests,
        leave_type,
        as_of,
        calendar,
        entitlements,
    );

    if !balance.unlimited && requested_days > balance.remaining_days {
        return Err(EngineError::InsufficientBalance {
            leave_type,
            requested_days,
            remaining_days: balance.remaining_days,
        });
    }

    Ok(RequestValidation {
        requested_days,
        remaining_days: balance.remaining_days,
        unlimited: balance.unlimited,
        holidays_excluded,
    })
}
