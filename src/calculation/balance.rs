//! Leave balance aggregation.
//!
//! A balance is a pure function of the employee record, that employee's
//! leave requests, the reference date, the holiday calendar, and the
//! entitlement table. Nothing here performs I/O or mutates state, so
//! balances for different employees can be computed concurrently with no
//! coordination.

use chrono::{Datelike, NaiveDate};

use crate::calendar::HolidayCalendar;
use crate::models::{Employee, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};

use super::entitlement::EntitlementTable;
use super::tenure::years_of_service;
use super::working_days::count_working_days;

/// Computes the balance for one employee and one leave type.
///
/// Only requests created in the accounting year of `as_of` (the calendar
/// year; balances reset January 1st) and matching `leave_type` are
/// considered:
///
/// - Approved requests contribute their working-day count to `used_days`.
/// - Pending requests contribute to `pending_days` only. Pending days do
///   NOT reduce `remaining_days`: a pending request is a soft warning, not
///   a reservation, until approved.
/// - Rejected and Cancelled requests contribute to neither sum; a withdrawn
///   or rejected request never counts against a balance.
///
/// Day counts use [`count_working_days`], so weekends and public holidays
/// inside a request's range are free.
pub fn calculate_balance(
    employee: &Employee,
    requests: &[LeaveRequest],
    leave_type: LeaveType,
    as_of: NaiveDate,
    calendar: &HolidayCalendar,
    entitlements: &EntitlementTable,
) -> LeaveBalance {
    let years = years_of_service(employee.hire_date, as_of);
    let total_days = entitlements.days_for(leave_type, years);

    let in_scope = |req: &&LeaveRequest| {
        req.leave_type == leave_type && req.created_at.date().year() == as_of.year()
    };

    let used_days: u32 = requests
        .iter()
        .filter(in_scope)
        .filter(|req| req.status == LeaveStatus::Approved)
        .map(|req| count_working_days(calendar, req.start_date, req.end_date))
        .sum();

    let pending_days: u32 = requests
        .iter()
        .filter(in_scope)
        .filter(|req| req.status == LeaveStatus::Pending)
        .map(|req| count_working_days(calendar, req.start_date, req.end_date))
        .sum();

    let remaining_days = total_days.saturating_sub(used_days);

    let utilization_percentage = if total_days > 0 {
        ((used_days as f64 / total_days as f64) * 100.0).round() as u32
    } else {
        0
    };

    LeaveBalance {
        leave_type,
        leave_type_name: leave_type.display_name().to_string(),
        total_days,
        used_days,
        pending_days,
        remaining_days,
        utilization_percentage,
        unlimited: entitlements.is_unlimited(leave_type),
    }
}

/// Computes balances for every leave type, in [`LeaveType::ALL`] order.
///
/// This is the employee- and manager-facing balance view: one entry per
/// leave type regardless of whether any requests exist for it.
pub fn calculate_all_balances(
    employee: &Employee,
    requests: &[LeaveRequest],
    as_of: NaiveDate,
    calendar: &HolidayCalendar,
    entitlements: &EntitlementTable,
) -> Vec<LeaveBalance> {
    LeaveType::ALL
        .iter()
        .map(|&leave_type| {
            calculate_balance(employee, requests, leave_type, as_of, calendar, entitlements)
        })
        .collect()
}
