//! Derived leave balance snapshot.
//!
//! A [`LeaveBalance`] is never persisted; it is recomputed on every query as
//! a pure function of the employee record, the year's leave requests, the
//! reference date, and the holiday calendar. Field names serialize in the
//! camelCase form the consuming HR frontends already expect.

use serde::{Deserialize, Serialize};

use super::LeaveType;

/// A per-employee, per-leave-type balance snapshot.
///
/// `pending_days` is informational only: pending requests never reduce
/// `remaining_days` until approved. A pending request is a soft warning,
/// not a reservation.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveBalance, LeaveType};
///
/// let balance = LeaveBalance {
///     leave_type: LeaveType::Vacation,
///     leave_type_name: "Vacation".to_string(),
///     total_days: 21,
///     used_days: 4,
///     pending_days: 2,
///     remaining_days: 17,
///     utilization_percentage: 19,
///     unlimited: false,
/// };
/// assert_eq!(balance.remaining_display(), "17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    /// The leave category this balance covers.
    pub leave_type: LeaveType,
    /// Human-readable label for the leave type.
    pub leave_type_name: String,
    /// Total entitlement in working days for the accounting year.
    pub total_days: u32,
    /// Working days consumed by approved requests.
    pub used_days: u32,
    /// Working days claimed by still-pending requests.
    pub pending_days: u32,
    /// `max(0, total_days - used_days)`; pending days are not subtracted.
    pub remaining_days: u32,
    /// `round(used / total * 100)`, or 0 when the entitlement is 0.
    pub utilization_percentage: u32,
    /// True for the unlimited sentinel (Unpaid leave); consumers must show
    /// "Unlimited" instead of arithmetic on `remaining_days`.
    pub unlimited: bool,
}

impl LeaveBalance {
    /// Display string for the remaining balance.
    ///
    /// Unlimited leave types report the sentinel `total_days` of 999, which
    /// must never be surfaced as a countdown.
    pub fn remaining_display(&self) -> String {
        if self.unlimited {
            "Unlimited".to_string()
        } else {
            self.remaining_days.to_string()
        }
    }
}
