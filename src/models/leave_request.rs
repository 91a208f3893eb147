//! Leave request model and related enums.
//!
//! Leave types and statuses serialize as SCREAMING_SNAKE_CASE strings to
//! stay compatible with the HR record store the engine reads from.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The closed set of leave categories recognized by the engine.
///
/// Entitlement rules per type are configuration-driven; see
/// [`crate::calculation::EntitlementTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    /// Annual leave (Article 61: tenure-tiered entitlement).
    Vacation,
    /// Sick leave (Article 65: 14 days at full pay).
    Sick,
    /// Maternity leave (Article 67: 70 days fully paid).
    Maternity,
    /// Paternity leave (3 days).
    Paternity,
    /// Bereavement leave (3 days per occurrence).
    Bereavement,
    /// Personal leave (company discretion, not mandated by law).
    Personal,
    /// Unpaid leave (effectively unlimited, requires approval).
    Unpaid,
}

impl LeaveType {
    /// All leave types, in the order balances are reported.
    pub const ALL: [LeaveType; 7] = [
        LeaveType::Vacation,
        LeaveType::Sick,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Bereavement,
        LeaveType::Personal,
        LeaveType::Unpaid,
    ];

    /// Human-readable label for balance displays.
    pub fn display_name(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation",
            LeaveType::Sick => "Sick",
            LeaveType::Maternity => "Maternity",
            LeaveType::Paternity => "Paternity",
            LeaveType::Bereavement => "Bereavement",
            LeaveType::Personal => "Personal",
            LeaveType::Unpaid => "Unpaid",
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle state of a leave request.
///
/// Transitions are one-directional: a Pending request moves to exactly one
/// terminal state (Approved, Rejected, or Cancelled) and is never re-opened.
/// The engine only reads statuses; the approval workflow owns transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting a decision. Counts toward pending days only.
    Pending,
    /// Approved by a manager. Counts toward used days.
    Approved,
    /// Rejected by a manager. Counts toward nothing.
    Rejected,
    /// Withdrawn by the employee. Counts toward nothing.
    Cancelled,
}

impl LeaveStatus {
    /// Returns true for states a request can never leave.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// One employee's claim on leave for an inclusive date range.
///
/// The engine treats requests as read-only input for aggregation; creation
/// and status transitions belong to the external request store and approval
/// workflow.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveRequest, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest {
///     id: "req_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Vacation,
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
///     status: LeaveStatus::Approved,
///     reason: "Family trip".to_string(),
///     created_at: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap().and_hms_opt(9, 0, 0).unwrap(),
/// };
/// assert!(request.status.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee the request belongs to.
    pub employee_id: String,
    /// The leave category being claimed.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// Free-text justification supplied at submission.
    pub reason: String,
    /// When the request was created; scopes it to an accounting year.
    pub created_at: NaiveDateTime,
}
