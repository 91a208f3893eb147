//! Request types for the Leave Calculation Engine API.
//!
//! This module defines the JSON request structures for the balance,
//! working-days, and validation endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Employee, LeaveRequest, LeaveStatus, LeaveType};

/// Employee information in an API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            hire_date: req.hire_date,
        }
    }
}

/// One stored leave request record, as supplied by the request store.
///
/// The owning employee is given once at the top level of the request, so
/// records carry no `employee_id` of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestRecord {
    /// Unique identifier for the request.
    pub id: String,
    /// The leave category being claimed.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// Free-text justification supplied at submission.
    #[serde(default)]
    pub reason: String,
    /// When the request was created.
    pub created_at: NaiveDateTime,
}

impl LeaveRequestRecord {
    /// Converts the record into a domain request owned by `employee_id`.
    pub fn into_domain(self, employee_id: &str) -> LeaveRequest {
        LeaveRequest {
            id: self.id,
            employee_id: employee_id.to_string(),
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

/// Request body for the `POST /balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The employee whose balances are being computed.
    pub employee: EmployeeRequest,
    /// The employee's leave requests for the accounting year.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequestRecord>,
    /// Reference date for tenure and accounting-year scoping.
    /// Defaults to today when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `POST /working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for the `POST /requests/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The employee submitting the request.
    pub employee: EmployeeRequest,
    /// The employee's existing leave requests for the accounting year.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequestRecord>,
    /// The leave category being requested.
    pub leave_type: LeaveType,
    /// First day of the proposed leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the proposed leave (inclusive).
    pub end_date: NaiveDate,
    /// Reference date for the validation. Defaults to today when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}
