//! Employee model.
//!
//! The engine only needs the attributes relevant to leave accounting: an
//! aggregation key and the hire date used for tenure calculation. The full
//! employee record (department, position, manager) is owned by the external
//! HR directory and never reaches the core.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee whose leave balance is being computed.
///
/// # Example
///
/// ```
/// use leave_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
/// };
/// assert_eq!(employee.id, "emp_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired, used for tenure calculation.
    ///
    /// A hire date in the future is treated as zero years of service by the
    /// tenure calculation rather than rejected here.
    pub hire_date: NaiveDate,
}
