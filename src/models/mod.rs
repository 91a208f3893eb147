//! Core data models for the Leave Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod leave_balance;
mod leave_request;

pub use employee::Employee;
pub use holiday::{Holiday, HolidayCategory};
pub use leave_balance::LeaveBalance;
pub use leave_request::{LeaveRequest, LeaveStatus, LeaveType};
