//! Calculation logic for the Leave Calculation Engine.
//!
//! This module contains the pure calculation functions: working-day
//! counting over the holiday calendar, tenure (years of service), the
//! entitlement table, per-leave-type balance aggregation, and
//! submission-time request validation.

mod balance;
mod entitlement;
mod submission;
mod tenure;
mod working_days;

pub use balance::{calculate_all_balances, calculate_balance};
pub use entitlement::{EntitlementTable, UNLIMITED_LEAVE_DAYS};
pub use submission::{RequestValidation, validate_leave_request};
pub use tenure::years_of_service;
pub use working_days::{calendar_days, count_working_days};
