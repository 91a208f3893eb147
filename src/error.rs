//! Error types for the Leave Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during leave calculation.
//!
//! The calculation core itself degrades rather than errors: unknown holiday
//! years fall back to the fixed-holiday subset, inverted ranges count zero
//! working days, and a zero entitlement yields zero utilization. Errors are
//! reserved for configuration loading and request validation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::LeaveType;

/// The main error type for the Leave Calculation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A leave request's date range was inverted.
    #[error("Invalid date range: start date {start} is after end date {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A leave request's start date has already passed.
    #[error("Start date {start} is in the past (today is {today})")]
    StartDateInPast {
        /// The requested start date.
        start: NaiveDate,
        /// The reference date the request was validated against.
        today: NaiveDate,
    },

    /// A leave request would consume more working days than remain.
    #[error(
        "Insufficient {leave_type} balance: requested {requested_days} working day(s), {remaining_days} remaining"
    )]
    InsufficientBalance {
        /// The leave type the request was made against.
        leave_type: LeaveType,
        /// Working days the proposed range would consume.
        requested_days: u32,
        /// Working days remaining for this leave type.
        remaining_days: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
