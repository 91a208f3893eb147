//! Response types for the Leave Calculation Engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Holiday, LeaveBalance};

/// Response body for the `POST /balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// The employee the balances belong to.
    pub employee_id: String,
    /// Completed years of service as of `as_of`.
    pub years_of_service: u32,
    /// The reference date the balances were computed against.
    pub as_of: NaiveDate,
    /// One balance per leave type.
    pub balances: Vec<LeaveBalance>,
}

/// Response body for the `POST /working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Total calendar days in the range (0 for an inverted range).
    pub calendar_days: i64,
    /// Working days in the range, excluding weekends and holidays.
    pub working_days: u32,
    /// Public holidays inside the range, in date order.
    pub holidays: Vec<Holiday>,
}

/// Response body for the `POST /requests/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Working days the proposed range would consume.
    pub requested_days: u32,
    /// Working days remaining for the leave type before this request.
    pub remaining_days: u32,
    /// True when the leave type is effectively unlimited.
    pub unlimited: bool,
    /// Public holidays excluded from the day count.
    pub holidays_excluded: Vec<Holiday>,
    /// Advisory note when holidays were excluded from the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_note: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDateRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!("Start date {} is after end date {}", start, end),
                    "The leave range must run forward in time",
                ),
            },
            EngineError::StartDateInPast { start, today } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "START_DATE_IN_PAST",
                    format!("Start date {} has already passed", start),
                    format!("Leave cannot start before {}", today),
                ),
            },
            EngineError::InsufficientBalance {
                leave_type,
                requested_days,
                remaining_days,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INSUFFICIENT_BALANCE",
                    format!(
                        "Insufficient {} balance: requested {} working day(s), {} remaining",
                        leave_type, requested_days, remaining_days
                    ),
                    "Reduce the requested range or wait for the balance to reset",
                ),
            },
        }
    }
}
