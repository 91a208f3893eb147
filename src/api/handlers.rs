//! HTTP request handlers for the Leave Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_all_balances, calendar_days, count_working_days, validate_leave_request,
    years_of_service,
};
use crate::models::{Employee, LeaveRequest};

use super::request::{BalanceRequest, ValidationRequest, WorkingDaysRequest};
use super::response::{
    ApiError, ApiErrorResponse, BalanceResponse, ValidationResponse, WorkingDaysResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/balance", post(balance_handler))
        .route("/working-days", post(working_days_handler))
        .route("/requests/validate", post(validate_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /balance endpoint.
///
/// Accepts an employee and that employee's leave requests, and returns one
/// balance per leave type.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee: Employee = request.employee.into();
    let requests: Vec<LeaveRequest> = request
        .leave_requests
        .into_iter()
        .map(|record| record.into_domain(&employee.id))
        .collect();
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let config = state.config();
    let balances = calculate_all_balances(
        &employee,
        &requests,
        as_of,
        config.calendar(),
        config.entitlements(),
    );
    let years = years_of_service(employee.hire_date, as_of);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        requests_count = requests.len(),
        years_of_service = years,
        "Balance calculation completed"
    );

    let response = BalanceResponse {
        employee_id: employee.id,
        years_of_service: years,
        as_of,
        balances,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /working-days endpoint.
///
/// Counts the working days in a date range. An inverted range is not an
/// error here; it simply counts zero days.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working-days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let calendar = config.calendar();

    let working_days = count_working_days(calendar, request.start_date, request.end_date);
    let holidays = calendar.holidays_in_range(request.start_date, request.end_date);

    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        working_days,
        "Working-day count completed"
    );

    let response = WorkingDaysResponse {
        start_date: request.start_date,
        end_date: request.end_date,
        calendar_days: calendar_days(request.start_date, request.end_date),
        working_days,
        holidays,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /requests/validate endpoint.
///
/// Validates a proposed leave request against the employee's current
/// balance without recording anything.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let employee: Employee = request.employee.into();
    let existing: Vec<LeaveRequest> = request
        .leave_requests
        .into_iter()
        .map(|record| record.into_domain(&employee.id))
        .collect();
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let config = state.config();
    let outcome = validate_leave_request(
        &employee,
        &existing,
        request.leave_type,
        request.start_date,
        request.end_date,
        as_of,
        config.calendar(),
        config.entitlements(),
    );

    match outcome {
        Ok(validation) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                leave_type = %request.leave_type,
                requested_days = validation.requested_days,
                "Validation passed"
            );

            let holiday_note = if validation.holidays_excluded.is_empty() {
                None
            } else {
                Some(format!(
                    "{} public holiday(s) in the range are not deducted from the balance",
                    validation.holidays_excluded.len()
                ))
            };

            let response = ValidationResponse {
                requested_days: validation.requested_days,
                remaining_days: validation.remaining_days,
                unlimited: validation.unlimited,
                holidays_excluded: validation.holidays_excluded,
                holiday_note,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Validation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
