//! Comprehensive integration tests for the Leave Calculation Engine.
//!
//! This test suite covers all calculation scenarios including:
//! - Working-day counts (weekends, fixed and variable holidays)
//! - Balance calculation per leave type
//! - Tenure-based entitlement tiers
//! - Request status handling (approved, pending, rejected, cancelled)
//! - Accounting-year scoping
//! - Unlimited leave types
//! - Submission-time validation
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/jordan").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn employee(id: &str, hire_date: &str) -> Value {
    json!({ "id": id, "hire_date": hire_date })
}

fn leave_request(
    id: &str,
    leave_type: &str,
    start_date: &str,
    end_date: &str,
    status: &str,
    created_at: &str,
) -> Value {
    json!({
        "id": id,
        "leave_type": leave_type,
        "start_date": start_date,
        "end_date": end_date,
        "status": status,
        "created_at": created_at
    })
}

fn balance_for<'a>(response: &'a Value, leave_type: &str) -> &'a Value {
    response["balances"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["leaveType"] == leave_type)
        .unwrap_or_else(|| panic!("no balance for {}", leave_type))
}

// =============================================================================
// Working-Day Counts
// =============================================================================

#[tokio::test]
async fn test_weekend_is_friday_and_saturday() {
    let router = create_router_for_test();

    // 2025-06-13 is a Friday, 2025-06-14 a Saturday.
    let (status, body) = post_json(
        router,
        "/working-days",
        json!({ "start_date": "2025-06-13", "end_date": "2025-06-14" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calendar_days"], 2);
    assert_eq!(body["working_days"], 0);
}

#[tokio::test]
async fn test_single_working_day_counts_one() {
    let router = create_router_for_test();

    // 2025-06-15 is a Sunday, a working day in Jordan.
    let (status, body) = post_json(
        router,
        "/working-days",
        json!({ "start_date": "2025-06-15", "end_date": "2025-06-15" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calendar_days"], 1);
    assert_eq!(body["working_days"], 1);
}

#[tokio::test]
async fn test_inverted_range_counts_zero() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/working-days",
        json!({ "start_date": "2025-06-15", "end_date": "2025-06-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calendar_days"], 0);
    assert_eq!(body["working_days"], 0);
    assert_eq!(body["holidays"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_eid_al_adha_block_costs_nothing() {
    let router = create_router_for_test();

    // The whole 2025-06-05..10 range is Eid al-Adha plus the weekend.
    let (status, body) = post_json(
        router,
        "/working-days",
        json!({ "start_date": "2025-06-05", "end_date": "2025-06-10" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calendar_days"], 6);
    assert_eq!(body["working_days"], 0);

    let holidays = body["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 6);
    assert_eq!(holidays[1]["name"], "Eid al-Adha Day 1");
}

#[tokio::test]
async fn test_uncurated_year_keeps_fixed_holidays() {
    let router = create_router_for_test();

    // No curated file for 2030, so only fixed holidays apply.
    // 2030-12-24 is a Tuesday; Christmas Day and Boxing Day follow.
    let (status, body) = post_json(
        router,
        "/working-days",
        json!({ "start_date": "2030-12-24", "end_date": "2030-12-26" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working_days"], 1);

    let holidays = body["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0]["name"], "Christmas Day");
    assert_eq!(holidays[1]["name"], "Boxing Day (optional)");
}

#[tokio::test]
async fn test_year_boundary_range() {
    let router = create_router_for_test();

    // 2025-12-28 (Sunday) through 2026-01-04: loses the weekend days,
    // Christmas is already past, New Year's Day 2026 is a Thursday.
    let (status, body) = post_json(
        router,
        "/working-days",
        json!({ "start_date": "2025-12-28", "end_date": "2026-01-04" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calendar_days"], 8);
    assert_eq!(body["working_days"], 5);

    let holidays = body["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0]["name"], "New Year's Day");
}

// =============================================================================
// Balance Calculation
// =============================================================================

#[tokio::test]
async fn test_vacation_balance_after_approved_leave() {
    let router = create_router_for_test();

    // Hired 2020-01-01, so 5 completed years by 2025 and the 21-day tier.
    // The approved request spans 2025-06-01 (Sunday) through 06-04: 4 days.
    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_requests": [
                leave_request(
                    "req_001", "VACATION",
                    "2025-06-01", "2025-06-04",
                    "APPROVED", "2025-05-20T09:00:00"
                )
            ],
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(body["years_of_service"], 5);

    let vacation = balance_for(&body, "VACATION");
    assert_eq!(vacation["totalDays"], 21);
    assert_eq!(vacation["usedDays"], 4);
    assert_eq!(vacation["pendingDays"], 0);
    assert_eq!(vacation["remainingDays"], 17);
    assert_eq!(vacation["utilizationPercentage"], 19);
    assert_eq!(vacation["unlimited"], false);
}

#[tokio::test]
async fn test_balance_returns_every_leave_type() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2023-03-15"),
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balances"].as_array().unwrap().len(), 7);

    assert_eq!(balance_for(&body, "VACATION")["totalDays"], 14);
    assert_eq!(balance_for(&body, "SICK")["totalDays"], 14);
    assert_eq!(balance_for(&body, "MATERNITY")["totalDays"], 70);
    assert_eq!(balance_for(&body, "PATERNITY")["totalDays"], 3);
    assert_eq!(balance_for(&body, "BEREAVEMENT")["totalDays"], 3);
    assert_eq!(balance_for(&body, "PERSONAL")["totalDays"], 5);
}

#[tokio::test]
async fn test_pending_requests_do_not_reduce_remaining() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2023-03-15"),
            "leave_requests": [
                leave_request(
                    "req_001", "VACATION",
                    "2025-09-07", "2025-09-10",
                    "PENDING", "2025-08-20T10:00:00"
                )
            ],
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let vacation = balance_for(&body, "VACATION");
    assert_eq!(vacation["usedDays"], 0);
    assert_eq!(vacation["pendingDays"], 4);
    assert_eq!(vacation["remainingDays"], 14);
}

#[tokio::test]
async fn test_rejected_and_cancelled_requests_are_ignored() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2023-03-15"),
            "leave_requests": [
                leave_request(
                    "req_001", "VACATION",
                    "2025-06-01", "2025-06-04",
                    "REJECTED", "2025-05-20T09:00:00"
                ),
                leave_request(
                    "req_002", "VACATION",
                    "2025-07-06", "2025-07-09",
                    "CANCELLED", "2025-06-25T09:00:00"
                )
            ],
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let vacation = balance_for(&body, "VACATION");
    assert_eq!(vacation["usedDays"], 0);
    assert_eq!(vacation["pendingDays"], 0);
    assert_eq!(vacation["remainingDays"], 14);
}

#[tokio::test]
async fn test_prior_year_requests_are_out_of_scope() {
    let router = create_router_for_test();

    // Created in 2024, so it belongs to the 2024 accounting year and the
    // 2025 balance starts fresh.
    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_requests": [
                leave_request(
                    "req_001", "VACATION",
                    "2024-11-03", "2024-11-06",
                    "APPROVED", "2024-10-20T09:00:00"
                )
            ],
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let vacation = balance_for(&body, "VACATION");
    assert_eq!(vacation["usedDays"], 0);
    assert_eq!(vacation["remainingDays"], 21);
}

#[tokio::test]
async fn test_unpaid_leave_is_unlimited() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2023-03-15"),
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let unpaid = balance_for(&body, "UNPAID");
    assert_eq!(unpaid["totalDays"], 999);
    assert_eq!(unpaid["unlimited"], true);
}

// =============================================================================
// Tenure Tiers
// =============================================================================

#[tokio::test]
async fn test_five_year_tenure_reaches_higher_tier() {
    let router = create_router_for_test();

    // 2019-06-01 through 2024-06-01 is 1827 days, just over five years.
    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2019-06-01"),
            "as_of": "2024-06-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years_of_service"], 5);
    assert_eq!(balance_for(&body, "VACATION")["totalDays"], 21);
}

#[tokio::test]
async fn test_one_day_short_of_five_years_stays_on_base_tier() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2019-06-02"),
            "as_of": "2024-06-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years_of_service"], 4);
    assert_eq!(balance_for(&body, "VACATION")["totalDays"], 14);
}

#[tokio::test]
async fn test_future_hire_date_counts_zero_years() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({
            "employee": employee("emp_001", "2026-02-01"),
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years_of_service"], 0);
    assert_eq!(balance_for(&body, "VACATION")["totalDays"], 14);
}

// =============================================================================
// Submission Validation
// =============================================================================

#[tokio::test]
async fn test_validate_accepts_affordable_request() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/requests/validate",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_type": "VACATION",
            "start_date": "2025-09-07",
            "end_date": "2025-09-10",
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requested_days"], 4);
    assert_eq!(body["remaining_days"], 21);
    assert_eq!(body["unlimited"], false);
}

#[tokio::test]
async fn test_validate_range_over_holidays_is_free() {
    let router = create_router_for_test();

    // 2025-09-03 (Wednesday) through 09-07: the Prophet's Birthday and
    // the weekend leave only two deductible days.
    let (status, body) = post_json(
        router,
        "/requests/validate",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_type": "VACATION",
            "start_date": "2025-09-03",
            "end_date": "2025-09-07",
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requested_days"], 2);

    let excluded = body["holidays_excluded"].as_array().unwrap();
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0]["name"], "Prophet's Birthday");
    assert!(body["holiday_note"].is_string());
}

#[tokio::test]
async fn test_validate_rejects_insufficient_balance() {
    let router = create_router_for_test();

    // Bereavement grants 3 days; Sunday through Wednesday needs 4.
    let (status, body) = post_json(
        router,
        "/requests/validate",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_type": "BEREAVEMENT",
            "start_date": "2025-09-07",
            "end_date": "2025-09-10",
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");
    assert!(body["message"].as_str().unwrap().contains("Bereavement"));
}

#[tokio::test]
async fn test_validate_unlimited_type_skips_balance_check() {
    let router = create_router_for_test();

    // Far more than 999 working days would fit in this range either way;
    // ask for a long stretch of unpaid leave.
    let (status, body) = post_json(
        router,
        "/requests/validate",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_type": "UNPAID",
            "start_date": "2025-09-01",
            "end_date": "2025-12-31",
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unlimited"], true);
}

#[tokio::test]
async fn test_validate_rejects_inverted_range() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/requests/validate",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_type": "VACATION",
            "start_date": "2025-09-10",
            "end_date": "2025-09-07",
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_validate_rejects_start_in_past() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/requests/validate",
        json!({
            "employee": employee("emp_001", "2020-01-01"),
            "leave_type": "VACATION",
            "start_date": "2025-08-20",
            "end_date": "2025-08-31",
            "as_of": "2025-08-28"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "START_DATE_IN_PAST");
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/balance")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/working-days")
                .body(Body::from(
                    r#"{"start_date":"2025-06-15","end_date":"2025-06-15"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let router = create_router_for_test();

    let (status, body) = post_json(
        router,
        "/balance",
        json!({ "employee": { "id": "emp_001" } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("hire_date"));
}
