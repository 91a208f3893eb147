//! HTTP API module for the Leave Calculation Engine.
//!
//! This module provides the REST API endpoints for leave balance queries,
//! working-day counts, and submission-time request validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BalanceRequest, LeaveRequestRecord, ValidationRequest, WorkingDaysRequest};
pub use response::{ApiError, BalanceResponse, ValidationResponse, WorkingDaysResponse};
pub use state::AppState;
