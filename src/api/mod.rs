//! HTTP API module for the attendance engine.
//!
//! This module provides the stateless REST endpoints for monthly
//! aggregation, daily wage computation, and single-day classification.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClassifyRequest, DailyWageRequest, HolidayDataRequest, LeaveRequest, MonthlyStatsRequest,
    PunchRequest,
};
pub use response::{ApiError, ClassifyResponse, DailyWageResponse, MonthlyStatsResponse};
pub use state::AppState;
