//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DayContext, analyze_status, categorize_punch, categorize_work_time, classify_shift,
    monthly_wage, parse_clock, resolve_shift, wage_for_buckets,
};
use crate::models::{LeaveRecord, Punch, ShiftType, WorkTimeBuckets};
use crate::stats::MonthlyAggregator;

use super::request::{ClassifyRequest, DailyWageRequest, MonthlyStatsRequest};
use super::response::{
    ApiError, ApiErrorResponse, ClassifyResponse, DailyWageResponse, MonthlyStatsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/monthly-stats", post(monthly_stats_handler))
        .route("/daily-wage", post(daily_wage_handler))
        .route("/classify", post(classify_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /monthly-stats endpoint.
///
/// Aggregates one employee's month from the punches, leaves, and holiday
/// tables carried in the request.
async fn monthly_stats_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyStatsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly-stats request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let punches: Vec<Punch> = request.punches.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveRecord> = request.leaves.into_iter().map(Into::into).collect();
    let employee = request.employee;
    let mut resolver = request.holidays.into_resolver();
    let config = state.config();

    let start_time = Instant::now();
    let stats = {
        let mut aggregator =
            MonthlyAggregator::new(config, &mut resolver).with_employee(employee.as_ref());
        aggregator.compute(
            &request.employee_id,
            request.year,
            request.month,
            &punches,
            &leaves,
        )
    };
    let stats = match stats {
        Ok(stats) => stats,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Monthly aggregation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let rate = request.hourly_rate.or_else(|| {
        employee
            .as_ref()
            .map(|employee| employee.hourly_rate(config.wage.standard_monthly_hours))
    });
    let wage = rate.map(|rate| {
        // clients bulk-load adjacent months; price only the requested one
        let month_punches: Vec<Punch> = punches
            .iter()
            .filter(|punch| {
                punch.employee_id == request.employee_id
                    && punch.date.year() == request.year
                    && punch.date.month() == request.month
            })
            .cloned()
            .collect();
        monthly_wage(&month_punches, rate, employee.as_ref(), &mut resolver, config)
    });
    let unresolved_holiday_years = resolver.repository_mut().take_pending_loads();

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        total_work_days = stats.total_work_days,
        total_hours = %stats.total_hours,
        duration_us = duration.as_micros(),
        "Monthly aggregation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(MonthlyStatsResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: request.employee_id,
            year: request.year,
            month: request.month,
            stats,
            wage,
            unresolved_holiday_years,
        }),
    )
        .into_response()
}

/// Handler for POST /daily-wage endpoint.
///
/// Categorizes one worked interval and prices it.
async fn daily_wage_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyWageRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily-wage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let config = state.config();
    let Some(check_in) = parse_clock(&request.check_in) else {
        return bad_request(ApiError::validation_error(format!(
            "Unparseable check_in time: {}",
            request.check_in
        )));
    };
    let Some(check_out) = parse_clock(&request.check_out) else {
        return bad_request(ApiError::validation_error(format!(
            "Unparseable check_out time: {}",
            request.check_out
        )));
    };

    let shift = classify_shift(Some(check_in), request.shift_type, &config.shift);
    let buckets = categorize_work_time(check_in, check_out, shift, request.is_holiday, config);
    let amount = wage_for_buckets(&buckets, request.hourly_rate, &config.wage);

    info!(
        correlation_id = %correlation_id,
        shift = %shift,
        amount = %amount,
        "Daily wage computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(DailyWageResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            shift_type: shift,
            buckets,
            amount,
        }),
    )
        .into_response()
}

/// Handler for POST /classify endpoint.
///
/// Runs the full single-day evaluation: shift classification, holiday
/// resolution, attendance status, and work-time categorization.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(rejection, correlation_id)),
    };

    let config = state.config();
    let punch: Option<Punch> = request.punch.map(Into::into);
    let leaves: Vec<LeaveRecord> = request
        .leaves
        .into_iter()
        .map(LeaveRecord::from)
        .filter(|leave| leave.employee_id == request.employee_id)
        .collect();
    let mut resolver = request.holidays.into_resolver();

    let is_holiday = resolver.is_holiday(request.date);
    let shift = match &punch {
        Some(punch) => resolve_shift(request.employee.as_ref(), punch, &config.shift),
        None => ShiftType::Unknown,
    };
    let status = analyze_status(&DayContext {
        punch: punch.as_ref(),
        date: request.date,
        shift,
        is_holiday,
        leaves: &leaves,
        config,
    });
    let buckets = match &punch {
        Some(punch) if punch.leave_type_override.is_none() => {
            categorize_punch(punch, shift, is_holiday, config)
        }
        _ => WorkTimeBuckets::zero(),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        shift = %shift,
        status = ?status,
        "Day classified"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ClassifyResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            date: request.date,
            shift_type: shift,
            is_holiday,
            status,
            buckets,
        }),
    )
        .into_response()
}
