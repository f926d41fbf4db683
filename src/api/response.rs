//! Response types for the attendance engine API.
//!
//! This module defines the success payloads for each endpoint as well as
//! the error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AttendanceStatus, ShiftType, WorkTimeBuckets};
use crate::stats::MonthlyStats;

/// Response body for the `/monthly-stats` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStatsResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The employee the statistics belong to.
    pub employee_id: String,
    /// Target year.
    pub year: i32,
    /// Target month.
    pub month: u32,
    /// The aggregated statistics.
    pub stats: MonthlyStats,
    /// Monthly wage, present when the request carried an hourly rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wage: Option<Decimal>,
    /// Years whose system holiday table was consulted but not supplied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_holiday_years: Vec<i32>,
}

/// Response body for the `/daily-wage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWageResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The shift the day was evaluated against.
    pub shift_type: ShiftType,
    /// The categorized hours.
    pub buckets: WorkTimeBuckets,
    /// The day's wage.
    pub amount: Decimal,
}

/// Response body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The date that was evaluated.
    pub date: NaiveDate,
    /// The shift the day was evaluated against.
    pub shift_type: ShiftType,
    /// Whether the date resolved as a holiday.
    pub is_holiday: bool,
    /// The day's attendance status; absent for suppressed days.
    pub status: Option<AttendanceStatus>,
    /// The categorized hours for the day.
    pub buckets: WorkTimeBuckets,
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
            EngineError::InvalidMonth { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month: {}-{}", year, month),
                    "Month must be between 1 and 12 and the year within calendar range",
                ),
            },
        }
    }
}
