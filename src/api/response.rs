//! Response types for the workday calendar API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

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

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            CalendarError::ConfigNotFound { .. } | CalendarError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            CalendarError::InvalidWorkHours { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_WORK_HOURS",
                    message,
                    "The work day must start before it ends",
                ),
            ),
            CalendarError::InvalidHoliday { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_HOLIDAY", message),
            ),
            CalendarError::DuplicateHoliday { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_HOLIDAY", message),
            ),
            CalendarError::HolidayNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("HOLIDAY_NOT_FOUND", message),
            ),
            CalendarError::InvalidMagnitude { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_MAGNITUDE",
                    message,
                    "The workday count must be a finite number of representable size",
                ),
            ),
            CalendarError::DateOutOfRange { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("DATE_OUT_OF_RANGE", message),
            ),
            CalendarError::NoWorkingDay { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "NO_WORKING_DAY",
                    message,
                    "The configured holidays leave no working day to land on",
                ),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
