//! HTTP request handlers for the workday calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Holiday, WorkHourProvider, WorkHours};

use super::request::{
    AddHolidayRequest, CalculationRequest, HolidayQuery, RemoveHolidayRequest, WorkHoursRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route(
            "/work-hours",
            get(get_work_hours_handler).put(set_work_hours_handler),
        )
        .route(
            "/holidays",
            get(list_holidays_handler)
                .post(add_holiday_handler)
                .delete(remove_holiday_handler),
        )
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a start timestamp and a signed workday count and returns the
/// calculated timestamp. The calculation runs on the blocking pool against a
/// snapshot of the calendar, so updates are not held up while it runs.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let calendar = state.calendar().read().await.clone();
    let (start, workdays) = (request.start, request.workdays);
    let outcome = tokio::task::spawn_blocking(move || calendar.calculate(start, workdays)).await;

    match outcome {
        Ok(Ok(result)) => {
            info!(
                correlation_id = %correlation_id,
                start = %request.start,
                workdays = request.workdays,
                result = %result.result,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation task did not complete"
            );
            error_response(ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", "Calculation did not complete"),
            })
        }
    }
}

/// Handler for GET /work-hours endpoint.
async fn get_work_hours_handler(State(state): State<AppState>) -> Response {
    let window = state.calendar().read().await.work_window();
    json_response(StatusCode::OK, &WorkHours::from(window))
}

/// Handler for PUT /work-hours endpoint.
///
/// Replaces the active work window; an inverted or empty window is rejected
/// and the previous window stays active.
async fn set_work_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let mut calendar = state.calendar().write().await;
    match calendar.set_work_hours(request.start, request.end) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                work_window = %calendar.work_window(),
                "Work hours replaced"
            );
            json_response(StatusCode::OK, &WorkHours::from(calendar.work_window()))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected work hours");
            error_response(err.into())
        }
    }
}

/// Handler for GET /holidays endpoint.
///
/// With `?year=YYYY` returns the holidays projected onto that year, otherwise
/// the raw definitions.
async fn list_holidays_handler(
    State(state): State<AppState>,
    query: Result<Query<HolidayQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            });
        }
    };

    let calendar = state.calendar().read().await;
    match query.year {
        Some(year) => json_response(StatusCode::OK, &calendar.holidays_for_year(year)),
        None => json_response(StatusCode::OK, &calendar.holidays().definitions()),
    }
}

/// Handler for POST /holidays endpoint.
async fn add_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddHolidayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let holiday: Holiday = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let mut calendar = state.calendar().write().await;
    match calendar.add_holiday(holiday.clone()) {
        Ok(()) => json_response(StatusCode::CREATED, &holiday),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected holiday");
            error_response(err.into())
        }
    }
}

/// Handler for DELETE /holidays endpoint.
async fn remove_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<RemoveHolidayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let mut calendar = state.calendar().write().await;
    match calendar.remove_holiday(&request.rule) {
        Ok(removed) => json_response(StatusCode::OK, &json!({ "removed": removed })),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Holiday removal failed");
            error_response(err.into())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

/// Maps a JSON extraction failure onto a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
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
                ApiError::validation_error(body_text)
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
    };
    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculationResult, HolidayOccurrence, WorkdayCalendar};
    use axum::{body::Body, http::Request};
    use chrono::NaiveDateTime;
    use serde_json::Value;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(WorkdayCalendar::default())
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    async fn send(
        router: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_api_001_valid_calculation_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"start":"2004-05-24T15:07:00","workdays":0.25}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.result, make_datetime("2004-05-25 09:07:00"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            "POST",
            "/calculate",
            Some(json!({ "start": "2004-05-24T15:07:00" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_004_unrepresentable_workdays_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            "POST",
            "/calculate",
            Some(json!({ "start": "2004-05-24T15:07:00", "workdays": 1e30 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_MAGNITUDE");
    }

    #[tokio::test]
    async fn test_offset_past_calendar_end_returns_422_without_blocking_updates() {
        let state = create_test_state();
        let (status, body) = send(
            create_router(state.clone()),
            "POST",
            "/calculate",
            Some(json!({ "start": "2004-05-24T10:00:00", "workdays": 1e8 })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "DATE_OUT_OF_RANGE");

        let (status, _) = send(
            create_router(state),
            "PUT",
            "/work-hours",
            Some(json!({ "start": "09:00:00", "end": "17:00:00" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_work_hours() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "GET", "/work-hours", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "start": "08:00:00", "end": "16:00:00" }));
    }

    #[tokio::test]
    async fn test_put_inverted_work_hours_is_rejected() {
        let state = create_test_state();
        let (status, body) = send(
            create_router(state.clone()),
            "PUT",
            "/work-hours",
            Some(json!({ "start": "17:00:00", "end": "09:00:00" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_WORK_HOURS");

        let (_, body) = send(create_router(state), "GET", "/work-hours", None).await;
        assert_eq!(body["start"], "08:00:00");
    }

    #[tokio::test]
    async fn test_list_holidays_for_year() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "GET", "/holidays?year=2004", None).await;

        assert_eq!(status, StatusCode::OK);
        let holidays: Vec<HolidayOccurrence> = serde_json::from_value(body).unwrap();
        assert_eq!(holidays.len(), 6);
        assert_eq!(holidays[0].name, "New Year's Day");
        assert_eq!(holidays[3].name, "Special Holiday");
    }

    #[tokio::test]
    async fn test_list_holidays_with_bad_year_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "GET", "/holidays?year=soon", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_duplicate_holiday_returns_409() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            "POST",
            "/holidays",
            Some(json!({
                "name": "Christmas",
                "rule": { "kind": "recurring", "month": 12, "day": 25 }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "DUPLICATE_HOLIDAY");
    }

    #[tokio::test]
    async fn test_remove_unknown_holiday_returns_404() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            "DELETE",
            "/holidays",
            Some(json!({ "rule": { "kind": "fixed", "date": "2004-05-28" } })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "HOLIDAY_NOT_FOUND");
    }
}
