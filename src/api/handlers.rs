//! HTTP request handlers for the Weekly Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! mutation responds with a freshly generated statement, so the caller
//! always observes totals recomputed from the record it just changed.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{coerce_count, coerce_decimal};
use crate::format::format_currency;
use crate::models::{PayrollStatement, StatementDisplay, Weekday};
use crate::store::PayrollStore;

use super::request::{ResetRequest, ValueUpdateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", get(get_payroll_handler))
        .route("/payroll/workers/:key/rate", put(set_rate_handler))
        .route("/payroll/workers/:key/hours/:day", put(set_hours_handler))
        .route("/payroll/transit", put(set_transit_handler))
        .route("/payroll/reset", post(reset_handler))
        .with_state(state)
}

/// Handler for GET /payroll.
///
/// Returns the current record with totals computed on the spot.
async fn get_payroll_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let store = match state.store().read() {
        Ok(store) => store,
        Err(_) => return state_unavailable(correlation_id),
    };

    let statement = build_statement(&store);
    info!(
        correlation_id = %correlation_id,
        grand_total = %statement.totals.grand_total,
        "Statement generated"
    );
    ok_json(statement)
}

/// Handler for PUT /payroll/workers/{key}/rate.
///
/// Replaces one worker's hourly rate with the coerced value.
async fn set_rate_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<ValueUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let rate = coerce_decimal(&request.value);

    let mut store = match state.store().write() {
        Ok(store) => store,
        Err(_) => return state_unavailable(correlation_id),
    };

    if let Err(err) = store.set_rate(&key, rate) {
        warn!(correlation_id = %correlation_id, worker = %key, "Worker not found");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let statement = build_statement(&store);
    info!(
        correlation_id = %correlation_id,
        worker = %key,
        rate = %rate,
        grand_total = %statement.totals.grand_total,
        "Rate updated"
    );
    ok_json(statement)
}

/// Handler for PUT /payroll/workers/{key}/hours/{day}.
///
/// Replaces a single day's hours for one worker with the coerced value.
async fn set_hours_handler(
    State(state): State<AppState>,
    Path((key, day)): Path<(String, String)>,
    payload: Result<Json<ValueUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let weekday = match day.parse::<Weekday>() {
        Ok(weekday) => weekday,
        Err(err) => {
            warn!(correlation_id = %correlation_id, day = %day, "Unknown weekday");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let hours = coerce_decimal(&request.value);

    let mut store = match state.store().write() {
        Ok(store) => store,
        Err(_) => return state_unavailable(correlation_id),
    };

    if let Err(err) = store.set_hours(&key, weekday, hours) {
        warn!(correlation_id = %correlation_id, worker = %key, "Worker not found");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let statement = build_statement(&store);
    info!(
        correlation_id = %correlation_id,
        worker = %key,
        day = %weekday,
        hours = %hours,
        grand_total = %statement.totals.grand_total,
        "Hours updated"
    );
    ok_json(statement)
}

/// Handler for PUT /payroll/transit.
///
/// Replaces the transit swipe count with the coerced value.
async fn set_transit_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValueUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let swipes = coerce_count(&request.value);

    let mut store = match state.store().write() {
        Ok(store) => store,
        Err(_) => return state_unavailable(correlation_id),
    };

    store.set_transit_swipes(swipes);

    let statement = build_statement(&store);
    info!(
        correlation_id = %correlation_id,
        swipes = swipes,
        grand_total = %statement.totals.grand_total,
        "Transit swipes updated"
    );
    ok_json(statement)
}

/// Handler for POST /payroll/reset.
///
/// Restores the default dataset, but only with explicit confirmation; an
/// unconfirmed request is refused and the record stays as it was.
async fn reset_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if !request.confirm {
        warn!(correlation_id = %correlation_id, "Reset refused without confirmation");
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::confirmation_required()),
        )
            .into_response();
    }

    let mut store = match state.store().write() {
        Ok(store) => store,
        Err(_) => return state_unavailable(correlation_id),
    };

    store.reset();

    let statement = build_statement(&store);
    info!(
        correlation_id = %correlation_id,
        grand_total = %statement.totals.grand_total,
        "Record reset to defaults"
    );
    ok_json(statement)
}

/// Generates a statement from the store's current record.
fn build_statement(store: &PayrollStore) -> PayrollStatement {
    let totals = store.totals();
    let display = StatementDisplay {
        labor_subtotal: format_currency(totals.labor_subtotal),
        transit_amount: format_currency(totals.transit_amount),
        grand_total: format_currency(totals.grand_total),
    };

    PayrollStatement {
        statement_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        record: store.record().clone(),
        totals,
        display,
    }
}

/// Unwraps a JSON payload, mapping extraction failures to error responses.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Builds a 200 response with a JSON body.
fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Builds the response for a poisoned state lock.
fn state_unavailable(correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, "Payroll state lock poisoned");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::new("STATE_ERROR", "Payroll state unavailable")),
    )
        .into_response()
}
