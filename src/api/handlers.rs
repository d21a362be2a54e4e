//! HTTP request handlers for the shift registration API.
//!
//! This module contains the handler functions for all API endpoints.

use std::str::FromStr;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::ShiftId;
use crate::engine::{current_shift, day_kind, decimal_hours, offered_meal_slots, offered_shifts, parse_entry_time};
use crate::report::{export_csv, month_overview, DeskStats, RegistrationFilter};

use super::request::{AvailabilityQuery, CalendarQuery, RegistrationRequest};
use super::response::{ApiError, ApiErrorResponse, AvailabilityResponse, CalendarResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/availability", get(availability_handler))
        .route("/registrations", post(register_handler).get(list_handler))
        .route("/registrations/export", get(export_handler))
        .route("/stats", get(stats_handler))
        .route("/calendar", get(calendar_handler))
        .with_state(state)
}

/// Handler for GET /availability.
///
/// Evaluates the offered shifts (and, when a shift is selected, the offered
/// meal slots) for a date and entry time, with occupancy snapshots.
async fn availability_handler(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let now = Utc::now();

    let date = query.date.unwrap_or_else(|| now.date_naive());
    let entry_time = match query.entry_time.as_deref().map(parse_entry_time) {
        Some(Ok(time)) => time,
        Some(Err(err)) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid entry time");
            return ApiErrorResponse::from(err).into_response();
        }
        None => now.time(),
    };
    let selected = match query.shift.as_deref().map(ShiftId::from_str) {
        Some(Ok(id)) => Some(id),
        Some(Err(err)) => {
            warn!(correlation_id = %correlation_id, error = %err, "Unknown shift in query");
            return ApiErrorResponse::from(err).into_response();
        }
        None => None,
    };

    let mut desk = state.desk().lock().await;
    // The availability poll doubles as the re-render loop that retires a
    // finished confirmation.
    desk.maybe_reset(now);
    let day = day_kind(date);
    let entry = decimal_hours(entry_time);

    let shifts = offered_shifts(desk.catalog(), entry, day)
        .into_iter()
        .map(|shift| desk.allocator().shift_availability(shift))
        .collect();
    let meal_slots = selected.map(|id| {
        offered_meal_slots(desk.catalog(), desk.catalog().shift(id))
            .into_iter()
            .map(|meal| desk.allocator().meal_availability(meal))
            .collect()
    });

    info!(
        correlation_id = %correlation_id,
        %date,
        %entry,
        day = %day,
        "Evaluated availability"
    );

    Json(AvailabilityResponse {
        date,
        day_kind: day,
        entry_time,
        current_shift: current_shift(desk.catalog(), entry, day).map(|s| s.id),
        shifts,
        meal_slots,
        rooms: desk.allocator().room_snapshot(),
        form_state: desk.state(),
    })
    .into_response()
}

/// Handler for POST /registrations.
///
/// Validates and commits one registration; the response body is the stored
/// record and doubles as the confirmation.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing registration");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let date_override = request.date;
    let form = match request.into_form() {
        Ok(form) => form,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid registration request");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let now = Utc::now();
    // A desk correction carries its own date; eligibility is evaluated as of
    // that date and the reported entry time.
    let now = match date_override {
        Some(date) => date
            .and_time(form.entry_time.unwrap_or_else(|| now.time()))
            .and_utc(),
        None => now,
    };

    let mut desk = state.desk().lock().await;
    desk.maybe_reset(now);

    match desk.submit(&form, now) {
        Ok(stored) => {
            // The confirmation is delivered in this response.
            desk.acknowledge();
            info!(
                correlation_id = %correlation_id,
                registration_id = %stored.id,
                shift = %stored.registration.shift_id,
                meal_slot = %stored.registration.meal_slot_id,
                "Registration committed"
            );
            (StatusCode::CREATED, Json(stored)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Registration rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /registrations.
async fn list_handler(
    State(state): State<AppState>,
    Query(filter): Query<RegistrationFilter>,
) -> impl IntoResponse {
    let desk = state.desk().lock().await;
    let records = desk.store().snapshot();
    let matched: Vec<_> = filter.apply(&records).into_iter().cloned().collect();
    Json(matched)
}

/// Handler for GET /registrations/export.
async fn export_handler(
    State(state): State<AppState>,
    Query(filter): Query<RegistrationFilter>,
) -> impl IntoResponse {
    let desk = state.desk().lock().await;
    let records = desk.store().snapshot();
    let matched: Vec<_> = filter.apply(&records).into_iter().cloned().collect();

    match export_csv(&matched, desk.catalog()) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"registrations.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, "CSV export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /stats.
async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let desk = state.desk().lock().await;
    let records = desk.store().snapshot();
    Json(DeskStats::compute(&records, Utc::now().date_naive()))
}

/// Handler for GET /calendar.
async fn calendar_handler(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> impl IntoResponse {
    let desk = state.desk().lock().await;
    let records = desk.store().snapshot();
    Json(CalendarResponse {
        year: query.year,
        month: query.month,
        weeks: month_overview(&records, query.year, query.month),
    })
}
