//! Response types for the shift registration API.
//!
//! This module defines the error response structures and the read-side
//! payloads assembled by the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::catalog::{DayKind, ShiftId};
use crate::engine::FormState;
use crate::error::EngineError;
use crate::models::{MealAvailability, RoomStatus, ShiftAvailability};
use crate::report::DayCell;

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
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input for '{}': {}", field, message),
                    "The request contains invalid or no longer eligible data",
                ),
            },
            EngineError::UnknownShift { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_SHIFT",
                    format!("Unknown shift id: {}", id),
                    "The shift id does not name any catalog shift",
                ),
            },
            EngineError::UnknownMealSlot { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_MEAL_SLOT",
                    format!("Unknown meal slot id: {}", id),
                    "The meal slot id does not name any catalog meal slot",
                ),
            },
            EngineError::UnknownRoom { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_ROOM",
                    format!("Unknown room id: {}", id),
                    "The room id does not name any break room",
                ),
            },
            EngineError::CapacityExceeded { target } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "CAPACITY_EXCEEDED",
                    format!("Capacity exceeded for {}", target),
                    "The selection filled up between render and submit",
                ),
            },
            EngineError::PersistenceFailure { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "PERSISTENCE_FAILURE",
                    "Failed to persist the registration",
                    message,
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

/// Body of `GET /availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The date that was evaluated.
    pub date: NaiveDate,
    /// Weekday or weekend catalog in effect.
    pub day_kind: DayKind,
    /// The entry time that was evaluated.
    pub entry_time: NaiveTime,
    /// The shift whose window contains the entry time, for display emphasis.
    pub current_shift: Option<ShiftId>,
    /// Offered shifts with occupancy.
    pub shifts: Vec<ShiftAvailability>,
    /// Offered meal slots for the selected shift; absent when no shift was
    /// given, empty when the shift genuinely has no meal slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_slots: Option<Vec<MealAvailability>>,
    /// Headcount snapshot for every break room.
    pub rooms: Vec<RoomStatus>,
    /// Whether the kiosk form is editing or showing a confirmation.
    pub form_state: FormState,
}

/// Body of `GET /calendar`.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarResponse {
    /// The calendar year.
    pub year: i32,
    /// The calendar month.
    pub month: u32,
    /// Sunday-first week rows with per-day registration counts.
    pub weeks: Vec<Vec<DayCell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_capacity_error_maps_to_conflict() {
        let engine_error = EngineError::CapacityExceeded {
            target: "shift shift2".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "CAPACITY_EXCEEDED");
    }

    #[test]
    fn test_unknown_id_maps_to_bad_request() {
        let engine_error = EngineError::UnknownShift {
            id: "shift9".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_SHIFT");
    }

    #[test]
    fn test_persistence_error_maps_to_bad_gateway() {
        let engine_error = EngineError::PersistenceFailure {
            message: "store unavailable".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_GATEWAY);
    }
}
