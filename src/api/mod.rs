//! HTTP API module for the shift registration desk.
//!
//! This module provides the REST endpoints for evaluating availability,
//! committing registrations, and reading back the feed.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RegistrationRequest;
pub use response::{ApiError, AvailabilityResponse};
pub use state::AppState;
