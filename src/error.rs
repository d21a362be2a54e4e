//! Error types for the shift registration engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing eligibility,
//! allocating capacity, or committing a registration.

use thiserror::Error;

/// The main error type for the shift registration engine.
///
/// No variant is fatal to the process: invalid input, stale selections, and
/// capacity conflicts are all recoverable by re-editing and resubmitting.
///
/// # Example
///
/// ```
/// use shiftdesk::error::EngineError;
///
/// let error = EngineError::UnknownShift {
///     id: "shift9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift id: shift9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required field was missing, or a selection was no longer offerable
    /// at submit time. The form is not submitted and no counter is mutated.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that failed validation.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A selection pointed at a shift or meal slot at or above its ceiling.
    ///
    /// Selection is disabled pre-emptively in the offered sets, so this is
    /// only reachable when eligibility went stale between render and submit.
    /// Nothing is mutated when it occurs.
    #[error("Capacity exceeded for {target}")]
    CapacityExceeded {
        /// The shift or meal slot that was full, e.g. "shift shift2".
        target: String,
    },

    /// A shift id string did not name any catalog shift.
    #[error("Unknown shift id: {id}")]
    UnknownShift {
        /// The id that was not recognized.
        id: String,
    },

    /// A meal slot id string did not name any catalog meal slot.
    #[error("Unknown meal slot id: {id}")]
    UnknownMealSlot {
        /// The id that was not recognized.
        id: String,
    },

    /// A room id string did not name any catalog room.
    #[error("Unknown room id: {id}")]
    UnknownRoom {
        /// The id that was not recognized.
        id: String,
    },

    /// The persistence collaborator rejected or failed an append.
    ///
    /// Reported as a non-fatal, retryable failure. Capacity counters already
    /// mutated by the commit are not rolled back.
    #[error("Persistence failure: {message}")]
    PersistenceFailure {
        /// A description of the append failure.
        message: String,
    },

    /// Capacity configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Capacity configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Convenience constructor for [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
