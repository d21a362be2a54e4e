//! Application state for the shift registration API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::CapacityConfig;
use crate::engine::RegistrationDesk;
use crate::store::MemoryStore;

/// Shared application state.
///
/// The desk sits behind one async mutex: every submission runs eligibility
/// re-check, capacity commit, and persistence as a single critical section,
/// so two concurrent requests can never both take the last seat.
#[derive(Clone)]
pub struct AppState {
    desk: Arc<Mutex<RegistrationDesk<MemoryStore>>>,
}

impl AppState {
    /// Creates the application state with the given capacity seeds.
    pub fn new(config: &CapacityConfig) -> Self {
        Self {
            desk: Arc::new(Mutex::new(RegistrationDesk::new(config, MemoryStore::new()))),
        }
    }

    /// The registration desk guarding all engine state.
    pub fn desk(&self) -> &Mutex<RegistrationDesk<MemoryStore>> {
        &self.desk
    }
}
