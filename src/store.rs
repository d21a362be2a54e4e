//! Registration persistence.
//!
//! The engine treats the store as an append-only feed of committed
//! registrations. Readers subscribe to a [`tokio::sync::watch`] channel and
//! receive the full fresh snapshot on every append, so a dropped notification
//! never leaves a reader behind.

use std::sync::RwLock;

use tokio::sync::watch;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRegistration, StoredRegistration};

/// Append-only persistence for committed registrations.
pub trait RegistrationStore {
    /// Appends a registration and returns it with its assigned id.
    fn append(&self, registration: ShiftRegistration) -> EngineResult<StoredRegistration>;

    /// Subscribes to snapshots of the full registration feed.
    ///
    /// The receiver always starts with the current snapshot; each append
    /// replaces it wholesale.
    fn subscribe(&self) -> watch::Receiver<Vec<StoredRegistration>>;
}

/// In-memory store backing a single desk session.
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<Vec<StoredRegistration>>,
    feed: watch::Sender<Vec<StoredRegistration>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (feed, _) = watch::channel(Vec::new());
        Self {
            records: RwLock::new(Vec::new()),
            feed,
        }
    }

    /// A snapshot of every stored registration, in append order.
    pub fn snapshot(&self) -> Vec<StoredRegistration> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationStore for MemoryStore {
    fn append(&self, registration: ShiftRegistration) -> EngineResult<StoredRegistration> {
        let stored = StoredRegistration {
            id: Uuid::new_v4(),
            registration,
        };

        let snapshot = {
            let mut records = self.records.write().map_err(|_| {
                EngineError::PersistenceFailure {
                    message: "registration feed lock poisoned".to_string(),
                }
            })?;
            records.push(stored.clone());
            records.clone()
        };

        // Send failure only means nobody is listening right now.
        let _ = self.feed.send(snapshot);

        Ok(stored)
    }

    fn subscribe(&self) -> watch::Receiver<Vec<StoredRegistration>> {
        self.feed.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

    use crate::catalog::{MealSlotId, ShiftId};

    fn sample(name: &str) -> ShiftRegistration {
        ShiftRegistration {
            employee_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            entry_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            day_of_week: "Monday".to_string(),
            shift_id: ShiftId::Shift1,
            meal_slot_id: MealSlotId::Meal1,
            actual_entry_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-12T09:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_append_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let first = store.append(sample("Ana")).unwrap();
        let second = store.append(sample("Bruno")).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_append_preserves_order() {
        let store = MemoryStore::new();
        store.append(sample("Ana")).unwrap();
        store.append(sample("Bruno")).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot[0].registration.employee_name, "Ana");
        assert_eq!(snapshot[1].registration.employee_name, "Bruno");
    }

    #[tokio::test]
    async fn test_subscribers_receive_full_snapshots() {
        let store = MemoryStore::new();
        let mut feed = store.subscribe();
        assert!(feed.borrow().is_empty());

        store.append(sample("Ana")).unwrap();
        store.append(sample("Bruno")).unwrap();

        // Even after missing the intermediate notification, the latest value
        // holds the complete feed.
        feed.changed().await.unwrap();
        let latest = feed.borrow_and_update().clone();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[1].registration.employee_name, "Bruno");
    }

    #[test]
    fn test_late_subscriber_sees_existing_records() {
        let store = MemoryStore::new();
        store.append(sample("Ana")).unwrap();
        let feed = store.subscribe();
        assert_eq!(feed.borrow().len(), 1);
    }
}
