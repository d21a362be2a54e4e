//! Registration records.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{MealSlotId, ShiftId};

/// One committed shift registration.
///
/// Created once by the registration workflow and immutable thereafter; the
/// engine only ever appends records, never edits or deletes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRegistration {
    /// The employee's full name.
    pub employee_name: String,
    /// The employee's email address.
    pub email: String,
    /// The self-reported entry time (HH:MM wall time).
    pub entry_time: NaiveTime,
    /// The calendar date of the registration.
    pub date: NaiveDate,
    /// Weekday name for the date, e.g. `"Monday"`.
    pub day_of_week: String,
    /// The selected work shift.
    pub shift_id: ShiftId,
    /// The selected meal slot.
    pub meal_slot_id: MealSlotId,
    /// The wall time observed when the registration was committed.
    pub actual_entry_time: NaiveTime,
    /// When the registration was committed.
    pub timestamp: DateTime<Utc>,
}

/// A registration as held by the persistence store, with its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRegistration {
    /// Store-assigned record id.
    pub id: Uuid,
    /// The registration payload.
    #[serde(flatten)]
    pub registration: ShiftRegistration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShiftRegistration {
        ShiftRegistration {
            employee_name: "Ana Torres".to_string(),
            email: "ana.torres@example.com".to_string(),
            entry_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            day_of_week: "Monday".to_string(),
            shift_id: ShiftId::Shift1,
            meal_slot_id: MealSlotId::Meal2,
            actual_entry_time: NaiveTime::from_hms_opt(9, 31, 12).unwrap(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-12T09:31:12Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_registration_serde_round_trip() {
        let registration = sample();
        let json = serde_json::to_string(&registration).unwrap();
        let back: ShiftRegistration = serde_json::from_str(&json).unwrap();
        assert_eq!(registration, back);
    }

    #[test]
    fn test_registration_ids_use_wire_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"shift_id\":\"shift1\""));
        assert!(json.contains("\"meal_slot_id\":\"meal2\""));
    }

    #[test]
    fn test_stored_registration_flattens_payload() {
        let stored = StoredRegistration {
            id: Uuid::new_v4(),
            registration: sample(),
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert!(value.get("id").is_some());
        // Flattened: registration fields sit at the top level.
        assert_eq!(value.get("employee_name").unwrap(), "Ana Torres");
        assert!(value.get("registration").is_none());
    }
}
