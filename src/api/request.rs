//! Request types for the shift registration API.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{MealSlotId, ShiftId};
use crate::engine::{parse_entry_time, RegistrationForm};
use crate::error::EngineResult;

/// Body of `POST /registrations`.
///
/// Ids arrive as wire strings and are parsed against the closed catalog; an
/// unrecognized id is rejected rather than coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// The employee's full name.
    pub employee_name: String,
    /// The employee's email address.
    pub email: String,
    /// Self-reported entry time (`HH:MM`); defaults to the current wall time.
    #[serde(default)]
    pub entry_time: Option<String>,
    /// Registration date; defaults to today. An explicit date supports desk
    /// corrections entered after the fact.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The selected shift id, e.g. `"shift2"`.
    pub shift: String,
    /// The selected meal slot id, e.g. `"meal3"`.
    pub meal_slot: String,
}

impl RegistrationRequest {
    /// Parses the wire strings into a validated form.
    pub fn into_form(self) -> EngineResult<RegistrationForm> {
        let entry_time = self
            .entry_time
            .as_deref()
            .map(parse_entry_time)
            .transpose()?;

        Ok(RegistrationForm {
            employee_name: self.employee_name,
            email: self.email,
            entry_time,
            shift: Some(ShiftId::from_str(&self.shift)?),
            meal_slot: Some(MealSlotId::from_str(&self.meal_slot)?),
        })
    }
}

/// Query parameters for `GET /availability`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    /// The date to evaluate; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The entry time (`HH:MM`) to evaluate; defaults to the current time.
    #[serde(default)]
    pub entry_time: Option<String>,
    /// A selected shift id; when present the response includes the meal
    /// slots offered for it.
    #[serde(default)]
    pub shift: Option<String>,
}

/// Query parameters for `GET /calendar`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalendarQuery {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    use crate::error::EngineError;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            employee_name: "Ana Torres".to_string(),
            email: "ana.torres@example.com".to_string(),
            entry_time: Some("09:30".to_string()),
            date: None,
            shift: "shift1".to_string(),
            meal_slot: "meal2".to_string(),
        }
    }

    #[test]
    fn test_into_form_parses_ids_and_time() {
        let form = request().into_form().unwrap();
        assert_eq!(form.shift, Some(ShiftId::Shift1));
        assert_eq!(form.meal_slot, Some(MealSlotId::Meal2));
        assert_eq!(form.entry_time, NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn test_into_form_rejects_unknown_ids() {
        let mut bad_shift = request();
        bad_shift.shift = "shift9".to_string();
        assert!(matches!(
            bad_shift.into_form(),
            Err(EngineError::UnknownShift { .. })
        ));

        let mut bad_meal = request();
        bad_meal.meal_slot = "supper".to_string();
        assert!(matches!(
            bad_meal.into_form(),
            Err(EngineError::UnknownMealSlot { .. })
        ));
    }

    #[test]
    fn test_into_form_rejects_bad_entry_time() {
        let mut bad_time = request();
        bad_time.entry_time = Some("9h30".to_string());
        assert!(matches!(
            bad_time.into_form(),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "employee_name": "Ana Torres",
            "email": "ana.torres@example.com",
            "shift": "shift1",
            "meal_slot": "meal1"
        }"#;
        let request: RegistrationRequest = serde_json::from_str(json).unwrap();
        assert!(request.entry_time.is_none());
        assert!(request.date.is_none());
    }
}
