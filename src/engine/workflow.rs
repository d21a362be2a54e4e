//! The registration workflow: form state, validation, and the commit path.
//!
//! A [`RegistrationDesk`] owns the catalog, the capacity allocator, and the
//! store for one kiosk session. Submissions run as a single step under the
//! caller's lock: eligibility re-check, capacity commit, record persistence.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MealSlotId, ShiftId};
use crate::config::CapacityConfig;
use crate::engine::capacity::CapacityAllocator;
use crate::engine::clock::{day_kind, decimal_hours};
use crate::engine::eligibility::{offered_meal_slots, offered_shifts, retain_meal_slot, retain_shift};
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRegistration, StoredRegistration};
use crate::store::RegistrationStore;

/// How long the submitted confirmation stays up before the form resets.
pub const SUBMIT_DISPLAY_SECS: i64 = 3;

/// What the kiosk is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormState {
    /// The form is accepting input.
    Editing,
    /// A registration was just committed; the confirmation is on screen.
    Submitted {
        /// When the registration was committed.
        at: DateTime<Utc>,
    },
}

/// The in-progress form input for one registrant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// The employee's full name.
    pub employee_name: String,
    /// The employee's email address.
    pub email: String,
    /// Self-reported entry time; defaults to the current wall time.
    pub entry_time: Option<NaiveTime>,
    /// The selected shift, if any.
    pub shift: Option<ShiftId>,
    /// The selected meal slot, if any.
    pub meal_slot: Option<MealSlotId>,
}

/// One kiosk session: catalog, capacity state, store, and form state.
#[derive(Debug)]
pub struct RegistrationDesk<S: RegistrationStore> {
    catalog: Catalog,
    allocator: CapacityAllocator,
    store: S,
    state: FormState,
}

impl<S: RegistrationStore> RegistrationDesk<S> {
    /// Opens a desk with the standard catalog and the given capacity seeds.
    pub fn new(config: &CapacityConfig, store: S) -> Self {
        Self {
            catalog: Catalog::standard(),
            allocator: CapacityAllocator::new(config),
            store,
            state: FormState::Editing,
        }
    }

    /// The shift and meal slot catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shared capacity state.
    pub fn allocator(&self) -> &CapacityAllocator {
        &self.allocator
    }

    /// Mutable capacity state, for staffing and ceiling changes.
    pub fn allocator_mut(&mut self) -> &mut CapacityAllocator {
        &mut self.allocator
    }

    /// The persistence store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// What the kiosk is currently showing.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validates and commits one registration.
    ///
    /// Eligibility is evaluated against `now` at the moment of submission,
    /// not against whatever the form showed earlier: a selection that the
    /// clock has since invalidated is rejected here. On success the desk
    /// switches to [`FormState::Submitted`] until [`Self::maybe_reset`].
    ///
    /// If the store append fails after the capacity commit, the error is
    /// returned but the counters are *not* rolled back: the seat was taken
    /// at commit time and occupancy must stay conservative.
    pub fn submit(
        &mut self,
        form: &RegistrationForm,
        now: DateTime<Utc>,
    ) -> EngineResult<StoredRegistration> {
        if let FormState::Submitted { .. } = self.state {
            return Err(EngineError::invalid_input(
                "form",
                "a submission is already being confirmed",
            ));
        }

        let employee_name = form.employee_name.trim();
        if employee_name.is_empty() {
            return Err(EngineError::invalid_input("employee_name", "must not be empty"));
        }
        let email = form.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(EngineError::invalid_input("email", "must be an email address"));
        }

        let date = now.date_naive();
        let day = day_kind(date);
        let entry_time = form.entry_time.unwrap_or_else(|| now.time());
        let entry = decimal_hours(entry_time);

        let offered = offered_shifts(&self.catalog, entry, day);
        let Some(shift_id) = retain_shift(form.shift, &offered) else {
            return Err(EngineError::invalid_input(
                "shift",
                "no shift selected, or the selected shift is no longer offered",
            ));
        };

        let shift = self.catalog.shift(shift_id);
        let offered_meals = offered_meal_slots(&self.catalog, shift);
        let Some(meal_id) = retain_meal_slot(form.meal_slot, &offered_meals) else {
            return Err(EngineError::invalid_input(
                "meal_slot",
                "no meal slot selected, or the selection does not match the shift",
            ));
        };

        let room = self.catalog.meal_slot(meal_id).room;
        self.allocator.commit(shift_id, meal_id, room)?;

        let registration = ShiftRegistration {
            employee_name: employee_name.to_string(),
            email: email.to_string(),
            entry_time,
            date,
            day_of_week: date.format("%A").to_string(),
            shift_id,
            meal_slot_id: meal_id,
            actual_entry_time: now.time(),
            timestamp: now,
        };

        // No rollback on append failure: the capacity commit stands.
        let stored = self.store.append(registration)?;
        self.state = FormState::Submitted { at: now };
        Ok(stored)
    }

    /// Returns the form to editing immediately.
    ///
    /// For callers that deliver the confirmation themselves (the HTTP
    /// surface returns it in the response body) instead of displaying it on
    /// the kiosk for [`SUBMIT_DISPLAY_SECS`].
    pub fn acknowledge(&mut self) {
        self.state = FormState::Editing;
    }

    /// Returns the form to editing once the confirmation has been shown for
    /// [`SUBMIT_DISPLAY_SECS`]. Returns whether a reset happened.
    pub fn maybe_reset(&mut self, now: DateTime<Utc>) -> bool {
        match self.state {
            FormState::Submitted { at }
                if now.signed_duration_since(at).num_seconds() >= SUBMIT_DISPLAY_SECS =>
            {
                self.state = FormState::Editing;
                true
            }
            _ => false,
        }
    }
}
