//! The core rules: time utilities, eligibility, capacity allocation, and the
//! registration workflow.
//!
//! Data flows one way in (current time, catalog, employee input) and one way
//! out (offer sets, capacity snapshots, committed registrations).

mod capacity;
mod clock;
mod eligibility;
mod workflow;

pub use capacity::{CapacityAllocator, CapacityCounter};
pub use clock::{day_kind, decimal_hours, month_grid, parse_entry_time};
pub use eligibility::{
    current_shift, offered_meal_slots, offered_shifts, retain_meal_slot, retain_shift,
};
pub use workflow::{FormState, RegistrationDesk, RegistrationForm, SUBMIT_DISPLAY_SECS};
