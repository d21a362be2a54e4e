//! Domain records and presentation shapes for the shift registration engine.

mod availability;
mod registration;

pub use availability::{MealAvailability, OccupancyStatus, RoomStatus, ShiftAvailability};
pub use registration::{ShiftRegistration, StoredRegistration};
