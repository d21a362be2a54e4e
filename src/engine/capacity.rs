//! Capacity allocation across shifts, meal slots, and break rooms.
//!
//! A single [`CapacityAllocator`] instance is the source of truth for all
//! occupancy state; the workflow and every reporting surface share it rather
//! than keeping copies.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::catalog::{MealSlotDefinition, MealSlotId, RoomId, ShiftDefinition, ShiftId};
use crate::config::CapacityConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{MealAvailability, OccupancyStatus, RoomStatus, ShiftAvailability};

/// Occupancy against a configured ceiling. Increment-only: no cancellation
/// path exists, so `occupied` never decreases within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityCounter {
    /// Configured maximum occupancy. Always at least 1.
    pub ceiling: u32,
    /// Registrations committed against this counter so far.
    pub occupied: u32,
}

impl CapacityCounter {
    /// Creates a counter with no occupants. Ceilings below 1 are clamped.
    pub fn new(ceiling: u32) -> Self {
        Self {
            ceiling: ceiling.max(1),
            occupied: 0,
        }
    }

    /// Whether another occupant fits under the configured ceiling.
    pub fn has_space(&self) -> bool {
        self.occupied < self.ceiling
    }

    /// The status label against the configured ceiling.
    pub fn status(&self) -> OccupancyStatus {
        OccupancyStatus::for_occupancy(self.occupied, self.ceiling)
    }
}

/// Tracks per-shift and per-meal-slot occupancy and per-room headcounts,
/// and derives the throttled meal-slot ceiling from room coverage.
#[derive(Debug, Clone)]
pub struct CapacityAllocator {
    shifts: HashMap<ShiftId, CapacityCounter>,
    meal_slots: HashMap<MealSlotId, CapacityCounter>,
    rooms: HashMap<RoomId, u32>,
}

impl CapacityAllocator {
    /// Seeds counters for every catalog id from the capacity configuration.
    pub fn new(config: &CapacityConfig) -> Self {
        let shifts = ShiftId::ALL
            .into_iter()
            .map(|id| (id, CapacityCounter::new(config.shift_ceiling(id))))
            .collect();
        let meal_slots = MealSlotId::ALL
            .into_iter()
            .map(|id| (id, CapacityCounter::new(config.meal_base_ceiling(id))))
            .collect();
        let rooms = RoomId::ALL
            .into_iter()
            .map(|id| (id, config.room_seed(id)))
            .collect();

        Self {
            shifts,
            meal_slots,
            rooms,
        }
    }

    fn shift_entry(&self, id: ShiftId) -> &CapacityCounter {
        self.shifts
            .get(&id)
            .unwrap_or_else(|| unreachable!("allocator seeds every ShiftId"))
    }

    fn meal_entry(&self, id: MealSlotId) -> &CapacityCounter {
        self.meal_slots
            .get(&id)
            .unwrap_or_else(|| unreachable!("allocator seeds every MealSlotId"))
    }

    /// The counter for a shift.
    pub fn shift_counter(&self, id: ShiftId) -> CapacityCounter {
        *self.shift_entry(id)
    }

    /// The counter for a meal slot. Its `ceiling` is the *base* ceiling;
    /// selectability is judged against [`Self::effective_meal_ceiling`].
    pub fn meal_counter(&self, id: MealSlotId) -> CapacityCounter {
        *self.meal_entry(id)
    }

    /// Current headcount of a room.
    pub fn room_headcount(&self, id: RoomId) -> u32 {
        self.rooms.get(&id).copied().unwrap_or(0)
    }

    /// How many rooms currently have at least one attendant.
    pub fn rooms_staffed(&self) -> u32 {
        self.rooms.values().filter(|count| **count > 0).count() as u32
    }

    /// How many rooms currently have nobody in them.
    pub fn rooms_uncovered(&self) -> u32 {
        self.rooms.len() as u32 - self.rooms_staffed()
    }

    /// The dynamically throttled ceiling for a meal slot.
    ///
    /// Recomputed on every read; room headcounts can change between reads.
    /// While any room is uncovered the ceiling shrinks by one per uncovered
    /// room, never below 1. The throttle is global: it keys off overall room
    /// coverage, not the room this particular slot maps to, heuristically
    /// nudging future registrants toward slots whose rooms still need
    /// staffing. Coverage is a target, not an enforced invariant.
    pub fn effective_meal_ceiling(&self, id: MealSlotId) -> u32 {
        let base = self.meal_entry(id).ceiling;
        let uncovered = self.rooms_uncovered();
        if uncovered == 0 {
            base
        } else {
            base.saturating_sub(uncovered).max(1)
        }
    }

    /// Whether a shift is selectable (strictly below its ceiling).
    pub fn shift_has_space(&self, id: ShiftId) -> bool {
        self.shift_entry(id).has_space()
    }

    /// Whether a meal slot is selectable (strictly below its *effective*
    /// ceiling).
    pub fn meal_has_space(&self, id: MealSlotId) -> bool {
        self.meal_entry(id).occupied < self.effective_meal_ceiling(id)
    }

    /// Applies one committed registration: increments the shift counter, the
    /// meal slot counter, and the mapped room headcount.
    ///
    /// The capacity re-check and the three increments form one step; if
    /// either counter is at its ceiling nothing is mutated and
    /// [`EngineError::CapacityExceeded`] is returned.
    pub fn commit(&mut self, shift: ShiftId, meal: MealSlotId, room: RoomId) -> EngineResult<()> {
        if !self.shift_has_space(shift) {
            return Err(EngineError::CapacityExceeded {
                target: format!("shift {shift}"),
            });
        }
        if !self.meal_has_space(meal) {
            return Err(EngineError::CapacityExceeded {
                target: format!("meal slot {meal}"),
            });
        }

        if let Some(counter) = self.shifts.get_mut(&shift) {
            counter.occupied += 1;
        }
        if let Some(counter) = self.meal_slots.get_mut(&meal) {
            counter.occupied += 1;
        }
        if let Some(headcount) = self.rooms.get_mut(&room) {
            *headcount += 1;
        }
        Ok(())
    }

    /// Reconfigures a shift ceiling. Values below 1 are clamped.
    pub fn set_shift_ceiling(&mut self, id: ShiftId, ceiling: u32) {
        if let Some(counter) = self.shifts.get_mut(&id) {
            counter.ceiling = ceiling.max(1);
        }
    }

    /// Reconfigures a meal slot base ceiling. Values below 1 are clamped.
    pub fn set_meal_base_ceiling(&mut self, id: MealSlotId, ceiling: u32) {
        if let Some(counter) = self.meal_slots.get_mut(&id) {
            counter.ceiling = ceiling.max(1);
        }
    }

    /// Overrides a room headcount (staffing changes outside registrations).
    pub fn set_room_headcount(&mut self, id: RoomId, headcount: u32) {
        if let Some(count) = self.rooms.get_mut(&id) {
            *count = headcount;
        }
    }

    /// The presentation snapshot for one shift.
    pub fn shift_availability(&self, definition: &ShiftDefinition) -> ShiftAvailability {
        let counter = self.shift_entry(definition.id);
        ShiftAvailability {
            id: definition.id,
            label: definition.label.to_string(),
            start: definition.start,
            end: definition.end,
            day_kind: definition.day_kind,
            occupied: counter.occupied,
            ceiling: counter.ceiling,
            ratio: ratio(counter.occupied, counter.ceiling),
            status: counter.status(),
        }
    }

    /// The presentation snapshot for one meal slot, judged against the
    /// effective (throttled) ceiling.
    pub fn meal_availability(&self, definition: &MealSlotDefinition) -> MealAvailability {
        let counter = self.meal_entry(definition.id);
        let effective = self.effective_meal_ceiling(definition.id);
        MealAvailability {
            id: definition.id,
            label: definition.label.to_string(),
            start: definition.start,
            end: definition.end,
            room: definition.room,
            occupied: counter.occupied,
            base_ceiling: counter.ceiling,
            effective_ceiling: effective,
            ratio: ratio(counter.occupied, effective),
            status: OccupancyStatus::for_occupancy(counter.occupied, effective),
        }
    }

    /// Headcount snapshot for every room, in catalog order.
    pub fn room_snapshot(&self) -> Vec<RoomStatus> {
        RoomId::ALL
            .into_iter()
            .map(|id| {
                let headcount = self.room_headcount(id);
                RoomStatus {
                    id,
                    headcount,
                    staffed: headcount > 0,
                }
            })
            .collect()
    }

}

fn ratio(occupied: u32, ceiling: u32) -> Decimal {
    Decimal::from(occupied) / Decimal::from(ceiling.max(1))
}
