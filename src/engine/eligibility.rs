//! Eligibility rules: which shifts and meal slots are offerable.
//!
//! Offered sets depend only on the current time, the catalog, and the
//! selected shift; capacity is a separate concern handled by the allocator.

use rust_decimal::Decimal;

use crate::catalog::{Catalog, DayKind, MealSlotDefinition, MealSlotId, ShiftDefinition, ShiftId};

/// Shifts starting before this hour grant access to every meal slot.
const EARLY_SHIFT_CUTOFF: Decimal = Decimal::from_parts(11, 0, 0, false, 0);

/// Shifts starting before this hour (but at or after the early cutoff) only
/// reach meal slots from this hour onwards.
const MIDDAY_SHIFT_CUTOFF: Decimal = Decimal::from_parts(13, 0, 0, false, 0);

/// Returns the shifts offerable for an entry time on the given kind of day.
///
/// A shift is offered while `entry <= shift.end`: a shift already in
/// progress is still offered (arriving at 09:30 still offers the
/// 09:00 - 11:00 shift); only fully elapsed shifts are excluded.
pub fn offered_shifts<'a>(
    catalog: &'a Catalog,
    entry: Decimal,
    day: DayKind,
) -> Vec<&'a ShiftDefinition> {
    catalog
        .shifts_for(day)
        .filter(|shift| entry <= shift.end)
        .collect()
}

/// Returns the shift whose window contains the entry time, if any.
///
/// Uses `start <= entry < end`, a looser rule than [`offered_shifts`]; it is
/// for display emphasis ("you are currently in this shift") only and never
/// filters eligibility.
pub fn current_shift<'a>(
    catalog: &'a Catalog,
    entry: Decimal,
    day: DayKind,
) -> Option<&'a ShiftDefinition> {
    catalog
        .shifts_for(day)
        .find(|shift| shift.start <= entry && entry < shift.end)
}

/// Returns the meal slots offerable once a shift is selected.
///
/// Three tiers, first match wins:
/// 1. early shifts (`start < 11`): every meal slot;
/// 2. midday shifts (`start < 13`): only slots starting at or after 13:00;
/// 3. afternoon shifts: only slots fully contained in the shift window.
///
/// Tier 3 can be empty (no fixed slot fits inside the 15:30 - 18:00 shift);
/// callers must surface "no meal slots available" rather than fall back.
pub fn offered_meal_slots<'a>(
    catalog: &'a Catalog,
    shift: &ShiftDefinition,
) -> Vec<&'a MealSlotDefinition> {
    catalog
        .meal_slots()
        .iter()
        .filter(|meal| {
            if shift.start < EARLY_SHIFT_CUTOFF {
                true
            } else if shift.start < MIDDAY_SHIFT_CUTOFF {
                meal.start >= MIDDAY_SHIFT_CUTOFF
            } else {
                meal.start >= shift.start && meal.end <= shift.end
            }
        })
        .collect()
}

/// Clears a shift selection that is no longer in the offered set.
pub fn retain_shift(selected: Option<ShiftId>, offered: &[&ShiftDefinition]) -> Option<ShiftId> {
    selected.filter(|id| offered.iter().any(|shift| shift.id == *id))
}

/// Clears a meal slot selection that is no longer in the offered set.
pub fn retain_meal_slot(
    selected: Option<MealSlotId>,
    offered: &[&MealSlotDefinition],
) -> Option<MealSlotId> {
    selected.filter(|id| offered.iter().any(|meal| meal.id == *id))
}
