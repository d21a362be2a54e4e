//! The schedule catalog: shifts, meal slots, and break rooms.
//!
//! All windows are fixed constants defined once at process start. Ids are
//! closed enums rather than free-form strings, so an unrecognized id fails
//! loudly at the parsing boundary instead of silently falling back to a
//! placeholder label.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Whether a shift applies on weekdays or on weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "weekday"),
            DayKind::Weekend => write!(f, "weekend"),
        }
    }
}

/// Identifier for a work shift in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftId {
    /// Weekday 09:00 - 11:00.
    Shift1,
    /// Weekday 11:00 - 13:00.
    Shift2,
    /// Weekday 13:00 - 15:30.
    Shift3,
    /// Weekday 15:30 - 18:00.
    Shift4,
    /// Weekend 10:00 - 12:30.
    Weekend1,
    /// Weekend 12:30 - 15:00.
    Weekend2,
    /// Weekend 15:00 - 17:00.
    Weekend3,
}

impl ShiftId {
    /// Every shift id in catalog order.
    pub const ALL: [ShiftId; 7] = [
        ShiftId::Shift1,
        ShiftId::Shift2,
        ShiftId::Shift3,
        ShiftId::Shift4,
        ShiftId::Weekend1,
        ShiftId::Weekend2,
        ShiftId::Weekend3,
    ];

    /// The wire name of this id, e.g. `"shift1"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftId::Shift1 => "shift1",
            ShiftId::Shift2 => "shift2",
            ShiftId::Shift3 => "shift3",
            ShiftId::Shift4 => "shift4",
            ShiftId::Weekend1 => "weekend1",
            ShiftId::Weekend2 => "weekend2",
            ShiftId::Weekend3 => "weekend3",
        }
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownShift { id: s.to_string() })
    }
}

/// Identifier for a meal slot in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlotId {
    /// 12:30 - 13:00, room1.
    Meal1,
    /// 13:00 - 13:30, room2.
    Meal2,
    /// 13:30 - 14:00, room3.
    Meal3,
    /// 14:30 - 15:00, room4.
    Meal4,
    /// 15:00 - 15:30, room1.
    Meal5,
}

impl MealSlotId {
    /// Every meal slot id in catalog order.
    pub const ALL: [MealSlotId; 5] = [
        MealSlotId::Meal1,
        MealSlotId::Meal2,
        MealSlotId::Meal3,
        MealSlotId::Meal4,
        MealSlotId::Meal5,
    ];

    /// The wire name of this id, e.g. `"meal3"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MealSlotId::Meal1 => "meal1",
            MealSlotId::Meal2 => "meal2",
            MealSlotId::Meal3 => "meal3",
            MealSlotId::Meal4 => "meal4",
            MealSlotId::Meal5 => "meal5",
        }
    }
}

impl fmt::Display for MealSlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlotId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealSlotId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownMealSlot { id: s.to_string() })
    }
}

/// Identifier for a physical break room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomId {
    /// Break room 1 (serves meal1 and meal5).
    Room1,
    /// Break room 2.
    Room2,
    /// Break room 3.
    Room3,
    /// Break room 4.
    Room4,
}

impl RoomId {
    /// Every room id.
    pub const ALL: [RoomId; 4] = [RoomId::Room1, RoomId::Room2, RoomId::Room3, RoomId::Room4];

    /// The wire name of this id, e.g. `"room2"`.
    pub fn as_str(self) -> &'static str {
        match self {
            RoomId::Room1 => "room1",
            RoomId::Room2 => "room2",
            RoomId::Room3 => "room3",
            RoomId::Room4 => "room4",
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownRoom { id: s.to_string() })
    }
}

/// A fixed work-time window an employee selects once per registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftDefinition {
    /// The catalog id of the shift.
    pub id: ShiftId,
    /// Display label, e.g. `"09:00 - 11:00"`.
    pub label: &'static str,
    /// Start of the window as a decimal hour (09:30 is 9.5).
    pub start: Decimal,
    /// End of the window as a decimal hour.
    pub end: Decimal,
    /// Which days the shift applies on.
    pub day_kind: DayKind,
}

/// A fixed break-time window, mapped to exactly one physical room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSlotDefinition {
    /// The catalog id of the meal slot.
    pub id: MealSlotId,
    /// Display label, e.g. `"13:30 - 14:00"`.
    pub label: &'static str,
    /// Start of the window as a decimal hour.
    pub start: Decimal,
    /// End of the window as a decimal hour.
    pub end: Decimal,
    /// The break room this slot draws headcount from.
    pub room: RoomId,
}

/// The immutable schedule catalog, built once at process start.
///
/// Two distinct meal slots (meal1 and meal5) map to room1; that is
/// intentional overlap, both slots draw headcount from the same room.
#[derive(Debug, Clone)]
pub struct Catalog {
    shifts: Vec<ShiftDefinition>,
    meal_slots: Vec<MealSlotDefinition>,
}

fn shift(id: ShiftId, label: &'static str, start: Decimal, end: Decimal, day: DayKind) -> ShiftDefinition {
    ShiftDefinition {
        id,
        label,
        start,
        end,
        day_kind: day,
    }
}

fn meal(id: MealSlotId, label: &'static str, start: Decimal, end: Decimal, room: RoomId) -> MealSlotDefinition {
    MealSlotDefinition {
        id,
        label,
        start,
        end,
        room,
    }
}

impl Catalog {
    /// Builds the standard single-location catalog.
    pub fn standard() -> Self {
        let shifts = vec![
            shift(ShiftId::Shift1, "09:00 - 11:00", Decimal::new(9, 0), Decimal::new(11, 0), DayKind::Weekday),
            shift(ShiftId::Shift2, "11:00 - 13:00", Decimal::new(11, 0), Decimal::new(13, 0), DayKind::Weekday),
            shift(ShiftId::Shift3, "13:00 - 15:30", Decimal::new(13, 0), Decimal::new(155, 1), DayKind::Weekday),
            shift(ShiftId::Shift4, "15:30 - 18:00", Decimal::new(155, 1), Decimal::new(18, 0), DayKind::Weekday),
            shift(ShiftId::Weekend1, "10:00 - 12:30", Decimal::new(10, 0), Decimal::new(125, 1), DayKind::Weekend),
            shift(ShiftId::Weekend2, "12:30 - 15:00", Decimal::new(125, 1), Decimal::new(15, 0), DayKind::Weekend),
            shift(ShiftId::Weekend3, "15:00 - 17:00", Decimal::new(15, 0), Decimal::new(17, 0), DayKind::Weekend),
        ];

        let meal_slots = vec![
            meal(MealSlotId::Meal1, "12:30 - 13:00", Decimal::new(125, 1), Decimal::new(13, 0), RoomId::Room1),
            meal(MealSlotId::Meal2, "13:00 - 13:30", Decimal::new(13, 0), Decimal::new(135, 1), RoomId::Room2),
            meal(MealSlotId::Meal3, "13:30 - 14:00", Decimal::new(135, 1), Decimal::new(14, 0), RoomId::Room3),
            meal(MealSlotId::Meal4, "14:30 - 15:00", Decimal::new(145, 1), Decimal::new(15, 0), RoomId::Room4),
            meal(MealSlotId::Meal5, "15:00 - 15:30", Decimal::new(15, 0), Decimal::new(155, 1), RoomId::Room1),
        ];

        Self { shifts, meal_slots }
    }

    /// All shifts, weekday catalog first, in window order.
    pub fn all_shifts(&self) -> &[ShiftDefinition] {
        &self.shifts
    }

    /// The shifts applicable on the given kind of day, in window order.
    pub fn shifts_for(&self, day: DayKind) -> impl Iterator<Item = &ShiftDefinition> {
        self.shifts.iter().filter(move |s| s.day_kind == day)
    }

    /// Looks up a shift definition. Infallible: the id set is closed.
    pub fn shift(&self, id: ShiftId) -> &ShiftDefinition {
        self.shifts
            .iter()
            .find(|s| s.id == id)
            .unwrap_or_else(|| unreachable!("catalog covers every ShiftId"))
    }

    /// All meal slots in window order.
    pub fn meal_slots(&self) -> &[MealSlotDefinition] {
        &self.meal_slots
    }

    /// Looks up a meal slot definition. Infallible: the id set is closed.
    pub fn meal_slot(&self, id: MealSlotId) -> &MealSlotDefinition {
        self.meal_slots
            .iter()
            .find(|m| m.id == id)
            .unwrap_or_else(|| unreachable!("catalog covers every MealSlotId"))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_catalog_covers_every_id() {
        let catalog = Catalog::standard();
        for id in ShiftId::ALL {
            assert_eq!(catalog.shift(id).id, id);
        }
        for id in MealSlotId::ALL {
            assert_eq!(catalog.meal_slot(id).id, id);
        }
    }

    #[test]
    fn test_weekday_and_weekend_split() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.shifts_for(DayKind::Weekday).count(), 4);
        assert_eq!(catalog.shifts_for(DayKind::Weekend).count(), 3);
    }

    #[test]
    fn test_shift_windows() {
        let catalog = Catalog::standard();
        let shift3 = catalog.shift(ShiftId::Shift3);
        assert_eq!(shift3.start, dec("13"));
        assert_eq!(shift3.end, dec("15.5"));
        assert_eq!(shift3.label, "13:00 - 15:30");

        let weekend2 = catalog.shift(ShiftId::Weekend2);
        assert_eq!(weekend2.start, dec("12.5"));
        assert_eq!(weekend2.day_kind, DayKind::Weekend);
    }

    #[test]
    fn test_meal1_and_meal5_share_room1() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.meal_slot(MealSlotId::Meal1).room, RoomId::Room1);
        assert_eq!(catalog.meal_slot(MealSlotId::Meal5).room, RoomId::Room1);
    }

    #[test]
    fn test_id_round_trip_via_str() {
        for id in ShiftId::ALL {
            assert_eq!(ShiftId::from_str(id.as_str()).unwrap(), id);
        }
        for id in MealSlotId::ALL {
            assert_eq!(MealSlotId::from_str(id.as_str()).unwrap(), id);
        }
        for id in RoomId::ALL {
            assert_eq!(RoomId::from_str(id.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_ids_fail_loudly() {
        assert!(matches!(
            ShiftId::from_str("shift9"),
            Err(crate::error::EngineError::UnknownShift { .. })
        ));
        assert!(matches!(
            MealSlotId::from_str("lunch"),
            Err(crate::error::EngineError::UnknownMealSlot { .. })
        ));
        assert!(matches!(
            RoomId::from_str("room0"),
            Err(crate::error::EngineError::UnknownRoom { .. })
        ));
    }

    #[test]
    fn test_id_serde_wire_names() {
        let json = serde_json::to_string(&ShiftId::Weekend2).unwrap();
        assert_eq!(json, "\"weekend2\"");
        let id: MealSlotId = serde_json::from_str("\"meal4\"").unwrap();
        assert_eq!(id, MealSlotId::Meal4);
    }
}
