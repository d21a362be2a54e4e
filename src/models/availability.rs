//! Presentation shapes produced for the rendering layer: offered entries with
//! occupancy ratios and status labels, plus the room snapshot.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{DayKind, MealSlotId, RoomId, ShiftId};

/// Occupancy status label for a shift or meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyStatus {
    /// Below 80% of the ceiling.
    Available,
    /// At or above 80% of the ceiling, but below it.
    NearlyFull,
    /// At or above the ceiling; selection is disabled.
    Full,
}

impl OccupancyStatus {
    /// Grades an occupancy count against a ceiling.
    ///
    /// Computed in integers to avoid float thresholds: nearly-full is
    /// `occupied * 10 >= ceiling * 8`.
    pub fn for_occupancy(occupied: u32, ceiling: u32) -> Self {
        if occupied >= ceiling {
            OccupancyStatus::Full
        } else if u64::from(occupied) * 10 >= u64::from(ceiling) * 8 {
            OccupancyStatus::NearlyFull
        } else {
            OccupancyStatus::Available
        }
    }

    /// Whether selection should be disabled.
    pub fn is_full(self) -> bool {
        matches!(self, OccupancyStatus::Full)
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyStatus::Available => write!(f, "available"),
            OccupancyStatus::NearlyFull => write!(f, "nearly full"),
            OccupancyStatus::Full => write!(f, "full"),
        }
    }
}

/// An offered shift with its occupancy snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAvailability {
    /// The shift id.
    pub id: ShiftId,
    /// Display label, e.g. `"09:00 - 11:00"`.
    pub label: String,
    /// Window start as a decimal hour.
    pub start: Decimal,
    /// Window end as a decimal hour.
    pub end: Decimal,
    /// Weekday or weekend applicability.
    pub day_kind: DayKind,
    /// Registrations committed against this shift.
    pub occupied: u32,
    /// Configured ceiling.
    pub ceiling: u32,
    /// `occupied / ceiling`.
    pub ratio: Decimal,
    /// Status label for rendering.
    pub status: OccupancyStatus,
}

/// An offered meal slot with its occupancy snapshot and derived ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAvailability {
    /// The meal slot id.
    pub id: MealSlotId,
    /// Display label, e.g. `"13:30 - 14:00"`.
    pub label: String,
    /// Window start as a decimal hour.
    pub start: Decimal,
    /// Window end as a decimal hour.
    pub end: Decimal,
    /// The break room this slot draws headcount from.
    pub room: RoomId,
    /// Registrations committed against this slot.
    pub occupied: u32,
    /// Configured base ceiling before throttling.
    pub base_ceiling: u32,
    /// Ceiling after room-coverage throttling; recomputed on every read.
    pub effective_ceiling: u32,
    /// `occupied / effective_ceiling`.
    pub ratio: Decimal,
    /// Status label, judged against the effective ceiling.
    pub status: OccupancyStatus,
}

/// Headcount snapshot for one break room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    /// The room id.
    pub id: RoomId,
    /// People currently in the room.
    pub headcount: u32,
    /// Whether at least one attendant is present.
    pub staffed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_grading() {
        assert_eq!(OccupancyStatus::for_occupancy(0, 5), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::for_occupancy(3, 5), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::for_occupancy(4, 5), OccupancyStatus::NearlyFull);
        assert_eq!(OccupancyStatus::for_occupancy(5, 5), OccupancyStatus::Full);
        assert_eq!(OccupancyStatus::for_occupancy(7, 5), OccupancyStatus::Full);
    }

    #[test]
    fn test_status_grading_small_ceilings() {
        // ceiling 1: anything occupied is full.
        assert_eq!(OccupancyStatus::for_occupancy(0, 1), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::for_occupancy(1, 1), OccupancyStatus::Full);
        // ceiling 4: 80% hits exactly at 3.2, so 3 is still available.
        assert_eq!(OccupancyStatus::for_occupancy(3, 4), OccupancyStatus::Available);
        assert_eq!(OccupancyStatus::for_occupancy(4, 4), OccupancyStatus::Full);
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&OccupancyStatus::NearlyFull).unwrap();
        assert_eq!(json, "\"nearly_full\"");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OccupancyStatus::NearlyFull.to_string(), "nearly full");
        assert!(OccupancyStatus::Full.is_full());
        assert!(!OccupancyStatus::Available.is_full());
    }
}
