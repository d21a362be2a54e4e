//! Capacity seed configuration.
//!
//! Shift and meal windows are fixed catalog constants; what *is*
//! configurable are the capacity ceilings and initial room staffing. A YAML
//! file can override the defaults per id:
//!
//! ```yaml
//! default_shift_ceiling: 5
//! default_meal_ceiling: 4
//! shifts:
//!   shift3: 8
//! meal_slots:
//!   meal1: 6
//! rooms:
//!   room1: 1
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{MealSlotId, RoomId, ShiftId};
use crate::error::{EngineError, EngineResult};

fn default_shift_ceiling() -> u32 {
    5
}

fn default_meal_ceiling() -> u32 {
    4
}

/// Capacity ceilings and room staffing seeds for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Ceiling applied to shifts without an explicit override.
    #[serde(default = "default_shift_ceiling")]
    pub default_shift_ceiling: u32,
    /// Base ceiling applied to meal slots without an explicit override.
    #[serde(default = "default_meal_ceiling")]
    pub default_meal_ceiling: u32,
    /// Per-shift ceiling overrides.
    #[serde(default)]
    pub shifts: HashMap<ShiftId, u32>,
    /// Per-meal-slot base ceiling overrides.
    #[serde(default)]
    pub meal_slots: HashMap<MealSlotId, u32>,
    /// Initial room headcounts. Rooms not listed start empty.
    #[serde(default)]
    pub rooms: HashMap<RoomId, u32>,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            default_shift_ceiling: default_shift_ceiling(),
            default_meal_ceiling: default_meal_ceiling(),
            shifts: HashMap::new(),
            meal_slots: HashMap::new(),
            rooms: HashMap::new(),
        }
    }
}

impl CapacityConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiftdesk::config::CapacityConfig;
    ///
    /// let config = CapacityConfig::load("./config/capacity.yaml")?;
    /// # Ok::<(), shiftdesk::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The ceiling for a shift.
    pub fn shift_ceiling(&self, id: ShiftId) -> u32 {
        self.shifts
            .get(&id)
            .copied()
            .unwrap_or(self.default_shift_ceiling)
    }

    /// The base ceiling for a meal slot (before room-coverage throttling).
    pub fn meal_base_ceiling(&self, id: MealSlotId) -> u32 {
        self.meal_slots
            .get(&id)
            .copied()
            .unwrap_or(self.default_meal_ceiling)
    }

    /// The initial headcount for a room.
    pub fn room_seed(&self, id: RoomId) -> u32 {
        self.rooms.get(&id).copied().unwrap_or(0)
    }
}
