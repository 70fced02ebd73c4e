//! Floor plans describing how many rooms each floor holds
//!
//! The reference building has ten floors of ten rooms, except the top floor
//! which only has seven. Arbitrary shapes are allowed for fixtures through
//! [`FloorPlan::from_counts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of floors in the reference building
pub const REFERENCE_FLOORS: u32 = 10;

/// Rooms on every floor below the top floor in the reference building
pub const REFERENCE_ROOMS_PER_FLOOR: u32 = 10;

/// Rooms on the top floor of the reference building
pub const REFERENCE_TOP_FLOOR_ROOMS: u32 = 7;

/// Largest room count a floor may have; room numbers are `floor * 100 + index`
pub const MAX_ROOMS_PER_FLOOR: u32 = 99;

/// Largest number of floors a building may have
pub const MAX_FLOORS: u32 = 1000;

/// Errors raised while building a floor plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorPlanError {
    /// The building has no floors
    #[error("A building needs at least one floor")]
    NoFloors,

    /// The building has more floors than supported
    #[error("Too many floors: {0} (maximum {MAX_FLOORS})")]
    TooManyFloors(usize),

    /// A floor has no rooms
    #[error("Floor {0} has no rooms")]
    EmptyFloor(u32),

    /// A floor has more rooms than room numbering supports
    #[error("Floor {floor} has {count} rooms (maximum {MAX_ROOMS_PER_FLOOR})")]
    TooManyRooms {
        /// Floor with the invalid count
        floor: u32,
        /// The invalid count
        count: u32,
    },

    /// The top floor is not smaller than the floors below it
    #[error("Top floor must have fewer rooms than the other floors ({top} >= {base})")]
    TopFloorNotSmaller {
        /// Rooms on the lower floors
        base: u32,
        /// Rooms on the top floor
        top: u32,
    },
}

/// Room counts for every floor of a building, floor 1 first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    room_counts: Vec<u32>,
}

impl FloorPlan {
    /// The reference building: 10 floors of 10 rooms with a 7-room top floor
    pub fn reference() -> Self {
        let room_counts = (1..=REFERENCE_FLOORS)
            .map(|floor| {
                if floor == REFERENCE_FLOORS {
                    REFERENCE_TOP_FLOOR_ROOMS
                } else {
                    REFERENCE_ROOMS_PER_FLOOR
                }
            })
            .collect();
        Self { room_counts }
    }

    /// Every floor gets `rooms_per_floor` rooms except the top floor, which gets
    /// the strictly smaller `top_floor_rooms`
    ///
    /// A single-floor building only uses `top_floor_rooms`.
    pub fn tiered(
        total_floors: u32,
        rooms_per_floor: u32,
        top_floor_rooms: u32,
    ) -> Result<Self, FloorPlanError> {
        if total_floors > 1 && top_floor_rooms >= rooms_per_floor {
            return Err(FloorPlanError::TopFloorNotSmaller {
                base: rooms_per_floor,
                top: top_floor_rooms,
            });
        }

        let room_counts = (1..=total_floors)
            .map(|floor| if floor == total_floors { top_floor_rooms } else { rooms_per_floor })
            .collect();
        Self::from_counts(room_counts)
    }

    /// Build a plan from explicit per-floor counts (index 0 is floor 1)
    pub fn from_counts(room_counts: Vec<u32>) -> Result<Self, FloorPlanError> {
        if room_counts.is_empty() {
            return Err(FloorPlanError::NoFloors);
        }
        if room_counts.len() > MAX_FLOORS as usize {
            return Err(FloorPlanError::TooManyFloors(room_counts.len()));
        }

        for (i, &count) in room_counts.iter().enumerate() {
            let floor = i as u32 + 1;
            if count == 0 {
                return Err(FloorPlanError::EmptyFloor(floor));
            }
            if count > MAX_ROOMS_PER_FLOOR {
                return Err(FloorPlanError::TooManyRooms { floor, count });
            }
        }

        Ok(Self { room_counts })
    }

    /// Number of floors in the building
    pub fn total_floors(&self) -> u32 {
        self.room_counts.len() as u32
    }

    /// Number of rooms on `floor`, or `None` if the floor does not exist
    pub fn rooms_on(&self, floor: u32) -> Option<u32> {
        if floor == 0 {
            return None;
        }
        self.room_counts.get(floor as usize - 1).copied()
    }

    /// Total rooms across all floors
    pub fn total_rooms(&self) -> usize {
        self.room_counts.iter().map(|&c| c as usize).sum()
    }

    /// Iterate `(floor, room_count)` pairs from floor 1 upwards
    pub fn floors(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.room_counts.iter().enumerate().map(|(i, &count)| (i as u32 + 1, count))
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_plan() {
        let plan = FloorPlan::reference();
        assert_eq!(plan.total_floors(), 10);
        assert_eq!(plan.total_rooms(), 97);
        assert_eq!(plan.rooms_on(1), Some(10));
        assert_eq!(plan.rooms_on(9), Some(10));
        assert_eq!(plan.rooms_on(10), Some(7));
        assert_eq!(plan.rooms_on(0), None);
        assert_eq!(plan.rooms_on(11), None);
    }

    #[test]
    fn test_tiered_requires_smaller_top_floor() {
        assert_eq!(
            FloorPlan::tiered(3, 5, 5),
            Err(FloorPlanError::TopFloorNotSmaller { base: 5, top: 5 })
        );
        assert!(FloorPlan::tiered(3, 5, 4).is_ok());

        // A single floor is its own top floor
        let single = FloorPlan::tiered(1, 10, 6).unwrap();
        assert_eq!(single.total_rooms(), 6);
    }

    #[test]
    fn test_from_counts_validation() {
        assert_eq!(FloorPlan::from_counts(vec![]), Err(FloorPlanError::NoFloors));
        assert_eq!(FloorPlan::from_counts(vec![3, 0, 2]), Err(FloorPlanError::EmptyFloor(2)));
        assert_eq!(
            FloorPlan::from_counts(vec![100]),
            Err(FloorPlanError::TooManyRooms { floor: 1, count: 100 })
        );
        assert!(FloorPlan::from_counts(vec![1; MAX_FLOORS as usize + 1]).is_err());

        let plan = FloorPlan::from_counts(vec![4, 4, 4]).unwrap();
        assert_eq!(plan.floors().collect::<Vec<_>>(), vec![(1, 4), (2, 4), (3, 4)]);
    }
}
