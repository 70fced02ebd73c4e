//! Room selection algorithms
//!
//! This module contains the two search tiers used to satisfy a booking:
//!
//! - **Same floor** ([`find_same_floor`]): slides a window of `n` available
//!   rooms along each floor and keeps the one with the smallest index spread.
//! - **Cross floor** ([`find_across_floors`]): seeds a nearest-neighbour
//!   cluster at every available room and keeps the cluster with the smallest
//!   bounding-box cost.
//!
//! Both tiers are read-only over the [`Inventory`](crate::facility::Inventory);
//! applying a selection is the coordinator's job.
//!
//! # Usage Example
//!
//! ```rust
//! use room_block_allocator::allocation::{find_across_floors, find_same_floor};
//! use room_block_allocator::facility::{FloorPlan, Inventory};
//!
//! let inventory = Inventory::generate(FloorPlan::reference());
//! let selection = find_same_floor(&inventory, 3)
//!     .or_else(|| find_across_floors(&inventory, 3))
//!     .unwrap();
//! assert_eq!(selection.room_numbers(), vec![101, 102, 103]);
//! ```

pub mod cost;
pub mod cross_floor;
pub mod same_floor;

pub use cost::{cluster_cost, distance, travel_cost, Placement, FLOOR_CHANGE_WEIGHT};
pub use cross_floor::find_across_floors;
pub use same_floor::find_same_floor;

use crate::facility::Room;
use crate::types::{RoomId, SelectionTier};
use serde::{Deserialize, Serialize};

/// A set of rooms chosen by one of the search tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Tier that produced the selection
    pub tier: SelectionTier,
    /// Canonical room records, in the order the tier reports them
    pub rooms: Vec<Room>,
    /// Travel cost (same floor) or cluster cost (cross floor)
    pub cost: u32,
}

impl Selection {
    /// Identifiers of the selected rooms
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|r| r.id).collect()
    }

    /// Human-facing numbers of the selected rooms
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.number).collect()
    }

    /// Number of selected rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
