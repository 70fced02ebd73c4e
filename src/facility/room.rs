//! Bookable rooms
//!
//! This module contains the Room struct. A room's identity, number and
//! position are all derived from its floor and corridor index.

use crate::types::RoomId;
use serde::{Deserialize, Serialize};

/// Represents one bookable room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier derived from floor and index
    pub id: RoomId,
    /// Floor the room is on, starting at 1
    pub floor: u32,
    /// Human-facing room number (`floor * 100 + index`)
    pub number: u32,
    /// 1-based position along the floor's corridor
    pub index: u32,
    /// Whether the room has been booked
    pub booked: bool,
}

impl Room {
    /// Create an unbooked room at `index` on `floor`
    pub fn new(floor: u32, index: u32) -> Self {
        Self { id: RoomId::new(floor, index), floor, number: floor * 100 + index, index, booked: false }
    }

    /// Check if the room can still be booked
    pub fn is_available(&self) -> bool {
        !self.booked
    }
}
