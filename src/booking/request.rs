//! Booking requests and confirmations

use crate::allocation::Selection;
use crate::booking::error::BookingError;
use crate::facility::Room;
use crate::types::{EpochId, SelectionTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated request for `n` rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    rooms: usize,
}

impl BookingRequest {
    /// Validate a raw room count against the per-request maximum
    ///
    /// Missing, zero, negative and too-large counts are all rejected.
    pub fn new(requested: Option<i64>, max: usize) -> Result<Self, BookingError> {
        match requested {
            Some(n) if n >= 1 && (n as u64) <= max as u64 => Ok(Self { rooms: n as usize }),
            _ => Err(BookingError::invalid_request(requested, max)),
        }
    }

    /// Validate a room count typed by a user; blank or non-numeric input is
    /// treated as a missing count
    pub fn parse(input: &str, max: usize) -> Result<Self, BookingError> {
        let trimmed = input.trim();
        let requested = if trimmed.is_empty() { None } else { trimmed.parse::<i64>().ok() };
        Self::new(requested, max)
    }

    /// Number of rooms requested
    pub fn rooms(&self) -> usize {
        self.rooms
    }
}

/// Result of a booking call
pub type BookingResult = Result<BookingConfirmation, BookingError>;

/// Rooms that were booked by one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Booked rooms as they are recorded in the inventory
    pub rooms: Vec<Room>,
    /// Search tier that found the rooms
    pub tier: SelectionTier,
    /// Cost of the selection within its tier
    pub cost: u32,
    /// Inventory epoch the booking was made in
    pub epoch: EpochId,
    /// When the booking was made
    pub booked_at: DateTime<Utc>,
}

impl BookingConfirmation {
    /// Build a confirmation from an applied selection
    pub(crate) fn from_selection(selection: Selection, epoch: EpochId) -> Self {
        let rooms = selection
            .rooms
            .into_iter()
            .map(|room| Room { booked: true, ..room })
            .collect();
        Self { rooms, tier: selection.tier, cost: selection.cost, epoch, booked_at: Utc::now() }
    }

    /// Human-facing numbers of the booked rooms
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.number).collect()
    }

    /// Message shown to the person booking, e.g. `Booked: 101, 102, 103`
    pub fn message(&self) -> String {
        let names: Vec<String> = self.rooms.iter().map(|r| r.number.to_string()).collect();
        format!("Booked: {}", names.join(", "))
    }
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
