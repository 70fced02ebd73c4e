//! Room inventory for one building epoch
//!
//! The inventory owns every room of the building in generation order
//! (floor-major, then index-ascending) together with an id lookup index.

use crate::facility::{floor_plan::FloorPlan, room::Room};
use crate::types::{EpochId, RoomId};
use rand::Rng;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised when mutating the inventory
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// The room does not exist in this inventory
    #[error("Room {0} does not exist in this building")]
    UnknownRoom(RoomId),

    /// The room is already booked
    #[error("Room {0} is already booked")]
    AlreadyBooked(RoomId),

    /// The same room appears twice in one request
    #[error("Room {0} was requested more than once")]
    DuplicateRoom(RoomId),

    /// Occupancy probability outside 0.0..=1.0
    #[error("Invalid occupancy probability: {0} (must be between 0.0 and 1.0)")]
    InvalidProbability(f64),
}

/// All rooms of the building for the current epoch
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    epoch: EpochId,
    plan: FloorPlan,
    rooms: Vec<Room>,
    #[serde(skip)]
    room_index: HashMap<RoomId, usize>,
}

impl Inventory {
    /// Generate a fresh, fully available inventory for `plan`
    pub fn generate(plan: FloorPlan) -> Self {
        let rooms = Self::generate_rooms(&plan);
        let room_index = Self::build_index(&rooms);
        let epoch = EpochId::new();

        info!(
            "Generated inventory {} with {} rooms across {} floors",
            epoch,
            rooms.len(),
            plan.total_floors()
        );

        Self { epoch, plan, rooms, room_index }
    }

    fn generate_rooms(plan: &FloorPlan) -> Vec<Room> {
        let mut rooms = Vec::with_capacity(plan.total_rooms());
        for (floor, count) in plan.floors() {
            for index in 1..=count {
                rooms.push(Room::new(floor, index));
            }
        }
        rooms
    }

    fn build_index(rooms: &[Room]) -> HashMap<RoomId, usize> {
        rooms.iter().enumerate().map(|(i, room)| (room.id, i)).collect()
    }

    /// Identifier of the current epoch
    pub fn epoch(&self) -> EpochId {
        self.epoch
    }

    /// Floor plan the inventory was generated from
    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Number of floors in the building
    pub fn total_floors(&self) -> u32 {
        self.plan.total_floors()
    }

    /// All rooms in generation order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Get a room by ID
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.room_index.get(&id).and_then(|&i| self.rooms.get(i))
    }

    /// Unbooked rooms in generation order
    pub fn available(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.is_available()).collect()
    }

    /// All rooms on `floor` in index order; empty if the floor does not exist
    pub fn rooms_on_floor(&self, floor: u32) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor == floor).collect()
    }

    /// Unbooked rooms on `floor` in index order
    pub fn available_on_floor(&self, floor: u32) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor == floor && r.is_available()).collect()
    }

    /// Total number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of unbooked rooms
    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_available()).count()
    }

    /// Number of booked rooms
    pub fn booked_count(&self) -> usize {
        self.room_count() - self.available_count()
    }

    /// Fraction of rooms that are booked
    pub fn occupancy_rate(&self) -> f64 {
        if self.rooms.is_empty() {
            0.0
        } else {
            self.booked_count() as f64 / self.room_count() as f64
        }
    }

    /// Mark every room in `ids` as booked
    ///
    /// All ids are checked before anything changes: if any id is unknown,
    /// already booked, or repeated, the inventory is left untouched.
    pub fn mark_booked(&mut self, ids: &[RoomId]) -> Result<(), InventoryError> {
        let mut positions = Vec::with_capacity(ids.len());
        let mut seen = HashSet::with_capacity(ids.len());

        for &id in ids {
            if !seen.insert(id) {
                return Err(InventoryError::DuplicateRoom(id));
            }
            let &pos = self.room_index.get(&id).ok_or(InventoryError::UnknownRoom(id))?;
            if self.rooms[pos].booked {
                return Err(InventoryError::AlreadyBooked(id));
            }
            positions.push(pos);
        }

        for pos in positions {
            self.rooms[pos].booked = true;
        }
        debug!("Marked {} rooms booked", ids.len());
        Ok(())
    }

    /// Re-roll the occupancy of every room: each room ends up booked with
    /// `probability`, independently of its previous state
    ///
    /// Returns the number of rooms booked afterwards.
    pub fn apply_random_occupancy<R: Rng + ?Sized>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<usize, InventoryError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(InventoryError::InvalidProbability(probability));
        }

        for room in &mut self.rooms {
            room.booked = rng.gen_bool(probability);
        }

        let booked = self.booked_count();
        info!(
            "Applied random occupancy (p = {:.2}): {} of {} rooms booked",
            probability,
            booked,
            self.room_count()
        );
        Ok(booked)
    }

    /// Replace every room with a fresh, unbooked set and start a new epoch
    pub fn reset(&mut self) {
        let previous = self.epoch;
        self.rooms = Self::generate_rooms(&self.plan);
        self.room_index = Self::build_index(&self.rooms);
        self.epoch = EpochId::new();
        info!("Inventory reset: epoch {} replaced by {}", previous, self.epoch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn small_inventory() -> Inventory {
        Inventory::generate(FloorPlan::from_counts(vec![3, 3, 2]).unwrap())
    }

    #[test]
    fn test_generate_reference_inventory() {
        let inventory = Inventory::generate(FloorPlan::reference());

        assert_eq!(inventory.room_count(), 97);
        assert_eq!(inventory.available_count(), 97);
        assert_eq!(inventory.total_floors(), 10);

        // Generation order is floor-major, index-ascending
        let first = &inventory.rooms()[0];
        assert_eq!((first.floor, first.index, first.number), (1, 1, 101));
        let last = inventory.rooms().last().unwrap();
        assert_eq!((last.floor, last.index, last.number), (10, 7, 1007));

        // Every floor's indices are contiguous from 1
        for floor in 1..=10 {
            let indices: Vec<u32> = inventory.rooms_on_floor(floor).iter().map(|r| r.index).collect();
            let expected: Vec<u32> = (1..=indices.len() as u32).collect();
            assert_eq!(indices, expected);
        }
        assert_eq!(inventory.rooms_on_floor(10).len(), 7);
        assert!(inventory.rooms_on_floor(11).is_empty());
        assert!(inventory.rooms_on_floor(0).is_empty());
    }

    #[test]
    fn test_room_ids_are_unique() {
        let inventory = Inventory::generate(FloorPlan::reference());
        let ids: HashSet<RoomId> = inventory.rooms().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), inventory.room_count());
    }

    #[test]
    fn test_mark_booked_updates_availability() {
        let mut inventory = small_inventory();
        let ids = [RoomId::new(1, 2), RoomId::new(3, 1)];

        inventory.mark_booked(&ids).unwrap();

        assert_eq!(inventory.booked_count(), 2);
        assert!(inventory.get(RoomId::new(1, 2)).unwrap().booked);
        assert!(inventory.available().iter().all(|r| !ids.contains(&r.id)));
        assert_eq!(
            inventory.available_on_floor(1).iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_mark_booked_is_all_or_nothing() {
        let mut inventory = small_inventory();
        inventory.mark_booked(&[RoomId::new(2, 2)]).unwrap();

        let err = inventory.mark_booked(&[RoomId::new(1, 1), RoomId::new(2, 2)]).unwrap_err();
        assert_eq!(err, InventoryError::AlreadyBooked(RoomId::new(2, 2)));
        assert!(!inventory.get(RoomId::new(1, 1)).unwrap().booked);

        let err = inventory.mark_booked(&[RoomId::new(1, 1), RoomId::new(3, 3)]).unwrap_err();
        assert_eq!(err, InventoryError::UnknownRoom(RoomId::new(3, 3)));

        let err = inventory.mark_booked(&[RoomId::new(1, 1), RoomId::new(1, 1)]).unwrap_err();
        assert_eq!(err, InventoryError::DuplicateRoom(RoomId::new(1, 1)));

        assert_eq!(inventory.booked_count(), 1);
    }

    #[test]
    fn test_random_occupancy_is_reproducible_with_seed() {
        let mut a = Inventory::generate(FloorPlan::reference());
        let mut b = Inventory::generate(FloorPlan::reference());

        let booked_a = a.apply_random_occupancy(0.3, &mut StdRng::seed_from_u64(7)).unwrap();
        let booked_b = b.apply_random_occupancy(0.3, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(booked_a, booked_b);
        let flags_a: Vec<bool> = a.rooms().iter().map(|r| r.booked).collect();
        let flags_b: Vec<bool> = b.rooms().iter().map(|r| r.booked).collect();
        assert_eq!(flags_a, flags_b);
    }

    #[test]
    fn test_random_occupancy_extremes_and_validation() {
        let mut inventory = small_inventory();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(inventory.apply_random_occupancy(1.0, &mut rng).unwrap(), 8);
        assert_eq!(inventory.apply_random_occupancy(0.0, &mut rng).unwrap(), 0);
        assert_eq!(
            inventory.apply_random_occupancy(1.5, &mut rng),
            Err(InventoryError::InvalidProbability(1.5))
        );
    }

    #[test]
    fn test_reset_starts_new_epoch() {
        let mut inventory = small_inventory();
        let epoch = inventory.epoch();
        inventory.mark_booked(&[RoomId::new(1, 1)]).unwrap();

        inventory.reset();

        assert_ne!(inventory.epoch(), epoch);
        assert_eq!(inventory.available_count(), 8);
        assert_eq!(inventory.occupancy_rate(), 0.0);
        assert!(inventory.get(RoomId::new(3, 2)).is_some());
    }
}
