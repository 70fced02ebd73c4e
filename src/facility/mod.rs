//! Building inventory management
//!
//! This module manages the building's rooms and how they are laid out.
//!
//! # Overview
//!
//! - **FloorPlan**: how many rooms each floor holds
//! - **Room**: a single bookable room tagged with floor and corridor index
//! - **Inventory**: every room of the current epoch, with availability queries
//!
//! # Usage Example
//!
//! ```rust
//! use room_block_allocator::facility::*;
//! use room_block_allocator::types::RoomId;
//!
//! let mut inventory = Inventory::generate(FloorPlan::reference());
//! assert_eq!(inventory.room_count(), 97);
//!
//! inventory.mark_booked(&[RoomId::new(1, 1)]).unwrap();
//! assert_eq!(inventory.available_count(), 96);
//! assert_eq!(inventory.available_on_floor(1)[0].number, 102);
//! ```

pub mod floor_plan;
pub mod inventory;
pub mod room;

// Re-export all public types for convenience
pub use floor_plan::{
    FloorPlan, FloorPlanError, MAX_FLOORS, MAX_ROOMS_PER_FLOOR, REFERENCE_FLOORS,
    REFERENCE_ROOMS_PER_FLOOR, REFERENCE_TOP_FLOOR_ROOMS,
};
pub use inventory::{Inventory, InventoryError};
pub use room::Room;
