//! Room Block Allocator
//!
//! Books groups of rooms from a fixed building inventory so that the people
//! staying in them travel as little as possible between rooms.
//!
//! # Overview
//!
//! A request asks for between one and five rooms. The allocator first looks
//! for the tightest run of free rooms on a single floor; only when no floor
//! can hold the whole group does it search for the cheapest cluster spanning
//! several floors, where changing floors costs twice as much as walking one
//! room along a corridor.
//!
//! ## Key Features
//!
//! - **Two-tier selection**: same-floor sliding window, then seeded cross-floor clusters
//! - **All-or-nothing bookings**: either every selected room is booked or none is
//! - **Configurable buildings**: floor counts and request limits from JSON or CLI
//! - **Maintenance operations**: random occupancy and full resets for demos
//! - **Thread-safe desk**: a mutex-guarded coordinator for multi-threaded callers
//!
//! ## Quick Start
//!
//! ```rust
//! use room_block_allocator::*;
//!
//! let mut coordinator = BookingCoordinator::with_reference_building();
//!
//! let confirmation = coordinator.book(3)?;
//! assert_eq!(confirmation.room_numbers(), vec![101, 102, 103]);
//! assert_eq!(coordinator.list_available().len(), 94);
//! # Ok::<(), BookingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`facility`]: Floor plans, rooms and the inventory
//! - [`allocation`]: Same-floor and cross-floor selection
//! - [`booking`]: Coordinator, errors, statistics and logging
//! - [`display`]: Text rendering of the building
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Facility   │    │ Allocation  │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ FloorPlan   │◄───┤ Same Floor  │
//! │ Enums       │    │ Room        │    │ Cross Floor │
//! │ Config      │    │ Inventory   │    │ Cost        │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                           ▲                   ▲
//!                           │                   │
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │  Display    │    │  Booking    │
//!                    │             │    │             │
//!                    │ Room grid   │    │ Coordinator │
//!                    │             │    │ Shared desk │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod allocation;
pub mod booking;
pub mod display;
pub mod facility;
pub mod types;

// Core types and identifiers
pub use types::{
    BookingConfig,
    ConfigValidationError,
    EpochId,
    OutputFormat,
    // Identifiers
    RoomId,
    // Enums
    SelectionTier,
};

// Facility types and functionality
pub use facility::{FloorPlan, FloorPlanError, Inventory, InventoryError, Room};

// Selection algorithms
pub use allocation::{find_across_floors, find_same_floor, Selection};

// Booking types and functionality
pub use booking::{
    BookingConfirmation, BookingCoordinator, BookingError, BookingRequest, BookingResult,
    BookingStatistics, LoggingConfig, SharedBookingDesk,
};
