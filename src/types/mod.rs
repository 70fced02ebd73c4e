//! Core types and identifiers for the room allocator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the allocator.
//!
//! # Overview
//!
//! - **Identifiers**: position-derived room identifiers and UUID-based epoch identifiers
//! - **Enums**: selection tiers and output formats
//! - **Configuration**: building shape and request limits with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use room_block_allocator::types::*;
//!
//! let room_id = RoomId::new(3, 4);
//! assert_eq!(room_id.to_string(), "3-4");
//!
//! let config = BookingConfig {
//!     total_floors: 4,
//!     rooms_per_floor: 6,
//!     top_floor_rooms: 4,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
