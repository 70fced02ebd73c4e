//! Booking orchestration
//!
//! This module turns a room count into booked rooms, and carries the error,
//! logging and statistics support around it.
//!
//! # Overview
//!
//! - **BookingCoordinator**: validates requests, runs the selection tiers in
//!   priority order and marks the chosen rooms booked
//! - **SharedBookingDesk**: mutex-guarded coordinator for callers on several threads
//! - **BookingError**: invalid and infeasible requests
//! - **BookingStatistics**: outcome counters
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use room_block_allocator::booking::*;
//!
//! let mut coordinator = BookingCoordinator::with_reference_building();
//!
//! let confirmation = coordinator.book(3).unwrap();
//! assert_eq!(confirmation.message(), "Booked: 101, 102, 103");
//!
//! let error = coordinator.book(6).unwrap_err();
//! assert_eq!(error.to_string(), "Please enter between 1 and 5 rooms.");
//! ```

pub mod coordinator;
pub mod error;
pub mod logging;
pub mod request;
pub mod shared;
pub mod statistics;

// Re-export all public types for convenience
pub use coordinator::*;
pub use error::*;
pub use logging::*;
pub use request::*;
pub use shared::*;
pub use statistics::*;
