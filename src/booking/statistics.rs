//! Statistics collection and reporting
//!
//! This module counts the outcomes of booking requests over one run.

use crate::booking::error::BookingError;
use crate::types::SelectionTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome counters for every request handled by a coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingStatistics {
    /// Total number of booking calls
    pub requests: usize,
    /// Bookings satisfied on a single floor
    pub same_floor_bookings: usize,
    /// Bookings satisfied by a cross-floor cluster
    pub cross_floor_bookings: usize,
    /// Requests rejected because the count was invalid
    pub invalid_requests: usize,
    /// Requests rejected because too few rooms were free
    pub infeasible_requests: usize,
    /// Rooms booked through successful requests
    pub rooms_booked: usize,
    /// Number of times occupancy was randomized
    pub randomizations: usize,
    /// Number of inventory resets
    pub resets: usize,
    /// When counting started
    pub started_at: DateTime<Utc>,
}

impl Default for BookingStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStatistics {
    /// Create empty statistics starting now
    pub fn new() -> Self {
        Self {
            requests: 0,
            same_floor_bookings: 0,
            cross_floor_bookings: 0,
            invalid_requests: 0,
            infeasible_requests: 0,
            rooms_booked: 0,
            randomizations: 0,
            resets: 0,
            started_at: Utc::now(),
        }
    }

    /// Record a successful booking
    pub fn record_success(&mut self, tier: SelectionTier, rooms: usize) {
        self.requests += 1;
        self.rooms_booked += rooms;
        match tier {
            SelectionTier::SameFloor => self.same_floor_bookings += 1,
            SelectionTier::CrossFloor => self.cross_floor_bookings += 1,
        }
    }

    /// Record a rejected booking
    pub fn record_failure(&mut self, error: &BookingError) {
        self.requests += 1;
        match error {
            BookingError::InvalidRequest { .. } => self.invalid_requests += 1,
            BookingError::Infeasible { .. } => self.infeasible_requests += 1,
            BookingError::Inventory(_) => {}
        }
    }

    /// Record a randomization of occupancy
    pub fn record_randomization(&mut self) {
        self.randomizations += 1;
    }

    /// Record an inventory reset
    pub fn record_reset(&mut self) {
        self.resets += 1;
    }

    /// Number of successful bookings
    pub fn successful_bookings(&self) -> usize {
        self.same_floor_bookings + self.cross_floor_bookings
    }

    /// Percentage of requests that succeeded
    pub fn success_percentage(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.successful_bookings() as f64 / self.requests as f64 * 100.0
        }
    }
}

impl fmt::Display for BookingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requests, {} booked ({} same floor, {} cross floor), {} invalid, {} infeasible, {} rooms booked ({:.1}% success)",
            self.requests,
            self.successful_bookings(),
            self.same_floor_bookings,
            self.cross_floor_bookings,
            self.invalid_requests,
            self.infeasible_requests,
            self.rooms_booked,
            self.success_percentage()
        )
    }
}
