//! Thread-safe access to a booking coordinator
//!
//! Selecting rooms and marking them booked are two steps; if two callers
//! interleaved them, both could pick the same free room. The desk holds the
//! coordinator behind a single mutex so every operation runs to completion
//! before the next one starts.

use crate::booking::{
    coordinator::BookingCoordinator, error::BookingError, request::BookingResult,
    statistics::BookingStatistics,
};
use crate::facility::Room;
use rand::Rng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a coordinator shared between threads
#[derive(Debug, Clone)]
pub struct SharedBookingDesk {
    inner: Arc<Mutex<BookingCoordinator>>,
}

impl SharedBookingDesk {
    /// Share `coordinator` between callers
    pub fn new(coordinator: BookingCoordinator) -> Self {
        Self { inner: Arc::new(Mutex::new(coordinator)) }
    }

    fn lock(&self) -> MutexGuard<'_, BookingCoordinator> {
        // Every coordinator operation leaves the inventory consistent, so a
        // panic in another holder does not invalidate it
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Book `n` rooms
    pub fn book(&self, n: i64) -> BookingResult {
        self.lock().book(n)
    }

    /// Book a room count typed by a user
    pub fn book_input(&self, input: &str) -> BookingResult {
        self.lock().book_input(input)
    }

    /// Re-roll every room's occupancy
    pub fn apply_random_occupancy<R: Rng + ?Sized>(
        &self,
        probability: f64,
        rng: &mut R,
    ) -> Result<usize, BookingError> {
        self.lock().apply_random_occupancy(probability, rng)
    }

    /// Regenerate the inventory
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Snapshot of the unbooked rooms
    pub fn list_available(&self) -> Vec<Room> {
        self.lock().list_available().into_iter().cloned().collect()
    }

    /// Snapshot of every room on `floor`
    pub fn list_by_floor(&self, floor: u32) -> Vec<Room> {
        self.lock().list_by_floor(floor).into_iter().cloned().collect()
    }

    /// Snapshot of the outcome counters
    pub fn statistics(&self) -> BookingStatistics {
        self.lock().statistics().clone()
    }

    /// Run `f` with exclusive access to the coordinator
    pub fn with_coordinator<T>(&self, f: impl FnOnce(&mut BookingCoordinator) -> T) -> T {
        f(&mut self.lock())
    }
}
