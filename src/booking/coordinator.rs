//! Booking coordinator
//!
//! The coordinator owns the inventory and resolves one request at a time:
//! validate, search the same-floor tier, fall back to the cross-floor tier,
//! then mark the chosen rooms booked. Every mutating operation takes
//! `&mut self`, so a request is always fully applied before the next begins.

use crate::allocation::{find_across_floors, find_same_floor, Selection};
use crate::booking::{
    error::BookingError,
    request::{BookingConfirmation, BookingRequest, BookingResult},
    statistics::BookingStatistics,
};
use crate::booking_event;
use crate::facility::{FloorPlan, Inventory, Room};
use crate::types::{config::limits, BookingConfig, ConfigValidationError};
use rand::Rng;
use tracing::{debug, instrument};

/// Owns the building inventory and applies booking requests to it
#[derive(Debug, Clone)]
pub struct BookingCoordinator {
    inventory: Inventory,
    max_rooms_per_request: usize,
    pending_request: Option<BookingRequest>,
    statistics: BookingStatistics,
}

impl BookingCoordinator {
    /// Create a coordinator over an existing inventory
    pub fn new(inventory: Inventory, max_rooms_per_request: usize) -> Self {
        Self {
            inventory,
            max_rooms_per_request,
            pending_request: None,
            statistics: BookingStatistics::new(),
        }
    }

    /// Coordinator for the reference building with the reference request limit
    pub fn with_reference_building() -> Self {
        Self::new(Inventory::generate(FloorPlan::reference()), limits::MAX_ROOMS_PER_REQUEST)
    }

    /// Build a coordinator from validated configuration
    pub fn from_config(config: &BookingConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        let plan = config.floor_plan()?;
        Ok(Self::new(Inventory::generate(plan), config.max_rooms_per_request))
    }

    /// Book `n` rooms
    pub fn book(&mut self, n: i64) -> BookingResult {
        self.book_value(Some(n))
    }

    /// Book a possibly missing room count
    pub fn book_value(&mut self, n: Option<i64>) -> BookingResult {
        match BookingRequest::new(n, self.max_rooms_per_request) {
            Ok(request) => self.book_request(request),
            Err(error) => self.reject(error),
        }
    }

    /// Book a room count typed by a user
    pub fn book_input(&mut self, input: &str) -> BookingResult {
        match BookingRequest::parse(input, self.max_rooms_per_request) {
            Ok(request) => self.book_request(request),
            Err(error) => self.reject(error),
        }
    }

    /// Resolve a validated request: select rooms, then mark them booked
    #[instrument(skip(self), fields(rooms = request.rooms(), epoch = %self.inventory.epoch()))]
    pub fn book_request(&mut self, request: BookingRequest) -> BookingResult {
        // Requests built elsewhere may have used a different limit
        if request.rooms() > self.max_rooms_per_request {
            let error = BookingError::invalid_request(
                Some(request.rooms() as i64),
                self.max_rooms_per_request,
            );
            return self.reject(error);
        }

        self.pending_request = Some(request);
        let n = request.rooms();

        let Some(selection) = self.select(n) else {
            let error = BookingError::infeasible(n, self.inventory.available_count());
            return self.reject(error);
        };

        self.apply(selection)
    }

    /// Pick rooms for `n` without booking them
    pub fn select(&self, n: usize) -> Option<Selection> {
        if let Some(selection) = find_same_floor(&self.inventory, n) {
            return Some(selection);
        }
        debug!(n, "No floor can hold the request, searching across floors");
        find_across_floors(&self.inventory, n)
    }

    fn apply(&mut self, selection: Selection) -> BookingResult {
        if let Err(error) = self.inventory.mark_booked(&selection.room_ids()) {
            let error = BookingError::from(error);
            return self.reject(error);
        }

        let confirmation = BookingConfirmation::from_selection(selection, self.inventory.epoch());
        self.pending_request = None;
        self.statistics.record_success(confirmation.tier, confirmation.rooms.len());

        booking_event!(
            info,
            confirmation.message(),
            tier = tracing::field::display(confirmation.tier),
            cost = confirmation.cost,
            available = self.inventory.available_count(),
        );
        Ok(confirmation)
    }

    fn reject(&mut self, error: BookingError) -> BookingResult {
        self.statistics.record_failure(&error);
        booking_event!(warn, error.to_string(), category = error.category());
        Err(error)
    }

    /// Unbooked rooms in inventory order
    pub fn list_available(&self) -> Vec<&Room> {
        self.inventory.available()
    }

    /// Every room on `floor`, booked or not, in index order
    pub fn list_by_floor(&self, floor: u32) -> Vec<&Room> {
        self.inventory.rooms_on_floor(floor)
    }

    /// Re-roll every room's occupancy with the given probability
    pub fn apply_random_occupancy<R: Rng + ?Sized>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<usize, BookingError> {
        let booked = self.inventory.apply_random_occupancy(probability, rng)?;
        self.statistics.record_randomization();
        Ok(booked)
    }

    /// Regenerate the inventory and clear any pending request
    pub fn reset(&mut self) {
        self.inventory.reset();
        self.pending_request = None;
        self.statistics.record_reset();
    }

    /// The inventory being booked
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the inventory, for fixtures and maintenance tools
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Request that passed validation but has not been booked yet
    pub fn pending_request(&self) -> Option<BookingRequest> {
        self.pending_request
    }

    /// Largest count a single request may ask for
    pub fn max_rooms_per_request(&self) -> usize {
        self.max_rooms_per_request
    }

    /// Outcome counters since the coordinator was created
    pub fn statistics(&self) -> &BookingStatistics {
        &self.statistics
    }
}
