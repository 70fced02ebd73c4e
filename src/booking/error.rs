//! Error types and handling
//!
//! This module contains the error type returned by booking operations.

use crate::facility::InventoryError;
use thiserror::Error;

/// Errors that can occur while booking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    /// The requested room count is missing or out of range
    #[error("Please enter between 1 and {max} rooms.")]
    InvalidRequest {
        /// The value that was requested, if any could be read
        requested: Option<i64>,
        /// Largest count a request may ask for
        max: usize,
    },

    /// Not enough rooms are available for the request
    #[error("Not enough rooms available to satisfy this request.")]
    Infeasible {
        /// Number of rooms requested
        requested: usize,
        /// Number of rooms available when the request was made
        available: usize,
    },

    /// The inventory rejected a mutation
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

impl BookingError {
    /// Create an invalid request error
    pub fn invalid_request(requested: Option<i64>, max: usize) -> Self {
        Self::InvalidRequest { requested, max }
    }

    /// Create an infeasible request error
    pub fn infeasible(requested: usize, available: usize) -> Self {
        Self::Infeasible { requested, available }
    }

    /// Whether the message is meant to be shown to the person booking
    ///
    /// Inventory errors indicate a bug in the caller rather than a bad request.
    pub fn is_user_facing(&self) -> bool {
        match self {
            BookingError::InvalidRequest { .. } => true,
            BookingError::Infeasible { .. } => true,
            BookingError::Inventory(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            BookingError::InvalidRequest { .. } => "Invalid Request",
            BookingError::Infeasible { .. } => "Infeasible",
            BookingError::Inventory(_) => "Inventory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomId;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            BookingError::invalid_request(Some(6), 5).to_string(),
            "Please enter between 1 and 5 rooms."
        );
        assert_eq!(
            BookingError::infeasible(3, 2).to_string(),
            "Not enough rooms available to satisfy this request."
        );
    }

    #[test]
    fn test_error_categories() {
        let inventory: BookingError = InventoryError::UnknownRoom(RoomId::new(1, 1)).into();

        assert_eq!(BookingError::invalid_request(None, 5).category(), "Invalid Request");
        assert_eq!(BookingError::infeasible(1, 0).category(), "Infeasible");
        assert_eq!(inventory.category(), "Inventory");
        assert!(!inventory.is_user_facing());
        assert!(BookingError::infeasible(1, 0).is_user_facing());
    }
}
