//! Domain error types.
//!
//! These errors represent validation failures detected when
//! constructing domain values. They are distinct from graph-store
//! and provider errors.

use super::NodeCode;

/// Domain-level errors for validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude outside [-90, 90] (or not a number)
    #[error("latitude {0} is out of range [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] (or not a number)
    #[error("longitude {0} is out of range [-180, 180]")]
    InvalidLongitude(f64),

    /// Leg distance is negative or not a finite number
    #[error("leg distance must be a non-negative number, got {0}")]
    InvalidDistance(f64),

    /// Leg price is negative or not a finite number
    #[error("leg price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't share a stop
    #[error("legs do not connect: arrived at {0} but next leg departs {1}")]
    DisconnectedLegs(NodeCode, NodeCode),

    /// Itinerary visits a stop more than once
    #[error("itinerary revisits stop {0}")]
    RepeatedStop(NodeCode),
}
