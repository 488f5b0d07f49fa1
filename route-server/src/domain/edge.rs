//! Directed transit legs.

use std::fmt;

use super::{DomainError, Mode, NodeCode};

/// A directed transport leg between two stops.
///
/// Legs carry static aggregate figures (distance, duration, price)
/// rather than timetables. A bidirectional connection is modeled as
/// two edges. Edges are owned by the graph store and shared by
/// reference (`Arc`) into enumerated itineraries.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Code of the stop this leg departs from.
    pub source: NodeCode,

    /// Code of the stop this leg arrives at.
    pub destination: NodeCode,

    /// Transport mode.
    pub mode: Mode,

    /// Traveled distance in kilometres, non-negative.
    pub distance_km: f64,

    /// Duration in minutes.
    pub duration_min: u32,

    /// Ticket price, non-negative.
    pub price: f64,

    /// Whether the leg is currently bookable.
    pub available: bool,
}

impl Edge {
    /// Create a new leg, validating the numeric fields.
    pub fn new(
        source: NodeCode,
        destination: NodeCode,
        mode: Mode,
        distance_km: f64,
        duration_min: u32,
        price: f64,
        available: bool,
    ) -> Result<Self, DomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(DomainError::InvalidDistance(distance_km));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice(price));
        }

        Ok(Self {
            source,
            destination,
            mode,
            distance_km,
            duration_min,
            price,
            available,
        })
    }
}

impl fmt::Display for Edge {
    /// Human-readable leg summary, e.g.
    /// `A->B (train, 350 km, 240 min, ₹500)`, with `, unavailable`
    /// appended for legs that cannot currently be booked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} ({}, {} km, {} min, ₹{}",
            self.source, self.destination, self.mode, self.distance_km, self.duration_min, self.price
        )?;
        if !self.available {
            write!(f, ", unavailable")?;
        }
        write!(f, ")")
    }
}
