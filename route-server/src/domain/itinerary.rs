//! Multi-leg itineraries.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::{DomainError, Edge, NodeCode};

/// An ordered sequence of legs forming a walk from a source stop to a
/// destination stop.
///
/// Invariants, enforced at construction:
/// - at least one leg,
/// - consecutive legs connect (each leg departs where the previous
///   one arrived),
/// - no stop appears twice, the source included.
///
/// Itineraries share the graph's edges by `Arc` rather than owning
/// copies. They are transient: produced by enumeration, scored, and
/// returned within a single search call.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Arc<Edge>>,
}

impl Itinerary {
    /// Build an itinerary from a leg sequence, checking the walk
    /// invariants.
    pub fn new(legs: Vec<Arc<Edge>>) -> Result<Self, DomainError> {
        let first = legs.first().ok_or(DomainError::EmptyItinerary)?;

        for pair in legs.windows(2) {
            if pair[0].destination != pair[1].source {
                return Err(DomainError::DisconnectedLegs(
                    pair[0].destination.clone(),
                    pair[1].source.clone(),
                ));
            }
        }

        let mut seen = HashSet::new();
        seen.insert(first.source.clone());
        for leg in &legs {
            if !seen.insert(leg.destination.clone()) {
                return Err(DomainError::RepeatedStop(leg.destination.clone()));
            }
        }

        Ok(Self { legs })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[Arc<Edge>] {
        &self.legs
    }

    /// The stop the itinerary departs from.
    pub fn source(&self) -> &NodeCode {
        // Invariant: legs is non-empty.
        &self.legs[0].source
    }

    /// The stop the itinerary arrives at.
    pub fn destination(&self) -> &NodeCode {
        &self.legs[self.legs.len() - 1].destination
    }

    /// Number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// The visited stops in order, source first.
    pub fn stops(&self) -> Vec<&NodeCode> {
        let mut stops = Vec::with_capacity(self.legs.len() + 1);
        stops.push(&self.legs[0].source);
        for leg in &self.legs {
            stops.push(&leg.destination);
        }
        stops
    }
}

impl fmt::Display for Itinerary {
    /// Stop sequence, e.g. `A -> B -> C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.legs[0].source)?;
        for leg in &self.legs {
            write!(f, " -> {}", leg.destination)?;
        }
        Ok(())
    }
}
