//! Itinerary metrics and scoring.
//!
//! Every enumerated itinerary is reduced to aggregate metrics (sums
//! and a boolean AND over its legs) and a single scalar score, lower
//! is better. The weights are long-standing tuning values; changing
//! them changes the ranking contract, so they are kept literal.

use crate::domain::Itinerary;

/// Flat penalty for an itinerary with at least one unavailable leg.
/// Dominates every other term at realistic price and duration ranges,
/// so fully available itineraries always sort first.
const UNAVAILABLE_PENALTY: f64 = 10_000.0;

/// Weight per unit of price.
const PRICE_WEIGHT: f64 = 1.0;

/// Penalty per hour of travel.
const HOURLY_DURATION_WEIGHT: f64 = 50.0;

/// Fixed penalty per transfer.
const TRANSFER_PENALTY: f64 = 200.0;

/// Minor tie-breaker favoring physically shorter routes.
const DISTANCE_WEIGHT: f64 = 0.1;

/// Aggregate figures for one itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItineraryMetrics {
    /// Sum of leg distances in kilometres.
    pub total_distance_km: f64,

    /// Sum of leg durations in minutes.
    pub total_duration_min: u64,

    /// Sum of leg prices.
    pub total_price: f64,

    /// Number of transfers: legs minus one, floored at zero.
    pub transfers: usize,

    /// Whether every leg is currently bookable.
    pub all_legs_available: bool,
}

impl ItineraryMetrics {
    /// Compute the metrics for an itinerary. Pure aggregation over
    /// the legs.
    pub fn of(itinerary: &Itinerary) -> Self {
        let legs = itinerary.legs();
        Self {
            total_distance_km: legs.iter().map(|l| l.distance_km).sum(),
            total_duration_min: legs.iter().map(|l| u64::from(l.duration_min)).sum(),
            total_price: legs.iter().map(|l| l.price).sum(),
            transfers: legs.len().saturating_sub(1),
            all_legs_available: legs.iter().all(|l| l.available),
        }
    }
}

/// The ranking score of an itinerary, lower is better.
///
/// Additive combination of availability, price, duration, transfer
/// count, and distance. Deterministic in the metrics alone.
pub fn score(metrics: &ItineraryMetrics) -> f64 {
    let mut score = 0.0;

    if !metrics.all_legs_available {
        score += UNAVAILABLE_PENALTY;
    }
    score += metrics.total_price * PRICE_WEIGHT;
    score += metrics.total_duration_min as f64 / 60.0 * HOURLY_DURATION_WEIGHT;
    score += metrics.transfers as f64 * TRANSFER_PENALTY;
    score += metrics.total_distance_km * DISTANCE_WEIGHT;

    score
}

/// An itinerary with its metrics and score: the unit handed to the
/// ranker and returned to the caller.
///
/// Immutable once built; the fields are kept consistent by computing
/// both metrics and score at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    itinerary: Itinerary,
    metrics: ItineraryMetrics,
    score: f64,
}

impl ScoredCandidate {
    /// Score an itinerary.
    pub fn new(itinerary: Itinerary) -> Self {
        let metrics = ItineraryMetrics::of(&itinerary);
        let score = score(&metrics);
        Self {
            itinerary,
            metrics,
            score,
        }
    }

    /// The underlying itinerary.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// The aggregate metrics.
    pub fn metrics(&self) -> &ItineraryMetrics {
        &self.metrics
    }

    /// The ranking score, lower is better.
    pub fn score(&self) -> f64 {
        self.score
    }
}
