//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Edge, Node};
use crate::planner::ScoredCandidate;

/// Request to search for route candidates.
#[derive(Debug, Deserialize)]
pub struct SearchRoutesRequest {
    /// Source stop code
    pub source: String,

    /// Destination stop code
    pub destination: String,

    /// Maximum intermediate stops (defaults from server config)
    pub max_intermediate: Option<usize>,

    /// Number of ranked candidates to return (defaults from server config)
    pub top_k: Option<usize>,

    /// Optional cap on total traveled distance
    pub max_total_distance_km: Option<f64>,
}

/// One leg of a route candidate.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Source stop code
    pub source: String,

    /// Destination stop code
    pub destination: String,

    /// Transport mode
    pub mode: String,

    /// Leg distance in kilometres
    pub distance_km: f64,

    /// Leg duration in minutes
    pub duration_min: u32,

    /// Ticket price
    pub price: f64,

    /// Whether the leg is currently bookable
    pub available: bool,

    /// Human-readable one-line rendering of the leg
    pub summary: String,
}

impl LegResult {
    /// Convert a domain leg.
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            source: edge.source.to_string(),
            destination: edge.destination.to_string(),
            mode: edge.mode.to_string(),
            distance_km: edge.distance_km,
            duration_min: edge.duration_min,
            price: edge.price,
            available: edge.available,
            summary: edge.to_string(),
        }
    }
}

/// A ranked route candidate.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Legs in travel order
    pub legs: Vec<LegResult>,

    /// Sum of leg distances in kilometres
    pub total_distance_km: f64,

    /// Sum of leg durations in minutes
    pub total_duration_min: u64,

    /// Sum of leg prices
    pub total_price: f64,

    /// Number of transfers
    pub transfers: usize,

    /// Whether every leg is currently bookable
    pub all_legs_available: bool,

    /// Ranking score, lower is better
    pub score: f64,
}

impl RouteResult {
    /// Convert a scored candidate.
    pub fn from_candidate(candidate: &ScoredCandidate) -> Self {
        let metrics = candidate.metrics();
        Self {
            legs: candidate
                .itinerary()
                .legs()
                .iter()
                .map(|leg| LegResult::from_edge(leg))
                .collect(),
            total_distance_km: metrics.total_distance_km,
            total_duration_min: metrics.total_duration_min,
            total_price: metrics.total_price,
            transfers: metrics.transfers,
            all_legs_available: metrics.all_legs_available,
            score: candidate.score(),
        }
    }
}

/// Response for a route search.
#[derive(Debug, Serialize)]
pub struct SearchRoutesResponse {
    /// Ranked candidates, best first
    pub routes: Vec<RouteResult>,
}

/// A stop in the network listing.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Stop code
    pub code: String,

    /// Display name
    pub name: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,
}

impl StopResult {
    /// Convert a domain stop.
    pub fn from_node(node: &Node) -> Self {
        Self {
            code: node.code.to_string(),
            name: node.name.clone(),
            lat: node.lat,
            lon: node.lon,
        }
    }
}

/// Response for the stop listing.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    /// All known stops
    pub stops: Vec<StopResult>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
