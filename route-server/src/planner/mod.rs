//! Route candidate generation and scoring.
//!
//! This module implements the core engine that answers: "which
//! multi-leg itineraries connect this source to this destination, and
//! in what order should they be offered?"
//!
//! The pipeline is a pure, synchronous computation over an immutable
//! graph snapshot: exhaustive depth-bounded DFS enumeration with cycle
//! avoidance and geographic detour pruning, metric aggregation per
//! path, a single scalar score, and an ascending-score top-K cut.

mod config;
mod enumerate;
mod metrics;
mod rank;
mod search;

pub use config::SearchConfig;
pub use enumerate::enumerate_itineraries;
pub use metrics::{ItineraryMetrics, ScoredCandidate, score};
pub use rank::rank_candidates;
pub use search::{Planner, RouteQuery, SearchError};
