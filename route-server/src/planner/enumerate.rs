//! Exhaustive path enumeration with pruning.
//!
//! Depth-first search from the source, bounded by an intermediate-stop
//! count, rejecting cycles and rejecting branches whose traveled
//! distance becomes an unreasonable multiple of the direct distance
//! between source and destination. Availability is deliberately NOT
//! filtered here: unavailable legs flow through to scoring, so "almost
//! feasible" itineraries stay visible to the caller.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Edge, Itinerary, NodeCode};
use crate::geo::equirectangular_km;
use crate::graph::TransitGraph;

use super::search::SearchError;

/// A branch is abandoned once its traveled distance exceeds this
/// multiple of the direct source-destination distance.
const MAX_DETOUR_FACTOR: f64 = 2.0;

/// Guards the detour ratio against division by zero when source and
/// destination coincide.
const DIRECT_DISTANCE_EPSILON_KM: f64 = 1e-6;

/// One in-flight search branch: the stop the walk has reached, the
/// legs taken so far, the set of visited stops, and the accumulated
/// distance.
///
/// Frames are immutable once pushed; extending a branch clones the
/// frame rather than mutating a shared path buffer.
#[derive(Debug, Clone)]
struct PathState {
    at: NodeCode,
    legs: Vec<Arc<Edge>>,
    visited: HashSet<NodeCode>,
    distance_km: f64,
}

impl PathState {
    /// The initial frame: at the source, nothing traveled, the source
    /// already marked visited so the walk can never return to it.
    fn start(source: NodeCode) -> Self {
        let mut visited = HashSet::new();
        visited.insert(source.clone());
        Self {
            at: source,
            legs: Vec::new(),
            visited,
            distance_km: 0.0,
        }
    }

    /// A new frame extending this branch by one leg.
    fn extend(&self, edge: &Arc<Edge>, distance_km: f64) -> Self {
        let mut legs = self.legs.clone();
        legs.push(Arc::clone(edge));

        let mut visited = self.visited.clone();
        visited.insert(edge.destination.clone());

        Self {
            at: edge.destination.clone(),
            legs,
            visited,
            distance_km,
        }
    }
}

/// Enumerate every structurally valid itinerary from `source` to
/// `destination`.
///
/// A path is returned when it reaches the destination with between 1
/// and `max_intermediate + 1` legs, revisits no stop, and stays within
/// the detour bound. Completed paths longer than
/// `max_total_distance_km` (when supplied) are discarded.
///
/// Fails with [`SearchError::UnknownStop`] if either endpoint is not a
/// registered stop, since the direct distance cannot be computed.
pub fn enumerate_itineraries(
    graph: &TransitGraph,
    source: &NodeCode,
    destination: &NodeCode,
    max_intermediate: usize,
    max_total_distance_km: Option<f64>,
) -> Result<Vec<Itinerary>, SearchError> {
    let src = graph
        .node(source)
        .ok_or_else(|| SearchError::UnknownStop(source.clone()))?;
    let dst = graph
        .node(destination)
        .ok_or_else(|| SearchError::UnknownStop(destination.clone()))?;

    let direct_km = equirectangular_km(src, dst);
    let max_legs = max_intermediate + 1;

    let mut found = Vec::new();
    let mut stack = vec![PathState::start(source.clone())];

    while let Some(state) = stack.pop() {
        if state.at == *destination && !state.legs.is_empty() {
            if max_total_distance_km.is_some_and(|cap| state.distance_km > cap) {
                continue;
            }
            if let Ok(itinerary) = Itinerary::new(state.legs) {
                found.push(itinerary);
            }
            continue;
        }

        if state.legs.len() == max_legs {
            continue;
        }

        // LIFO stack: push in reverse so branches expand in edge
        // insertion order.
        for edge in graph.neighbors(&state.at).iter().rev() {
            if state.visited.contains(&edge.destination) {
                continue;
            }

            let extended_km = state.distance_km + edge.distance_km;
            let detour_factor = extended_km / (direct_km + DIRECT_DISTANCE_EPSILON_KM);
            if detour_factor > MAX_DETOUR_FACTOR {
                continue;
            }

            stack.push(state.extend(edge, extended_km));
        }
    }

    Ok(found)
}
