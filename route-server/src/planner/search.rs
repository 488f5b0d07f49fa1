//! Search facade: query validation and the enumerate → score → rank
//! pipeline.

use crate::domain::NodeCode;
use crate::graph::TransitGraph;

use super::enumerate::enumerate_itineraries;
use super::metrics::ScoredCandidate;
use super::rank::rank_candidates;

/// Error from a route search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Query references a stop code absent from the graph
    #[error("unknown stop code: {0}")]
    UnknownStop(NodeCode),

    /// Query limits are malformed
    #[error("invalid route query: {0}")]
    InvalidQuery(String),
}

/// A route search request.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// Stop the itineraries must start at.
    pub source: NodeCode,

    /// Stop the itineraries must end at.
    pub destination: NodeCode,

    /// Maximum number of intermediate stops; the longest returned
    /// itinerary has `max_intermediate + 1` legs.
    pub max_intermediate: usize,

    /// Number of ranked candidates to return. Zero is valid and
    /// yields an empty result.
    pub top_k: usize,

    /// Optional cap on a candidate's total traveled distance.
    pub max_total_distance_km: Option<f64>,
}

impl RouteQuery {
    /// Create a query with no distance cap.
    pub fn new(
        source: NodeCode,
        destination: NodeCode,
        max_intermediate: usize,
        top_k: usize,
    ) -> Self {
        Self {
            source,
            destination,
            max_intermediate,
            top_k,
            max_total_distance_km: None,
        }
    }

    /// Validate the query limits.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(cap) = self.max_total_distance_km {
            if !cap.is_finite() || cap < 0.0 {
                return Err(SearchError::InvalidQuery(format!(
                    "max_total_distance_km must be a non-negative number, got {cap}"
                )));
            }
        }
        Ok(())
    }
}

/// Route candidate planner over an immutable graph snapshot.
///
/// The search is pure and synchronous: it performs no I/O, holds no
/// shared mutable state, and treats the graph as read-only. Finding
/// no routes is a successful, empty result.
pub struct Planner<'a> {
    graph: &'a TransitGraph,
}

impl<'a> Planner<'a> {
    /// Create a planner over a graph snapshot.
    pub fn new(graph: &'a TransitGraph) -> Self {
        Self { graph }
    }

    /// Enumerate, score, and rank candidates for a query.
    pub fn search(&self, query: &RouteQuery) -> Result<Vec<ScoredCandidate>, SearchError> {
        query.validate()?;

        let itineraries = enumerate_itineraries(
            self.graph,
            &query.source,
            &query.destination,
            query.max_intermediate,
            query.max_total_distance_km,
        )?;

        let candidates: Vec<ScoredCandidate> =
            itineraries.into_iter().map(ScoredCandidate::new).collect();

        Ok(rank_candidates(candidates, query.top_k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, Mode, Node};
    use std::sync::Arc;

    fn code(s: &str) -> NodeCode {
        NodeCode::parse(s).unwrap()
    }

    /// The five-stop showcase network: codes A-E, a mix of train, bus,
    /// and flight legs, and an unavailable direct A->C bus.
    fn demo_graph() -> TransitGraph {
        let mut graph = TransitGraph::new();

        let stops = [
            ("A", "Alpha", 17.3850, 78.4867),
            ("B", "Beta", 17.6868, 83.2185),
            ("C", "Gamma", 13.0827, 80.2707),
            ("D", "Delta", 16.5062, 80.6480),
            ("E", "Epsilon", 19.07598, 72.87766),
        ];
        for (c, name, lat, lon) in stops {
            graph.add_node(Node::new(code(c), name, lat, lon).unwrap());
        }

        let legs = [
            ("A", "B", Mode::Train, 350.0, 240, 500.0, true),
            ("B", "A", Mode::Train, 350.0, 240, 500.0, true),
            ("A", "C", Mode::Bus, 40.0, 60, 150.0, false),
            ("C", "A", Mode::Bus, 40.0, 60, 150.0, false),
            ("B", "C", Mode::Bus, 200.0, 180, 300.0, true),
            ("C", "B", Mode::Bus, 200.0, 180, 300.0, true),
            ("A", "D", Mode::Flight, 400.0, 60, 2000.0, true),
            ("D", "C", Mode::Train, 300.0, 200, 600.0, true),
            ("A", "E", Mode::Train, 700.0, 480, 800.0, true),
            ("E", "C", Mode::Flight, 900.0, 90, 2500.0, false),
            ("B", "D", Mode::Bus, 220.0, 180, 350.0, true),
            ("D", "B", Mode::Bus, 220.0, 180, 350.0, true),
        ];
        for (src, dst, mode, km, min, price, avail) in legs {
            let edge = Edge::new(code(src), code(dst), mode, km, min, price, avail).unwrap();
            graph.add_edge(Arc::new(edge)).unwrap();
        }

        graph
    }

    fn stops_of(candidate: &ScoredCandidate) -> Vec<&str> {
        candidate
            .itinerary()
            .stops()
            .iter()
            .map(|c| c.as_str())
            .collect()
    }

    #[test]
    fn showcase_query_ranks_the_two_hop_route_above_the_unavailable_direct() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery::new(code("A"), code("C"), 2, 10);
        let results = planner.search(&query).unwrap();

        let routes: Vec<Vec<&str>> = results.iter().map(stops_of).collect();

        // The fully available two-hop route wins outright.
        assert_eq!(routes[0], ["A", "B", "C"]);
        assert!((results[0].score() - 1405.0).abs() < 1e-6);

        // The direct bus exists but cannot be booked, so the
        // availability penalty drops it to the bottom.
        let direct_pos = routes.iter().position(|r| r == &["A", "C"]).unwrap();
        assert_eq!(direct_pos, results.len() - 1);
        assert!(results[direct_pos].score() > 10_000.0);
        assert!(!results[direct_pos].metrics().all_legs_available);

        // The A->E->C flight combination overshoots the detour bound
        // and must not appear at all.
        assert!(routes.iter().all(|r| !r.contains(&"E")));
    }

    #[test]
    fn showcase_query_full_candidate_set() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery::new(code("A"), code("C"), 2, 10);
        let results = planner.search(&query).unwrap();
        let routes: Vec<Vec<&str>> = results.iter().map(stops_of).collect();

        assert_eq!(
            routes,
            vec![
                vec!["A", "B", "C"],
                vec!["A", "B", "D", "C"],
                vec!["A", "D", "C"],
                vec!["A", "D", "B", "C"],
                vec!["A", "C"],
            ]
        );

        for pair in results.windows(2) {
            assert!(pair[0].score() <= pair[1].score());
        }
    }

    #[test]
    fn top_k_truncates_the_ranking() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery::new(code("A"), code("C"), 2, 2);
        let results = planner.search(&query).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(stops_of(&results[0]), ["A", "B", "C"]);
    }

    #[test]
    fn top_k_zero_returns_an_empty_ranking() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery::new(code("A"), code("C"), 2, 0);
        assert!(planner.search(&query).unwrap().is_empty());
    }

    #[test]
    fn zero_intermediate_only_returns_the_direct_leg() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery::new(code("A"), code("C"), 0, 10);
        let results = planner.search(&query).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(stops_of(&results[0]), ["A", "C"]);

        // No direct E->A leg exists.
        let query = RouteQuery::new(code("E"), code("A"), 0, 10);
        assert!(planner.search(&query).unwrap().is_empty());
    }

    #[test]
    fn unknown_stop_is_a_lookup_error() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery::new(code("A"), code("ZZZ"), 2, 10);
        assert_eq!(
            planner.search(&query).unwrap_err(),
            SearchError::UnknownStop(code("ZZZ"))
        );
    }

    #[test]
    fn distance_cap_filters_completed_routes() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        let query = RouteQuery {
            max_total_distance_km: Some(600.0),
            ..RouteQuery::new(code("A"), code("C"), 2, 10)
        };
        let results = planner.search(&query).unwrap();
        let routes: Vec<Vec<&str>> = results.iter().map(stops_of).collect();

        // Only the 550 km two-hop route and the 40 km direct leg fit.
        assert_eq!(routes, vec![vec!["A", "B", "C"], vec!["A", "C"]]);
    }

    #[test]
    fn malformed_distance_cap_is_rejected() {
        let graph = demo_graph();
        let planner = Planner::new(&graph);

        for cap in [-1.0, f64::NAN, f64::INFINITY] {
            let query = RouteQuery {
                max_total_distance_km: Some(cap),
                ..RouteQuery::new(code("A"), code("C"), 2, 10)
            };
            assert!(matches!(
                planner.search(&query),
                Err(SearchError::InvalidQuery(_))
            ));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Edge, Mode, Node};
    use crate::planner::metrics::{ItineraryMetrics, score};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn arb_network() -> impl Strategy<Value = (TransitGraph, NodeCode, NodeCode)> {
        (2usize..6)
            .prop_flat_map(|n| {
                let edges = prop::collection::vec(
                    (
                        0..n,
                        0..n,
                        1.0f64..400.0,
                        10u32..600,
                        10.0f64..3000.0,
                        prop::bool::ANY,
                    ),
                    0..16,
                );
                (Just(n), edges)
            })
            .prop_map(|(n, edges)| {
                let codes: Vec<NodeCode> = (0..n)
                    .map(|i| NodeCode::parse(&format!("S{i}")).unwrap())
                    .collect();

                let mut graph = TransitGraph::new();
                for (i, c) in codes.iter().enumerate() {
                    let node = Node::new(
                        c.clone(),
                        format!("Stop {i}"),
                        10.0 + i as f64,
                        76.0 + i as f64 * 1.5,
                    )
                    .unwrap();
                    graph.add_node(node);
                }
                for (s, d, km, min, price, avail) in edges {
                    let edge = Edge::new(
                        codes[s].clone(),
                        codes[d].clone(),
                        Mode::Bus,
                        km,
                        min,
                        price,
                        avail,
                    )
                    .unwrap();
                    graph.add_edge(Arc::new(edge)).unwrap();
                }

                (graph, codes[0].clone(), codes[1].clone())
            })
    }

    proptest! {
        /// Recomputing metrics from the returned legs must reproduce
        /// the stored totals.
        #[test]
        fn sum_of_legs_invariant(
            (graph, src, dst) in arb_network(),
            max_intermediate in 0usize..4,
            top_k in 1usize..20,
        ) {
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(src, dst, max_intermediate, top_k);
            let results = planner.search(&query).unwrap();

            for candidate in &results {
                let recomputed = ItineraryMetrics::of(candidate.itinerary());
                prop_assert_eq!(candidate.metrics(), &recomputed);
                prop_assert_eq!(candidate.score(), score(&recomputed));
            }
        }

        #[test]
        fn results_are_sorted_and_bounded(
            (graph, src, dst) in arb_network(),
            max_intermediate in 0usize..4,
            top_k in 0usize..20,
        ) {
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(src, dst, max_intermediate, top_k);
            let results = planner.search(&query).unwrap();

            prop_assert!(results.len() <= top_k);
            for pair in results.windows(2) {
                prop_assert!(pair[0].score() <= pair[1].score());
            }
        }

        /// Searching twice over the same snapshot yields the same
        /// ranked candidates.
        #[test]
        fn search_is_deterministic(
            (graph, src, dst) in arb_network(),
            max_intermediate in 0usize..4,
        ) {
            let planner = Planner::new(&graph);
            let query = RouteQuery::new(src, dst, max_intermediate, 10);
            let first = planner.search(&query).unwrap();
            let second = planner.search(&query).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
