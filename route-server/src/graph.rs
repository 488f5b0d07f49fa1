//! In-memory transit graph store.
//!
//! Holds the stops and the directed legs between them, and answers
//! neighbor lookups for the planner. The graph is append-only: once a
//! snapshot is assembled it is read-only for the lifetime of a search.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Edge, Node, NodeCode};

/// Error raised when inserting inconsistent graph data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge references a stop that has not been added
    #[error("edge {origin}->{destination} references unknown stop {missing}")]
    UnknownEndpoint {
        origin: NodeCode,
        destination: NodeCode,
        missing: NodeCode,
    },
}

/// A directed graph of transit legs between stops.
///
/// Stops are keyed by their code; outgoing legs are kept in insertion
/// order, which makes traversal order deterministic.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    nodes: HashMap<NodeCode, Node>,
    adjacency: HashMap<NodeCode, Vec<Arc<Edge>>>,
}

impl TransitGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop, keyed by its code.
    ///
    /// A stop with the same code is overwritten; its already-inserted
    /// outgoing legs are kept.
    pub fn add_node(&mut self, node: Node) {
        self.adjacency.entry(node.code.clone()).or_default();
        self.nodes.insert(node.code.clone(), node);
    }

    /// Append a directed leg to its source stop's outgoing list.
    ///
    /// Both endpoints must already be registered.
    pub fn add_edge(&mut self, edge: Arc<Edge>) -> Result<(), GraphError> {
        for endpoint in [&edge.source, &edge.destination] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::UnknownEndpoint {
                    origin: edge.source.clone(),
                    destination: edge.destination.clone(),
                    missing: endpoint.clone(),
                });
            }
        }

        self.adjacency
            .entry(edge.source.clone())
            .or_default()
            .push(edge);
        Ok(())
    }

    /// Outgoing legs of a stop, in insertion order.
    ///
    /// An unknown code yields an empty slice, not an error.
    pub fn neighbors(&self, code: &NodeCode) -> &[Arc<Edge>] {
        self.adjacency.get(code).map_or(&[], Vec::as_slice)
    }

    /// Look up a stop by code.
    pub fn node(&self, code: &NodeCode) -> Option<&Node> {
        self.nodes.get(code)
    }

    /// Whether a stop with this code is registered.
    pub fn contains(&self, code: &NodeCode) -> bool {
        self.nodes.contains_key(code)
    }

    /// Iterate over all registered stops (in no particular order).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of registered stops.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of inserted legs.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no stops.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
