//! Transport data providers.
//!
//! The planner itself never performs I/O: it consumes an
//! already-materialized graph snapshot. This module is the boundary
//! where stop and leg data comes from: in production a federation of
//! booking providers, here a mock that serves a static network after
//! a simulated network delay.

mod error;
mod mock;

use std::future::Future;
use std::sync::Arc;

use crate::domain::{Edge, Node, NodeCode};

pub use error::ProviderError;
pub use mock::MockTransportProvider;

/// Source of transit network data.
///
/// This abstraction is the seam between the engine and whatever feeds
/// it: the caching client and the web layer are generic over it, and
/// tests substitute instrumented sources.
pub trait TransportDataSource: Send + Sync {
    /// All stops known to the provider.
    fn stops(&self) -> impl Future<Output = Result<Vec<Node>, ProviderError>> + Send;

    /// Outgoing legs from a stop. Unknown codes yield an empty list,
    /// not an error.
    fn departures(
        &self,
        code: &NodeCode,
    ) -> impl Future<Output = Result<Vec<Arc<Edge>>, ProviderError>> + Send;
}
