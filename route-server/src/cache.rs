//! Caching layer for transport provider responses.
//!
//! Provider calls simulate (and would in production incur) a network
//! round-trip per stop, and a snapshot needs one departures fetch per
//! stop. Caching the per-stop departure lists keeps repeated searches
//! over the same network from re-paying that latency.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Edge, Node, NodeCode};
use crate::graph::TransitGraph;
use crate::provider::{ProviderError, TransportDataSource};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1024,
        }
    }
}

/// A transport data source with cached departure lookups.
///
/// Wraps any [`TransportDataSource`] and memoizes its per-stop
/// departure lists. Also the place where provider data becomes a
/// [`TransitGraph`] snapshot: one explicit assembly per query, no
/// process-wide graph state.
pub struct CachedTransportClient<S> {
    source: S,

    /// Departure lists keyed by stop code.
    departures: MokaCache<NodeCode, Arc<Vec<Arc<Edge>>>>,
}

impl<S: TransportDataSource> CachedTransportClient<S> {
    /// Wrap a source with a cache of the given configuration.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let departures = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, departures }
    }

    /// The stop list, straight from the source.
    ///
    /// Not cached: a snapshot makes exactly one stops call, against N
    /// departures calls.
    pub async fn stops(&self) -> Result<Vec<Node>, ProviderError> {
        self.source.stops().await
    }

    /// Outgoing legs from a stop, from cache when fresh.
    pub async fn departures(
        &self,
        code: &NodeCode,
    ) -> Result<Arc<Vec<Arc<Edge>>>, ProviderError> {
        if let Some(hit) = self.departures.get(code).await {
            return Ok(hit);
        }

        let fetched = Arc::new(self.source.departures(code).await?);
        self.departures.insert(code.clone(), Arc::clone(&fetched)).await;
        Ok(fetched)
    }

    /// Assemble a graph snapshot of the whole network.
    ///
    /// Fetches the stop list, then fans out the per-stop departure
    /// fetches concurrently; the snapshot is complete and immutable
    /// before any search sees it.
    pub async fn snapshot(&self) -> Result<TransitGraph, ProviderError> {
        let stops = self.source.stops().await?;

        let mut graph = TransitGraph::new();
        for stop in &stops {
            graph.add_node(stop.clone());
        }

        let batches =
            futures::future::try_join_all(stops.iter().map(|s| self.departures(&s.code))).await?;
        for batch in batches {
            for edge in batch.iter() {
                graph.add_edge(Arc::clone(edge))?;
            }
        }

        tracing::debug!(
            stops = graph.node_count(),
            legs = graph.edge_count(),
            "assembled network snapshot"
        );

        Ok(graph)
    }

    /// Number of cached departure entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.departures.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.departures.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockTransportProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn code(s: &str) -> NodeCode {
        NodeCode::parse(s).unwrap()
    }

    /// Counts how many calls actually reach the wrapped provider.
    struct CountingSource {
        inner: MockTransportProvider,
        departure_calls: AtomicUsize,
    }

    impl CountingSource {
        fn demo() -> Self {
            Self {
                inner: MockTransportProvider::demo().with_latency(Duration::ZERO),
                departure_calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.departure_calls.load(Ordering::SeqCst)
        }
    }

    impl TransportDataSource for CountingSource {
        async fn stops(&self) -> Result<Vec<Node>, ProviderError> {
            self.inner.stops().await
        }

        async fn departures(&self, code: &NodeCode) -> Result<Vec<Arc<Edge>>, ProviderError> {
            self.departure_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.departures(code).await
        }
    }

    #[tokio::test]
    async fn repeated_lookups_hit_the_cache() {
        let client = CachedTransportClient::new(CountingSource::demo(), &CacheConfig::default());

        let first = client.departures(&code("A")).await.unwrap();
        let second = client.departures(&code("A")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.source.calls(), 1);
    }

    #[tokio::test]
    async fn invalidate_all_forces_a_refetch() {
        let client = CachedTransportClient::new(CountingSource::demo(), &CacheConfig::default());

        client.departures(&code("A")).await.unwrap();
        client.invalidate_all();
        client.departures(&code("A")).await.unwrap();

        assert_eq!(client.source.calls(), 2);
    }

    #[tokio::test]
    async fn snapshot_assembles_the_whole_network() {
        let client = CachedTransportClient::new(CountingSource::demo(), &CacheConfig::default());

        let graph = client.snapshot().await.unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 12);

        let from_a: Vec<&str> = graph
            .neighbors(&code("A"))
            .iter()
            .map(|e| e.destination.as_str())
            .collect();
        assert_eq!(from_a, ["B", "C", "D", "E"]);
    }

    #[tokio::test]
    async fn second_snapshot_reuses_cached_departures() {
        let client = CachedTransportClient::new(CountingSource::demo(), &CacheConfig::default());

        client.snapshot().await.unwrap();
        let after_first = client.source.calls();
        client.snapshot().await.unwrap();

        assert_eq!(client.source.calls(), after_first);
    }
}
