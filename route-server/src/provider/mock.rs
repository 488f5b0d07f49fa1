//! Mock transport provider.
//!
//! Simulates external transport providers (rail, bus, and airline
//! booking systems) without network access: answers come from an
//! in-memory network after a configurable artificial delay, so the
//! rest of the service exercises the same async call pattern it would
//! use against live upstreams.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{Edge, Mode, Node, NodeCode};

use super::error::ProviderError;
use super::TransportDataSource;

/// On-disk record for one stop, file format of [`MockTransportProvider::from_dir`].
#[derive(Debug, Deserialize)]
struct StopFile {
    stop: StopRecord,
    #[serde(default)]
    departures: Vec<DepartureRecord>,
}

#[derive(Debug, Deserialize)]
struct StopRecord {
    code: String,
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct DepartureRecord {
    destination: String,
    mode: String,
    distance_km: f64,
    duration_min: u32,
    price: f64,
    available: bool,
}

/// Mock provider serving a static transit network.
///
/// Useful for development and testing without live provider
/// credentials; later this is where real upstream integrations would
/// plug in behind the same [`TransportDataSource`] seam.
#[derive(Debug, Clone)]
pub struct MockTransportProvider {
    /// Stops in a stable order (sorted by code on load).
    stops: Vec<Node>,

    /// Outgoing legs per stop, preserving per-stop record order.
    departures: HashMap<NodeCode, Vec<Arc<Edge>>>,

    /// Artificial delay applied to every call.
    latency: Duration,
}

impl MockTransportProvider {
    /// Delay applied to each request unless overridden, mimicking a
    /// round-trip to an external booking API.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(200);

    /// The built-in five-stop demo network: codes A-E with a mix of
    /// train, bus, and flight legs, including an unavailable direct
    /// A->C bus so mixed-mode alternatives have something to beat.
    pub fn demo() -> Self {
        let stops = [
            ("A", "Alpha", 17.3850, 78.4867),
            ("B", "Beta", 17.6868, 83.2185),
            ("C", "Gamma", 13.0827, 80.2707),
            ("D", "Delta", 16.5062, 80.6480),
            ("E", "Epsilon", 19.07598, 72.87766),
        ];
        let legs = [
            ("A", "B", "train", 350.0, 240, 500.0, true),
            ("B", "A", "train", 350.0, 240, 500.0, true),
            ("A", "C", "bus", 40.0, 60, 150.0, false),
            ("C", "A", "bus", 40.0, 60, 150.0, false),
            ("B", "C", "bus", 200.0, 180, 300.0, true),
            ("C", "B", "bus", 200.0, 180, 300.0, true),
            ("A", "D", "flight", 400.0, 60, 2000.0, true),
            ("D", "C", "train", 300.0, 200, 600.0, true),
            ("A", "E", "train", 700.0, 480, 800.0, true),
            ("E", "C", "flight", 900.0, 90, 2500.0, false),
            ("B", "D", "bus", 220.0, 180, 350.0, true),
            ("D", "B", "bus", 220.0, 180, 350.0, true),
        ];

        let nodes = stops
            .into_iter()
            .map(|(code, name, lat, lon)| {
                Node::new(NodeCode::parse(code).expect("demo stop code"), name, lat, lon)
                    .expect("demo stop coordinates")
            })
            .collect();
        let edges = legs
            .into_iter()
            .map(|(src, dst, mode, km, min, price, avail)| {
                Edge::new(
                    NodeCode::parse(src).expect("demo stop code"),
                    NodeCode::parse(dst).expect("demo stop code"),
                    Mode::parse(mode),
                    km,
                    min,
                    price,
                    avail,
                )
                .expect("demo leg measures")
            })
            .collect();

        Self::from_parts(nodes, edges)
    }

    /// Load a network from a directory of `{CODE}.json` files, one
    /// per stop:
    ///
    /// ```json
    /// {
    ///   "stop": { "code": "A", "name": "Alpha", "lat": 17.4, "lon": 78.5 },
    ///   "departures": [
    ///     { "destination": "B", "mode": "train", "distance_km": 350,
    ///       "duration_min": 240, "price": 500, "available": true }
    ///   ]
    /// }
    /// ```
    ///
    /// Records pass through the validating domain constructors, so a
    /// malformed file fails the whole load.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let data_dir = data_dir.as_ref();
        let mut nodes = Vec::new();
        let mut edges = Vec::new();

        for entry in std::fs::read_dir(data_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path)?;
            let file: StopFile =
                serde_json::from_str(&json).map_err(|e| ProviderError::Parse {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            let code = parse_code(&file.stop.code)?;
            nodes.push(Node::new(
                code.clone(),
                file.stop.name,
                file.stop.lat,
                file.stop.lon,
            )?);

            for rec in file.departures {
                edges.push(Edge::new(
                    code.clone(),
                    parse_code(&rec.destination)?,
                    Mode::parse(&rec.mode),
                    rec.distance_km,
                    rec.duration_min,
                    rec.price,
                    rec.available,
                )?);
            }
        }

        if nodes.is_empty() {
            return Err(ProviderError::EmptyDataDir(data_dir.display().to_string()));
        }

        tracing::debug!(
            stops = nodes.len(),
            legs = edges.len(),
            dir = %data_dir.display(),
            "loaded mock transit network"
        );

        Ok(Self::from_parts(nodes, edges))
    }

    /// Override the simulated request latency. Tests pass
    /// `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn from_parts(mut nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        // Stable stop order keeps snapshot assembly, and therefore
        // traversal order, deterministic across runs.
        nodes.sort_by(|a, b| a.code.cmp(&b.code));

        let mut departures: HashMap<NodeCode, Vec<Arc<Edge>>> = HashMap::new();
        for node in &nodes {
            departures.entry(node.code.clone()).or_default();
        }
        for edge in edges {
            departures
                .entry(edge.source.clone())
                .or_default()
                .push(Arc::new(edge));
        }

        Self {
            stops: nodes,
            departures,
            latency: Self::DEFAULT_LATENCY,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl TransportDataSource for MockTransportProvider {
    async fn stops(&self) -> Result<Vec<Node>, ProviderError> {
        self.simulate_latency().await;
        Ok(self.stops.clone())
    }

    async fn departures(&self, code: &NodeCode) -> Result<Vec<Arc<Edge>>, ProviderError> {
        self.simulate_latency().await;
        Ok(self.departures.get(code).cloned().unwrap_or_default())
    }
}

fn parse_code(raw: &str) -> Result<NodeCode, ProviderError> {
    NodeCode::parse_normalized(raw)
        .map_err(|e| ProviderError::InvalidData(format!("stop code {raw:?}: {e}")))
}
