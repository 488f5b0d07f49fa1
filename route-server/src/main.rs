use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use route_server::cache::{CacheConfig, CachedTransportClient};
use route_server::planner::SearchConfig;
use route_server::provider::MockTransportProvider;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Serve a network from disk if one is configured, otherwise the
    // built-in demo network.
    let provider = match std::env::var("ROUTE_NETWORK_DIR") {
        Ok(dir) => {
            println!("Loading transit network from {dir}");
            MockTransportProvider::from_dir(&dir).expect("Failed to load transit network")
        }
        Err(_) => {
            println!("ROUTE_NETWORK_DIR not set, serving the built-in demo network.");
            MockTransportProvider::demo()
        }
    };

    let client = CachedTransportClient::new(provider, &CacheConfig::default());
    let search_config = SearchConfig::default();

    let state = AppState::new(client, search_config);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Route candidate server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health  - Health check");
    println!("  GET  /stops   - List stops of the current network");
    println!("  GET  /routes  - Search ranked route candidates");
    println!("                  ?source=A&destination=C[&max_intermediate=2][&top_k=10][&max_total_distance_km=...]");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
