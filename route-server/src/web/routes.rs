//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::domain::NodeCode;
use crate::planner::{Planner, RouteQuery, SearchError};
use crate::provider::{ProviderError, TransportDataSource};

use super::dto::*;
use super::state::AppState;

/// Hard ceiling on the number of candidates a request may ask for.
const MAX_TOP_K: usize = 50;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: TransportDataSource + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(list_stops::<S>))
        .route("/routes", get(search_routes::<S>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the stops of the current network.
async fn list_stops<S>(State(state): State<AppState<S>>) -> Result<Json<StopsResponse>, AppError>
where
    S: TransportDataSource + 'static,
{
    let mut stops = state.client.stops().await?;
    stops.sort_by(|a, b| a.code.cmp(&b.code));

    Ok(Json(StopsResponse {
        stops: stops.iter().map(StopResult::from_node).collect(),
    }))
}

/// Search ranked route candidates between two stops.
async fn search_routes<S>(
    State(state): State<AppState<S>>,
    Query(req): Query<SearchRoutesRequest>,
) -> Result<Json<SearchRoutesResponse>, AppError>
where
    S: TransportDataSource + 'static,
{
    let source = NodeCode::parse_normalized(&req.source).map_err(|_| AppError::BadRequest {
        message: format!("Invalid source stop code: {}", req.source),
    })?;
    let destination =
        NodeCode::parse_normalized(&req.destination).map_err(|_| AppError::BadRequest {
            message: format!("Invalid destination stop code: {}", req.destination),
        })?;

    let query = RouteQuery {
        source,
        destination,
        max_intermediate: req
            .max_intermediate
            .unwrap_or(state.config.default_max_intermediate)
            .min(state.config.max_intermediate_cap),
        top_k: req.top_k.unwrap_or(state.config.default_top_k).min(MAX_TOP_K),
        max_total_distance_km: req.max_total_distance_km,
    };

    let graph = state.client.snapshot().await?;
    let candidates = Planner::new(&graph).search(&query)?;

    tracing::debug!(
        source = %query.source,
        destination = %query.destination,
        candidates = candidates.len(),
        "route search complete"
    );

    Ok(Json(SearchRoutesResponse {
        routes: candidates.iter().map(RouteResult::from_candidate).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownStop(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::InvalidQuery(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
