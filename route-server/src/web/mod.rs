//! Web layer for the route candidate server.
//!
//! Provides the HTTP endpoints for listing stops and searching
//! ranked route candidates.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
