//! Multi-leg route candidate server.
//!
//! A web service that answers: "the direct ticket is unavailable,
//! so which combination of train, bus, and flight legs still gets me
//! there?" Candidate itineraries are enumerated over a static transit
//! graph, then scored on availability, price, duration, transfers,
//! and distance, and the best few are returned.

pub mod cache;
pub mod domain;
pub mod geo;
pub mod graph;
pub mod planner;
pub mod provider;
pub mod web;
