//! # soundhub-api
//!
//! HTTP layer for the SoundHub admin backend built on Axum.
//!
//! Serves the GraphQL schema (admin login and catalog counters) at
//! `/graphql`, a liveness probe at `/api/health`, and wires stores,
//! services, and middleware together at startup.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
