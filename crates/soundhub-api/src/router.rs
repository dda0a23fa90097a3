//! Route definitions for the SoundHub HTTP API.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{MethodRouter, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;

    Router::new()
        .route("/graphql", graphql_route(server.graphiql))
        .route("/api/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// `POST /graphql` always; `GET /graphql` serves GraphiQL when enabled.
fn graphql_route(graphiql: bool) -> MethodRouter<AppState> {
    let route = post(handlers::graphql::execute);
    if graphiql {
        route.get(handlers::graphql::graphiql)
    } else {
        route
    }
}
