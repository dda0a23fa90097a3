//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use soundhub_auth::jwt::JwtDecoder;
use soundhub_core::config::{AppConfig, StoreProvider};
use soundhub_service::metrics::MetricsService;

use crate::graphql::ApiSchema;

/// Central application state passed to all Axum handlers via `State`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Executable GraphQL schema with services attached.
    pub schema: ApiSchema,
    /// Bearer token verification.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Catalog counters, also used for the health probe.
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    /// The configured store backend.
    pub fn store_provider(&self) -> StoreProvider {
        self.config.store.provider
    }
}
