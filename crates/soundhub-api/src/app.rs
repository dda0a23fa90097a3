//! Application builder: wires stores, services, schema, and router.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info, warn};

use soundhub_auth::jwt::{JwtDecoder, JwtEncoder};
use soundhub_auth::password::{PasswordHasher, PasswordValidator};
use soundhub_core::config::{AppConfig, StoreProvider};
use soundhub_core::error::AppError;
use soundhub_database::memory::{MemoryAdminStore, MemoryCatalogStore};
use soundhub_database::repositories::{AdminRepository, CatalogRepository};
use soundhub_database::{AdminStore, CatalogStore, DatabasePool, migration};
use soundhub_service::admin::{AdminAuthService, AdminProvisioner};
use soundhub_service::metrics::MetricsService;

use crate::graphql::{MetricsPolicy, build_schema};
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Builds application state over the given stores.
///
/// Creates the configured bootstrap admin if it does not exist yet.
pub async fn build_state(
    config: AppConfig,
    admin_store: Arc<dyn AdminStore>,
    catalog_store: Arc<dyn CatalogStore>,
) -> Result<AppState, AppError> {
    let hasher = Arc::new(PasswordHasher::from_config(&config.auth)?);
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    if let Some(bootstrap) = &config.auth.bootstrap_admin {
        let provisioner = AdminProvisioner::new(
            Arc::clone(&admin_store),
            Arc::clone(&hasher),
            Arc::new(PasswordValidator::new(&config.auth)),
        );
        if let Some(admin) = provisioner.ensure_bootstrap(bootstrap).await? {
            info!(admin_id = %admin.id, "Bootstrap admin created");
        }
    }

    let auth_service = Arc::new(AdminAuthService::new(
        admin_store,
        hasher,
        jwt_encoder,
    ));
    let metrics_service = Arc::new(MetricsService::new(catalog_store));

    if !config.auth.protect_metrics {
        warn!("Catalog counters are readable without an admin token");
    }

    let schema = build_schema(
        auth_service,
        Arc::clone(&metrics_service),
        MetricsPolicy {
            protect: config.auth.protect_metrics,
        },
    );

    Ok(AppState {
        config: Arc::new(config),
        schema,
        jwt_decoder,
        metrics_service,
    })
}

/// Runs the SoundHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(store = %config.store.provider, "Starting SoundHub server...");

    if config.auth.jwt_secret == AppConfig::default().auth.jwt_secret {
        warn!("Using the default JWT secret; set auth.jwt_secret before deploying");
    }

    let (admin_store, catalog_store, pool): (
        Arc<dyn AdminStore>,
        Arc<dyn CatalogStore>,
        Option<DatabasePool>,
    ) = match config.store.provider {
        StoreProvider::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            migration::run_migrations(db.pool()).await?;
            (
                Arc::new(AdminRepository::new(db.clone())),
                Arc::new(CatalogRepository::new(db.clone())),
                Some(db),
            )
        }
        StoreProvider::Memory => {
            warn!("Using in-memory stores; all data is lost on shutdown");
            (
                Arc::new(MemoryAdminStore::new()),
                Arc::new(MemoryCatalogStore::new()),
                None,
            )
        }
    };

    let addr = config.server.bind_address();
    let state = build_state(config, admin_store, catalog_store).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("SoundHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(db) = pool {
        db.close().await;
    }

    info!("SoundHub server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
