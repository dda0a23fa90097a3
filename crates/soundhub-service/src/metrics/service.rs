//! Catalog counters backing the admin dashboard.
//!
//! Each counter is a fresh read against the store. Nothing is cached, so two
//! reads with no writes in between agree.

use std::sync::Arc;

use tracing::{debug, error};

use soundhub_core::error::AppError;
use soundhub_database::store::CatalogStore;
use soundhub_entity::catalog::Collection;

/// Counts documents in the catalog collections.
#[derive(Debug, Clone)]
pub struct MetricsService {
    /// Catalog store.
    catalog: Arc<dyn CatalogStore>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Number of documents in `collection`.
    ///
    /// Store faults keep their kind and gain a message naming the
    /// collection, e.g. `Failed to fetch songs: ...`.
    pub async fn count(&self, collection: Collection) -> Result<u64, AppError> {
        match self.catalog.count(collection).await {
            Ok(count) => {
                debug!(collection = %collection, count, "Counted collection");
                Ok(count)
            }
            Err(e) => {
                error!(collection = %collection, error = %e, "Count query failed");
                Err(e.context(format!("Failed to fetch {collection}")))
            }
        }
    }

    /// Total listener accounts.
    pub async fn user_count(&self) -> Result<u64, AppError> {
        self.count(Collection::Users).await
    }

    /// Total artist accounts.
    pub async fn artist_count(&self) -> Result<u64, AppError> {
        self.count(Collection::Artists).await
    }

    /// Total albums.
    pub async fn album_count(&self) -> Result<u64, AppError> {
        self.count(Collection::Albums).await
    }

    /// Total songs.
    pub async fn song_count(&self) -> Result<u64, AppError> {
        self.count(Collection::Songs).await
    }

    /// Total playlists.
    pub async fn playlist_count(&self) -> Result<u64, AppError> {
        self.count(Collection::Playlists).await
    }

    /// Whether the catalog backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.catalog.health_check().await.unwrap_or(false)
    }
}
