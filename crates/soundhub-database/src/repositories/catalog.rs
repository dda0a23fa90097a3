//! Catalog repository implementation.

use async_trait::async_trait;
use tracing::debug;

use soundhub_core::error::{AppError, ErrorKind};
use soundhub_core::result::AppResult;
use soundhub_entity::catalog::Collection;

use crate::connection::DatabasePool;
use crate::store::CatalogStore;

/// Repository over the catalog tables.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    db: DatabasePool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for CatalogRepository {
    async fn count(&self, collection: Collection) -> AppResult<u64> {
        // Table names come from a closed enum, never from caller input.
        let query = format!("SELECT COUNT(*) FROM {}", collection.table_name());

        let total: i64 = sqlx::query_scalar(&query)
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Query failed: {e}"), e)
            })?;

        debug!(collection = %collection, total, "Counted collection");
        Ok(total.max(0) as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.ping().await.map(|()| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_store_fails_count_and_health() {
        let repo = CatalogRepository::new(DatabasePool::closed_port());

        let err = repo.count(Collection::Songs).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(repo.health_check().await.is_err());
    }
}
