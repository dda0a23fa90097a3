//! In-memory catalog store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use soundhub_core::result::AppResult;
use soundhub_entity::catalog::Collection;

use super::Availability;
use crate::store::CatalogStore;

/// Catalog documents grouped by collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    documents: Arc<DashMap<Collection, Vec<Value>>>,
    availability: Arc<Availability>,
}

impl MemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document to a collection.
    pub fn insert(&self, collection: Collection, document: Value) {
        self.documents.entry(collection).or_default().push(document);
    }

    /// Append `n` placeholder documents to a collection.
    pub fn seed(&self, collection: Collection, n: usize) {
        let mut docs = self.documents.entry(collection).or_default();
        for i in 0..n {
            docs.push(serde_json::json!({ "seq": i }));
        }
    }

    /// Make every subsequent call fail (`true`) or succeed again (`false`).
    pub fn set_offline(&self, offline: bool) {
        self.availability.set_offline(offline);
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn count(&self, collection: Collection) -> AppResult<u64> {
        self.availability.check()?;
        let total = self
            .documents
            .get(&collection)
            .map(|docs| docs.len())
            .unwrap_or(0);
        Ok(total as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.availability.check()?;
        Ok(true)
    }
}
