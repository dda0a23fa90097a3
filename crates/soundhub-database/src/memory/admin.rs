//! In-memory admin store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use soundhub_core::error::AppError;
use soundhub_core::result::AppResult;
use soundhub_entity::admin::{Admin, CreateAdmin};

use super::Availability;
use crate::store::AdminStore;

/// Admins keyed by exact email.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdminStore {
    admins: Arc<DashMap<String, Admin>>,
    availability: Arc<Availability>,
}

impl MemoryAdminStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (`true`) or succeed again (`false`).
    pub fn set_offline(&self, offline: bool) {
        self.availability.set_offline(offline);
    }

    /// Number of stored admins.
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// Whether the store holds no admins.
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        self.availability.check()?;
        Ok(self.admins.get(email).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        self.availability.check()?;
        Ok(self
            .admins
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, data: CreateAdmin) -> AppResult<Admin> {
        self.availability.check()?;
        match self.admins.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Admin '{}' already exists",
                data.email
            ))),
            Entry::Vacant(slot) => {
                let admin = data.into_admin();
                slot.insert(admin.clone());
                Ok(admin)
            }
        }
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool> {
        self.availability.check()?;
        for mut entry in self.admins.iter_mut() {
            if entry.id == id {
                entry.password_hash = password_hash.to_string();
                entry.updated_at = Utc::now();
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(email: &str) -> CreateAdmin {
        CreateAdmin {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            first_name: "Ada".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let store = MemoryAdminStore::new();
        store.create(sample("a@x.com")).await.unwrap();

        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_by_email("A@X.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryAdminStore::new();
        store.create(sample("a@x.com")).await.unwrap();
        let err = store.create(sample("a@x.com")).await.unwrap_err();
        assert_eq!(err.kind, soundhub_core::error::ErrorKind::Conflict);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_password() {
        let store = MemoryAdminStore::new();
        let admin = store.create(sample("a@x.com")).await.unwrap();

        assert!(store.update_password(admin.id, "new-hash").await.unwrap());
        assert!(!store.update_password(Uuid::new_v4(), "x").await.unwrap());

        let stored = store.find_by_id(admin.id).await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "new-hash");
    }

    #[tokio::test]
    async fn test_offline_store_fails() {
        let store = MemoryAdminStore::new();
        store.set_offline(true);
        assert!(store.find_by_email("a@x.com").await.is_err());
        store.set_offline(false);
        assert!(store.find_by_email("a@x.com").await.is_ok());
    }
}
