//! Store traits for the credential store and the catalog collections.
//!
//! The service layer depends only on these traits; the concrete backend
//! (PostgreSQL or in-memory) is chosen at startup from configuration.

use async_trait::async_trait;
use uuid::Uuid;

use soundhub_core::result::AppResult;
use soundhub_entity::admin::{Admin, CreateAdmin};
use soundhub_entity::catalog::Collection;

/// Persisted admin credentials.
#[async_trait]
pub trait AdminStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find the admin whose email matches exactly (case-sensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Find an admin by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>>;

    /// Create a new admin. Fails with a conflict when the email is taken.
    async fn create(&self, data: CreateAdmin) -> AppResult<Admin>;

    /// Replace an admin's password hash. Returns `false` if no such admin.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool>;
}

/// Read access to the catalog collections.
#[async_trait]
pub trait CatalogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Number of documents currently in `collection`.
    async fn count(&self, collection: Collection) -> AppResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
