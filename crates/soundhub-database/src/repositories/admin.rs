//! Admin repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use soundhub_core::error::{AppError, ErrorKind};
use soundhub_core::result::AppResult;
use soundhub_entity::admin::{Admin, CreateAdmin};

use crate::connection::DatabasePool;
use crate::store::AdminStore;

/// Repository for admin credential lookups and provisioning.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    db: DatabasePool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e)
            })
    }

    async fn create(&self, data: CreateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (email, password_hash, first_name) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admins_email_key") =>
            {
                AppError::conflict(format!("Admin '{}' already exists", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE admins SET password_hash = $1, updated_at = $2 WHERE id = $3")
                .bind(password_hash)
                .bind(Utc::now())
                .bind(id)
                .execute(self.db.pool())
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
