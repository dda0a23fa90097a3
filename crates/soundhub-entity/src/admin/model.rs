//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A dashboard administrator.
///
/// Admins are provisioned out-of-band and only ever mutated by a
/// password reset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: Uuid,
    /// Login email, unique and matched exactly as stored.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// First name, used as the token display name.
    pub first_name: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdmin {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
}

impl CreateAdmin {
    /// Materialize a new admin row with a fresh id and timestamps.
    pub fn into_admin(self) -> Admin {
        let now = Utc::now();
        Admin {
            id: Uuid::new_v4(),
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            created_at: now,
            updated_at: now,
        }
    }
}
