//! JWT claims structure carried by session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use soundhub_entity::role::Role;

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account ID.
    pub sub: Uuid,
    /// Privilege class at issuance. Immutable once signed.
    pub role: Role,
    /// Display name (the admin's first name).
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the subject ID.
    pub fn subject_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Whether the token asserts the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
