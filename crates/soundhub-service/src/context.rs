//! Request context carrying the identity asserted by a verified token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use soundhub_auth::jwt::Claims;
use soundhub_core::error::AppError;
use soundhub_entity::role::Role;

/// Context for the current authenticated request.
///
/// Built from the claims of a bearer token that has already passed
/// signature and expiry checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated subject's ID.
    pub subject_id: Uuid,
    /// The role asserted by the token.
    pub role: Role,
    /// Display name from the token.
    pub display_name: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context from verified claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            subject_id: claims.subject_id(),
            role: claims.role,
            display_name: claims.display_name().to_string(),
            expires_at: claims.expires_at(),
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current subject is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with `UNAUTHORIZED` unless the subject is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if !self.is_admin() {
            return Err(AppError::unauthorized("Admin session required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Role) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: Uuid::new_v4(),
            role,
            name: "Ada".to_string(),
            iat: now,
            exp: now + 60,
        }
    }

    #[test]
    fn test_admin_context() {
        let c = claims(Role::Admin);
        let ctx = RequestContext::from_claims(&c);
        assert_eq!(ctx.subject_id, c.sub);
        assert_eq!(ctx.display_name, "Ada");
        assert!(ctx.require_admin().is_ok());
    }

    #[test]
    fn test_non_admin_rejected() {
        let ctx = RequestContext::from_claims(&claims(Role::Artist));
        assert!(!ctx.is_admin());
        assert!(ctx.require_admin().is_err());
    }
}
