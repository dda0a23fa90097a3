//! Session token issuance.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use tracing::debug;
use uuid::Uuid;

use soundhub_core::config::AuthConfig;
use soundhub_core::error::AppError;
use soundhub_entity::role::Role;

use super::claims::Claims;

/// Mints signed session tokens.
pub trait TokenIssuer: Send + Sync + std::fmt::Debug + 'static {
    /// Issue a token binding `subject`, `role`, and `display_name`.
    fn issue(&self, subject: Uuid, role: Role, display_name: &str)
    -> Result<IssuedToken, AppError>;
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Compact JWT string.
    pub token: String,
    /// Expiration timestamp embedded in the token.
    pub expires_at: DateTime<Utc>,
}

/// Creates HS256-signed JWT session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: TimeDelta,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl.num_minutes())
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when `token_ttl_minutes` is zero or too large to represent.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_minutes)
            .ok()
            .filter(|minutes| *minutes > 0)
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_minutes out of range: {}",
                    config.token_ttl_minutes
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }
}

impl TokenIssuer for JwtEncoder {
    fn issue(
        &self,
        subject: Uuid,
        role: Role,
        display_name: &str,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Session token expiry overflows"))?;

        let claims = Claims {
            sub: subject,
            role,
            name: display_name.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        debug!(subject = %subject, role = %role, "Issued session token");

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }
}
