//! Admin credential login.
//!
//! Every failure is rendered into the same payload shape. Unknown email and
//! wrong password produce byte-identical payloads; only internal faults
//! carry a different `details` string.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use soundhub_auth::jwt::{IssuedToken, TokenIssuer};
use soundhub_auth::password::PasswordHasher;
use soundhub_core::error::AppError;
use soundhub_database::store::AdminStore;
use soundhub_entity::admin::Admin;
use soundhub_entity::role::Role;

use crate::context::RequestContext;

/// Top-level message on every failed login.
pub const LOGIN_FAILED_MESSAGE: &str = "Error logging in admin";
/// Details for rejected credentials.
pub const INVALID_CREDENTIALS_DETAILS: &str = "Invalid email or password";
/// Details for server-side faults.
pub const INTERNAL_FAULT_DETAILS: &str = "Unable to complete login";

/// Submitted login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginCredentials {
    /// Email, matched exactly against the stored value.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[serde(skip_serializing)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Why a login attempt failed.
#[derive(Debug, Error)]
pub enum LoginFailure {
    /// Email or password was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// No admin has that email.
    #[error("no admin with the submitted email")]
    NotFound,
    /// The admin exists but the password did not verify.
    #[error("password mismatch for admin {admin_id}")]
    BadPassword {
        /// The admin whose password was tried.
        admin_id: Uuid,
    },
    /// Store fault, malformed stored hash, or token signing failure.
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl LoginFailure {
    /// Short tag used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound => "not_found",
            Self::BadPassword { .. } => "bad_password",
            Self::Internal(_) => "internal",
        }
    }

    /// The client-facing `details` string.
    pub fn details(&self) -> &'static str {
        match self {
            Self::Internal(_) => INTERNAL_FAULT_DETAILS,
            _ => INVALID_CREDENTIALS_DETAILS,
        }
    }
}

/// A verified admin and the token issued for them.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The authenticated admin.
    pub admin: Admin,
    /// Signed session token.
    pub token: IssuedToken,
}

/// Client-facing login error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginError {
    /// Always [`LOGIN_FAILED_MESSAGE`].
    pub message: String,
    /// Coarse reason, never distinguishing unknown email from bad password.
    pub details: String,
}

/// Result of `loginAdmin`. Exactly one of (`admin` + `token`) or `error`
/// is populated.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// The admin on success.
    pub admin: Option<Admin>,
    /// The session token on success.
    pub token: Option<String>,
    /// The error on failure.
    pub error: Option<LoginError>,
}

impl LoginOutcome {
    fn success(session: AdminSession) -> Self {
        Self {
            admin: Some(session.admin),
            token: Some(session.token.token),
            error: None,
        }
    }

    fn failure(failure: &LoginFailure) -> Self {
        Self {
            admin: None,
            token: None,
            error: Some(LoginError {
                message: LOGIN_FAILED_MESSAGE.to_string(),
                details: failure.details().to_string(),
            }),
        }
    }

    /// Whether the login succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Verifies admin credentials and issues session tokens.
#[derive(Debug, Clone)]
pub struct AdminAuthService {
    /// Credential store.
    store: Arc<dyn AdminStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    issuer: Arc<dyn TokenIssuer>,
}

impl AdminAuthService {
    /// Creates a new admin auth service.
    pub fn new(
        store: Arc<dyn AdminStore>,
        hasher: Arc<PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    /// Checks credentials and issues a token, keeping the failure cause.
    pub async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AdminSession, LoginFailure> {
        credentials
            .validate()
            .map_err(|e| LoginFailure::InvalidInput(e.to_string()))?;

        let Some(admin) = self.store.find_by_email(&credentials.email).await? else {
            self.hasher.verify_dummy(&credentials.password);
            return Err(LoginFailure::NotFound);
        };

        if !self
            .hasher
            .verify_password(&credentials.password, &admin.password_hash)?
        {
            return Err(LoginFailure::BadPassword { admin_id: admin.id });
        }

        let token = self.issuer.issue(admin.id, Role::Admin, &admin.first_name)?;

        Ok(AdminSession { admin, token })
    }

    /// Logs an admin in, folding any failure into the payload.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let credentials = LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.authenticate(&credentials).await {
            Ok(session) => {
                info!(admin_id = %session.admin.id, "Admin login successful");
                LoginOutcome::success(session)
            }
            Err(failure) => {
                match &failure {
                    LoginFailure::Internal(e) => {
                        error!(reason = failure.reason(), error = %e, "Admin login failed");
                    }
                    LoginFailure::BadPassword { admin_id } => {
                        warn!(reason = failure.reason(), admin_id = %admin_id, "Admin login rejected");
                    }
                    _ => {
                        warn!(reason = failure.reason(), "Admin login rejected");
                    }
                }
                LoginOutcome::failure(&failure)
            }
        }
    }

    /// Loads the admin identified by the request's token.
    pub async fn current_admin(&self, ctx: &RequestContext) -> Result<Admin, AppError> {
        ctx.require_admin()?;

        self.store
            .find_by_id(ctx.subject_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Admin no longer exists"))
    }
}
