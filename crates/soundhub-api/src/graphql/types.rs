//! GraphQL output types.

use async_graphql::{ID, SimpleObject};

use soundhub_auth::guard::GuardDecision;
use soundhub_entity::admin::Admin;
use soundhub_service::admin::{LoginError, LoginOutcome};

/// Public view of an admin. The password hash is never exposed.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Admin")]
pub struct AdminObject {
    /// Admin ID.
    pub id: ID,
    /// Login email.
    pub email: String,
    /// First name.
    pub first_name: String,
}

impl From<Admin> for AdminObject {
    fn from(admin: Admin) -> Self {
        Self {
            id: ID(admin.id.to_string()),
            email: admin.email,
            first_name: admin.first_name,
        }
    }
}

/// Failure details of `loginAdmin`.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "LoginError")]
pub struct LoginErrorObject {
    /// Always `"Error logging in admin"`.
    pub message: String,
    /// Coarse failure reason.
    pub details: String,
}

impl From<LoginError> for LoginErrorObject {
    fn from(error: LoginError) -> Self {
        Self {
            message: error.message,
            details: error.details,
        }
    }
}

/// Result of `loginAdmin`.
#[derive(Debug, Clone, SimpleObject)]
pub struct AdminLoginPayload {
    /// The admin, on success.
    pub admin: Option<AdminObject>,
    /// Session token, on success.
    pub token: Option<String>,
    /// Error, on failure.
    pub error: Option<LoginErrorObject>,
}

impl From<LoginOutcome> for AdminLoginPayload {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            admin: outcome.admin.map(AdminObject::from),
            token: outcome.token,
            error: outcome.error.map(LoginErrorObject::from),
        }
    }
}

/// Guard decision for the dashboard pages.
#[derive(Debug, Clone, SimpleObject)]
pub struct SessionRoute {
    /// Whether the dashboard may render.
    pub allowed: bool,
    /// Where to navigate instead.
    pub redirect: Option<String>,
}

impl From<GuardDecision> for SessionRoute {
    fn from(decision: GuardDecision) -> Self {
        Self {
            allowed: decision.is_allowed(),
            redirect: decision.redirect_path().map(str::to_string),
        }
    }
}
