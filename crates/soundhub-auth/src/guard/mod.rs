//! Route guard for the admin dashboard pages.
//!
//! The same decision table is evaluated either from client-held session
//! state or from the claims of a verified bearer token.

use serde::Serialize;

use soundhub_entity::role::Role;

use crate::jwt::Claims;

/// Landing page for regular listeners.
pub const USER_HOME: &str = "/sound";
/// Landing page for artists.
pub const ARTIST_HOME: &str = "/artist";
/// Admin login page.
pub const ADMIN_LOGIN: &str = "/login/admin";

/// Session state as held by the dashboard client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientSession {
    /// Whether the client believes it is logged in.
    pub logged_in: bool,
    /// The role the client recorded at login, if any.
    pub user_type: Option<Role>,
}

impl ClientSession {
    /// An anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in session with the given role.
    pub fn logged_in_as(role: Role) -> Self {
        Self {
            logged_in: true,
            user_type: Some(role),
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "path", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the guarded page.
    Allow,
    /// Navigate away to the given path.
    Redirect(&'static str),
}

impl GuardDecision {
    /// Whether the page may be rendered.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect target, if any.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Gates dashboard pages on the admin role.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionGuard;

impl SessionGuard {
    /// Evaluates client-held session state.
    pub fn evaluate_client(session: &ClientSession) -> GuardDecision {
        if !session.logged_in {
            return GuardDecision::Redirect(ADMIN_LOGIN);
        }

        match session.user_type {
            Some(Role::User) => GuardDecision::Redirect(USER_HOME),
            Some(Role::Artist) => GuardDecision::Redirect(ARTIST_HOME),
            Some(Role::Admin) => GuardDecision::Allow,
            None => GuardDecision::Redirect(ADMIN_LOGIN),
        }
    }

    /// Evaluates the claims of a verified token. `None` means no token or
    /// a token that failed verification, and is treated as logged out.
    pub fn evaluate_claims(claims: Option<&Claims>) -> GuardDecision {
        let session = match claims {
            Some(claims) if !claims.is_expired() => ClientSession::logged_in_as(claims.role),
            _ => ClientSession::anonymous(),
        };
        Self::evaluate_client(&session)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn claims(role: Role, exp_offset: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: Uuid::new_v4(),
            role,
            name: "Ada".to_string(),
            iat: now,
            exp: now + exp_offset,
        }
    }

    #[test]
    fn test_client_decision_table() {
        let cases = [
            (ClientSession::logged_in_as(Role::User), GuardDecision::Redirect("/sound")),
            (ClientSession::logged_in_as(Role::Artist), GuardDecision::Redirect("/artist")),
            (ClientSession::logged_in_as(Role::Admin), GuardDecision::Allow),
            (ClientSession::anonymous(), GuardDecision::Redirect("/login/admin")),
            (
                ClientSession {
                    logged_in: false,
                    user_type: Some(Role::Admin),
                },
                GuardDecision::Redirect("/login/admin"),
            ),
            (
                ClientSession {
                    logged_in: true,
                    user_type: None,
                },
                GuardDecision::Redirect("/login/admin"),
            ),
        ];

        for (session, expected) in cases {
            assert_eq!(SessionGuard::evaluate_client(&session), expected, "{session:?}");
        }
    }

    #[test]
    fn test_claims_follow_client_table() {
        assert_eq!(
            SessionGuard::evaluate_claims(Some(&claims(Role::Admin, 600))),
            GuardDecision::Allow
        );
        assert_eq!(
            SessionGuard::evaluate_claims(Some(&claims(Role::Artist, 600))),
            GuardDecision::Redirect(ARTIST_HOME)
        );
        assert_eq!(
            SessionGuard::evaluate_claims(None),
            GuardDecision::Redirect(ADMIN_LOGIN)
        );
    }

    #[test]
    fn test_expired_claims_are_logged_out() {
        let decision = SessionGuard::evaluate_claims(Some(&claims(Role::Admin, -60)));
        assert_eq!(decision.redirect_path(), Some(ADMIN_LOGIN));
        assert!(!decision.is_allowed());
    }
}
