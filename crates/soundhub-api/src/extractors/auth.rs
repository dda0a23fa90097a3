//! `SessionClaims` extractor: reads an optional bearer token and verifies it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use soundhub_auth::jwt::Claims;

use crate::state::AppState;

/// Verified claims of the request's bearer token, if any.
///
/// A missing, malformed, expired, or mis-signed token yields `None`;
/// the request proceeds anonymously and access checks happen in resolvers.
#[derive(Debug, Clone, Default)]
pub struct SessionClaims(pub Option<Claims>);

impl SessionClaims {
    /// Returns the verified claims.
    pub fn claims(&self) -> Option<&Claims> {
        self.0.as_ref()
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for SessionClaims {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
        else {
            return Ok(Self(None));
        };

        match state.jwt_decoder.decode(token) {
            Ok(claims) => Ok(Self(Some(claims))),
            Err(e) => {
                debug!(error = %e, "Ignoring invalid bearer token");
                Ok(Self(None))
            }
        }
    }
}
