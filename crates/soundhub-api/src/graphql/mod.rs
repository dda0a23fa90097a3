//! GraphQL schema for the admin dashboard.
//!
//! Services are attached to the schema as shared data; the verified
//! bearer token is attached per request as [`Session`].

pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};

use soundhub_auth::jwt::Claims;
use soundhub_core::error::AppError;
use soundhub_service::admin::AdminAuthService;
use soundhub_service::context::RequestContext;
use soundhub_service::metrics::MetricsService;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The executable schema type.
pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Access policy for the catalog counters.
#[derive(Debug, Clone, Copy)]
pub struct MetricsPolicy {
    /// Require a verified admin token.
    pub protect: bool,
}

/// Per-request session data.
#[derive(Debug, Clone, Default)]
pub struct Session {
    claims: Option<Claims>,
}

impl Session {
    /// Wraps the verified claims of the current request.
    pub fn new(claims: Option<Claims>) -> Self {
        Self { claims }
    }

    /// Verified claims, if the request carried a valid token.
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }
}

/// Builds the schema with its services attached.
pub fn build_schema(
    auth_service: Arc<AdminAuthService>,
    metrics_service: Arc<MetricsService>,
    policy: MetricsPolicy,
) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth_service)
        .data(metrics_service)
        .data(policy)
        .finish()
}

/// Converts an `AppError` into a GraphQL error carrying `extensions.code`.
pub fn gql_error(err: AppError) -> async_graphql::Error {
    let code = err.kind.code();
    async_graphql::Error::new(err.message).extend_with(|_, ext| ext.set("code", code))
}

/// Resolves the request's admin context or fails with `UNAUTHORIZED`.
pub fn require_admin(ctx: &Context<'_>) -> async_graphql::Result<RequestContext> {
    let claims = ctx.data_opt::<Session>().and_then(Session::claims);
    match claims {
        Some(claims) if claims.is_admin() => Ok(RequestContext::from_claims(claims)),
        _ => Err(gql_error(AppError::unauthorized("Admin session required"))),
    }
}
