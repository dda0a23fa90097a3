//! Mutation root: admin login.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use soundhub_service::admin::AdminAuthService;

use super::types::AdminLoginPayload;

/// Root mutation type.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Verifies admin credentials. Failures come back in `error`, never as
    /// a GraphQL error.
    async fn login_admin(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<AdminLoginPayload> {
        let service = ctx.data::<Arc<AdminAuthService>>()?;
        Ok(service.login(&email, &password).await.into())
    }
}
