//! Query root: catalog counters and session introspection.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use soundhub_auth::guard::SessionGuard;
use soundhub_entity::catalog::Collection;
use soundhub_service::admin::AdminAuthService;
use soundhub_service::metrics::MetricsService;

use super::types::{AdminObject, SessionRoute};
use super::{MetricsPolicy, Session, gql_error, require_admin};

/// Root query type.
#[derive(Debug, Default)]
pub struct QueryRoot;

async fn count(ctx: &Context<'_>, collection: Collection) -> Result<u64> {
    if ctx.data::<MetricsPolicy>()?.protect {
        require_admin(ctx)?;
    }

    ctx.data::<Arc<MetricsService>>()?
        .count(collection)
        .await
        .map_err(gql_error)
}

#[Object]
impl QueryRoot {
    /// Number of listener accounts.
    async fn get_user_count(&self, ctx: &Context<'_>) -> Result<u64> {
        count(ctx, Collection::Users).await
    }

    /// Number of artist accounts.
    async fn get_artist_count(&self, ctx: &Context<'_>) -> Result<u64> {
        count(ctx, Collection::Artists).await
    }

    /// Number of albums.
    async fn get_album_count(&self, ctx: &Context<'_>) -> Result<u64> {
        count(ctx, Collection::Albums).await
    }

    /// Number of songs.
    async fn get_song_count(&self, ctx: &Context<'_>) -> Result<u64> {
        count(ctx, Collection::Songs).await
    }

    /// Number of playlists.
    async fn get_playlist_count(&self, ctx: &Context<'_>) -> Result<u64> {
        count(ctx, Collection::Playlists).await
    }

    /// Dashboard guard decision for the request's bearer token.
    async fn session_route(&self, ctx: &Context<'_>) -> SessionRoute {
        let claims = ctx.data_opt::<Session>().and_then(Session::claims);
        SessionGuard::evaluate_claims(claims).into()
    }

    /// The admin identified by the request's bearer token.
    async fn current_admin(&self, ctx: &Context<'_>) -> Result<AdminObject> {
        let request = require_admin(ctx)?;

        ctx.data::<Arc<AdminAuthService>>()?
            .current_admin(&request)
            .await
            .map(AdminObject::from)
            .map_err(gql_error)
    }
}
