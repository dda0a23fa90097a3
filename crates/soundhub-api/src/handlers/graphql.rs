//! GraphQL endpoint handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use async_graphql::http::GraphiQLSource;

use soundhub_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::SessionClaims;
use crate::graphql::Session;
use crate::state::AppState;

/// POST /graphql
pub async fn execute(
    State(state): State<AppState>,
    SessionClaims(claims): SessionClaims,
    body: Result<Json<async_graphql::Request>, JsonRejection>,
) -> Result<Json<async_graphql::Response>, ApiError> {
    let Json(request) =
        body.map_err(|e| AppError::validation(format!("Invalid GraphQL request: {e}")))?;

    let request = request.data(Session::new(claims));
    Ok(Json(state.schema.execute(request).await))
}

/// GET /graphql
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
