//! Integration tests for the server-verified dashboard guard.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;
use soundhub_auth::jwt::Claims;
use soundhub_entity::role::Role;

const SESSION_ROUTE: &str = "{ sessionRoute { allowed redirect } }";

async fn route(app: &TestApp, token: Option<&str>) -> serde_json::Value {
    let response = app.graphql(SESSION_ROUTE, json!({}), token).await;
    assert!(response.body.get("errors").is_none());
    response.body["data"]["sessionRoute"].clone()
}

#[tokio::test]
async fn test_route_by_role() {
    let app = TestApp::new().await;

    assert_eq!(
        route(&app, Some(&app.token_for(Role::Admin))).await,
        json!({ "allowed": true, "redirect": null })
    );
    assert_eq!(
        route(&app, Some(&app.token_for(Role::User))).await,
        json!({ "allowed": false, "redirect": "/sound" })
    );
    assert_eq!(
        route(&app, Some(&app.token_for(Role::Artist))).await,
        json!({ "allowed": false, "redirect": "/artist" })
    );
}

#[tokio::test]
async fn test_anonymous_and_invalid_tokens_go_to_login() {
    let app = TestApp::new().await;
    let login = json!({ "allowed": false, "redirect": "/login/admin" });

    assert_eq!(route(&app, None).await, login);
    assert_eq!(route(&app, Some("garbage")).await, login);

    let mut tampered = app.token_for(Role::User);
    tampered.push('x');
    assert_eq!(route(&app, Some(&tampered)).await, login);
}

#[tokio::test]
async fn test_expired_token_goes_to_login() {
    let app = TestApp::new().await;
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4(),
        role: Role::Admin,
        name: "Ada".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(app.config.auth.jwt_secret.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        route(&app, Some(&token)).await,
        json!({ "allowed": false, "redirect": "/login/admin" })
    );
}

#[tokio::test]
async fn test_login_token_is_allowed() {
    let app = TestApp::new().await;
    app.create_admin("a@x.com", "pw1", "Ada").await;
    let token = app.login("a@x.com", "pw1").await;

    assert_eq!(route(&app, Some(&token)).await["allowed"], true);
}

#[tokio::test]
async fn test_graphiql_toggle() {
    let app = TestApp::new().await;
    let disabled = app.request("GET", "/graphql", None, None).await;
    assert_eq!(disabled.status, StatusCode::METHOD_NOT_ALLOWED);

    let mut config = TestApp::test_config();
    config.server.graphiql = true;
    let app = TestApp::with_config(config).await;
    let enabled = app.request("GET", "/graphql", None, None).await;
    assert_eq!(enabled.status, StatusCode::OK);
}
