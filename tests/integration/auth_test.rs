//! Integration tests for the admin login flow.

mod helpers;

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use soundhub_core::config::BootstrapAdminConfig;
use soundhub_core::error::ErrorKind;
use soundhub_database::memory::{MemoryAdminStore, MemoryCatalogStore};
use soundhub_entity::role::Role;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let admin_id = app.create_admin("a@x.com", "pw1", "Ada").await;

    let response = app.login_payload("a@x.com", "pw1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("errors").is_none());

    let payload = &response.body["data"]["loginAdmin"];
    assert_eq!(payload["admin"]["id"], admin_id.to_string());
    assert_eq!(payload["admin"]["email"], "a@x.com");
    assert_eq!(payload["admin"]["firstName"], "Ada");
    assert!(payload["error"].is_null());

    let claims = app.decode(payload["token"].as_str().unwrap());
    assert_eq!(claims.sub, admin_id);
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.name, "Ada");
}

#[tokio::test]
async fn test_unknown_email_matches_wrong_password() {
    let app = TestApp::new().await;
    app.create_admin("a@x.com", "pw1", "Ada").await;

    let unknown = app.login_payload("nobody@x.com", "pw1").await;
    let wrong = app.login_payload("a@x.com", "wrong").await;

    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(wrong.status, StatusCode::OK);
    assert!(unknown.body.get("errors").is_none());
    assert_eq!(unknown.body, wrong.body);

    let payload = &unknown.body["data"]["loginAdmin"];
    assert!(payload["admin"].is_null());
    assert!(payload["token"].is_null());
    assert_eq!(payload["error"]["message"], "Error logging in admin");
    assert_eq!(payload["error"]["details"], "Invalid email or password");
}

#[tokio::test]
async fn test_empty_credentials_rejected_in_payload() {
    let app = TestApp::new().await;
    app.create_admin("a@x.com", "pw1", "Ada").await;

    let response = app.login_payload("", "").await;
    assert!(response.body.get("errors").is_none());

    let payload = &response.body["data"]["loginAdmin"];
    assert!(payload["token"].is_null());
    assert_eq!(payload["error"]["details"], "Invalid email or password");
}

#[tokio::test]
async fn test_store_fault_reported_as_internal_details() {
    let app = TestApp::new().await;
    app.create_admin("a@x.com", "pw1", "Ada").await;
    app.admins.set_offline(true);

    let response = app.login_payload("a@x.com", "pw1").await;
    assert!(response.body.get("errors").is_none());

    let payload = &response.body["data"]["loginAdmin"];
    assert!(payload["admin"].is_null());
    assert_eq!(payload["error"]["message"], "Error logging in admin");
    assert_eq!(payload["error"]["details"], "Unable to complete login");
}

#[tokio::test]
async fn test_password_hash_not_queryable() {
    let app = TestApp::new().await;
    app.create_admin("a@x.com", "pw1", "Ada").await;

    let response = app
        .graphql(
            "mutation { loginAdmin(email: \"a@x.com\", password: \"pw1\") { admin { passwordHash } } }",
            json!({}),
            None,
        )
        .await;

    assert!(response.error_message().is_some());
    assert!(!response.body.to_string().contains("$argon2"));
}

#[tokio::test]
async fn test_current_admin_requires_admin_token() {
    let app = TestApp::new().await;
    app.create_admin("a@x.com", "pw1", "Ada").await;
    let token = app.login("a@x.com", "pw1").await;

    let query = "{ currentAdmin { email firstName } }";

    let response = app.graphql(query, json!({}), Some(&token)).await;
    assert_eq!(response.body["data"]["currentAdmin"]["email"], "a@x.com");
    assert_eq!(response.body["data"]["currentAdmin"]["firstName"], "Ada");

    let anonymous = app.graphql(query, json!({}), None).await;
    assert_eq!(anonymous.error_code(), Some("UNAUTHORIZED"));

    let artist = app
        .graphql(query, json!({}), Some(&app.token_for(Role::Artist)))
        .await;
    assert_eq!(artist.error_code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_bootstrap_admin_can_log_in() {
    let mut config = TestApp::test_config();
    config.auth.bootstrap_admin = Some(BootstrapAdminConfig {
        email: "root@x.com".to_string(),
        password: "Velvet-Harbor-Quartz-1987!".to_string(),
        first_name: "Root".to_string(),
    });
    let app = TestApp::with_config(config).await;

    assert_eq!(app.admins.len(), 1);
    let token = app.login("root@x.com", "Velvet-Harbor-Quartz-1987!").await;
    assert_eq!(app.decode(&token).name, "Root");
}

#[tokio::test]
async fn test_out_of_range_token_ttl_rejected_at_startup() {
    let mut config = TestApp::test_config();
    config.auth.token_ttl_minutes = u64::MAX;

    let err = soundhub_api::build_state(
        config,
        Arc::new(MemoryAdminStore::new()),
        Arc::new(MemoryCatalogStore::new()),
    )
    .await
    .err()
    .expect("state built with an unusable token TTL");
    assert_eq!(err.kind, ErrorKind::Configuration);
}
