//! Integration tests for the catalog counters.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use soundhub_entity::catalog::Collection;
use soundhub_entity::role::Role;

const ALL_COUNTS: &str = "{
    getUserCount
    getArtistCount
    getAlbumCount
    getSongCount
    getPlaylistCount
}";

fn seed(app: &TestApp, counts: [usize; 5]) {
    for (collection, n) in Collection::ALL.into_iter().zip(counts) {
        app.catalog.seed(collection, n);
    }
}

#[tokio::test]
async fn test_dashboard_counts() {
    let app = TestApp::new().await;
    seed(&app, [3, 2, 0, 5, 1]);
    let token = app.token_for(Role::Admin);

    let response = app.graphql(ALL_COUNTS, json!({}), Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("errors").is_none());
    assert_eq!(
        response.body["data"],
        json!({
            "getUserCount": 3,
            "getArtistCount": 2,
            "getAlbumCount": 0,
            "getSongCount": 5,
            "getPlaylistCount": 1,
        })
    );
}

#[tokio::test]
async fn test_counts_are_repeatable() {
    let app = TestApp::new().await;
    seed(&app, [7, 0, 0, 0, 0]);
    let token = app.token_for(Role::Admin);

    let first = app.graphql("{ getUserCount }", json!({}), Some(&token)).await;
    let second = app.graphql("{ getUserCount }", json!({}), Some(&token)).await;
    assert_eq!(first.body["data"]["getUserCount"], 7);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_counts_require_admin_token() {
    let app = TestApp::new().await;
    seed(&app, [1, 1, 1, 1, 1]);

    let anonymous = app.graphql("{ getSongCount }", json!({}), None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.error_code(), Some("UNAUTHORIZED"));

    for role in [Role::User, Role::Artist] {
        let response = app
            .graphql("{ getSongCount }", json!({}), Some(&app.token_for(role)))
            .await;
        assert_eq!(response.error_code(), Some("UNAUTHORIZED"), "{role}");
    }

    let forged = app
        .graphql("{ getSongCount }", json!({}), Some("not.a.token"))
        .await;
    assert_eq!(forged.error_code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_unprotected_counts_are_public() {
    let mut config = TestApp::test_config();
    config.auth.protect_metrics = false;
    let app = TestApp::with_config(config).await;
    seed(&app, [0, 4, 0, 0, 0]);

    let response = app.graphql("{ getArtistCount }", json!({}), None).await;
    assert_eq!(response.body["data"]["getArtistCount"], 4);
}

#[tokio::test]
async fn test_store_fault_names_entity() {
    let app = TestApp::new().await;
    seed(&app, [1, 1, 1, 1, 1]);
    app.catalog.set_offline(true);
    let token = app.token_for(Role::Admin);

    let cases = [
        ("getUserCount", "users"),
        ("getArtistCount", "artists"),
        ("getAlbumCount", "albums"),
        ("getSongCount", "songs"),
        ("getPlaylistCount", "playlists"),
    ];

    for (field, entity) in cases {
        let response = app
            .graphql(&format!("{{ {field} }}"), json!({}), Some(&token))
            .await;
        assert_eq!(response.error_code(), Some("DATABASE"), "{field}");
        let message = response.error_message().unwrap_or_default();
        assert!(message.contains(entity), "{field}: {message}");
    }
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");

    app.catalog.set_offline(true);
    let degraded = app.request("GET", "/api/health", None, None).await;
    assert_eq!(degraded.body["data"]["status"], "degraded");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .raw_request("POST", "/graphql", "{not json".to_string(), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}
